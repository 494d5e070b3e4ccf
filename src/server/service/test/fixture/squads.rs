use super::*;

/// Tests the squad sheet of a match.
///
/// Verifies starters and substitutes are split per side and a zero shirt
/// number falls back to the player's own number.
///
/// Expected: one starter and one substitute for the home side
#[tokio::test]
async fn splits_starters_and_substitutes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (city, _, _, week) = factory::create_league_with_week(db).await?;
    let (home, _, fixture) = factory::create_played_match(db, &week, city.id, 1, 0).await?;
    let keeper = PlayerFactory::new(db, Some(home.id))
        .number(1)
        .build()
        .await?;
    let bench = factory::create_player(db, home.id).await?;
    factory::create_squad_entry(db, fixture.id, keeper.id, home.id, true, 0).await?;
    factory::create_squad_entry(db, fixture.id, bench.id, home.id, false, 14).await?;

    let squads = MatchService::new(db).squads(fixture.id).await?;

    assert_eq!(squads.home.starting.len(), 1);
    assert_eq!(squads.home.starting[0].number, Some(1));
    assert_eq!(squads.home.substitutes.len(), 1);
    assert_eq!(squads.home.substitutes[0].number, Some(14));
    assert!(squads.away.starting.is_empty());

    Ok(())
}
