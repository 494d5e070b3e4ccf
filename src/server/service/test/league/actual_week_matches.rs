use super::*;

/// Tests a league that has no weeks yet.
///
/// Expected: Ok(block with no week and no matches)
#[tokio::test]
async fn empty_block_without_weeks() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let league = factory::create_league(db, city.id).await?;

    let block = LeagueService::new(db)
        .actual_week_matches(league.id, date(2026, 3, 4))
        .await?;

    assert_eq!(block.league_id, league.id);
    assert!(block.week_id.is_none());
    assert!(block.matches.is_empty());

    Ok(())
}

/// Tests picking the week whose start is nearest to today.
///
/// Expected: the second week and its single match
#[tokio::test]
async fn picks_week_starting_nearest_today() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let league = factory::create_league(db, city.id).await?;
    let season = factory::create_season(db, league.id).await?;
    WeekFactory::new(db, league.id, season.id)
        .span(date(2026, 3, 2), date(2026, 3, 8))
        .build()
        .await?;
    let second = WeekFactory::new(db, league.id, season.id)
        .week_number(2)
        .span(date(2026, 3, 9), date(2026, 3, 15))
        .build()
        .await?;
    let home = factory::create_team(db, city.id).await?;
    let away = factory::create_team(db, city.id).await?;
    let fixture = FixtureFactory::new(db, league.id, second.id, home.id, away.id)
        .build()
        .await?;

    let block = LeagueService::new(db)
        .actual_week_matches(league.id, date(2026, 3, 8))
        .await?;

    assert_eq!(block.week_id, Some(second.id));
    assert_eq!(block.matches.len(), 1);
    assert_eq!(block.matches[0].id, fixture.id);

    Ok(())
}
