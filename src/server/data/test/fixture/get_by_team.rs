use super::*;

/// Tests that home and away matches of a team are both returned by kick-off.
///
/// Expected: Ok with two matches, earliest first, excluding other teams' matches
#[tokio::test]
async fn returns_home_and_away_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (city, league, _season, week) = factory::create_league_with_week(db).await?;
    let team = factory::create_team(db, city.id).await?;
    let rival = factory::create_team(db, city.id).await?;
    let other = factory::create_team(db, city.id).await?;
    let kickoff = Utc.with_ymd_and_hms(2026, 3, 4, 19, 0, 0).unwrap();

    let later = FixtureFactory::new(db, league.id, week.id, team.id, rival.id)
        .match_date(kickoff + Duration::days(2))
        .build()
        .await?;
    let earlier = FixtureFactory::new(db, league.id, week.id, rival.id, team.id)
        .match_date(kickoff)
        .build()
        .await?;
    factory::create_fixture(db, league.id, week.id, rival.id, other.id).await?;

    let matches = FixtureRepository::new(db).get_by_team(team.id).await?;

    assert_eq!(
        matches.iter().map(|m| m.id).collect::<Vec<_>>(),
        vec![earlier.id, later.id]
    );

    Ok(())
}
