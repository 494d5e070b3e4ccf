use super::*;

/// Tests a team whose matches are all in the future.
///
/// Expected: the earliest week of the team, flagged as next week
#[tokio::test]
async fn falls_back_to_earliest_week() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let league = factory::create_league(db, city.id).await?;
    let season = factory::create_season(db, league.id).await?;
    let first = WeekFactory::new(db, league.id, season.id)
        .span(date(2026, 4, 6), date(2026, 4, 12))
        .build()
        .await?;
    let later = WeekFactory::new(db, league.id, season.id)
        .week_number(2)
        .span(date(2026, 4, 13), date(2026, 4, 19))
        .build()
        .await?;
    let team = factory::create_team(db, city.id).await?;
    let rival = factory::create_team(db, city.id).await?;
    factory::create_fixture(db, league.id, later.id, rival.id, team.id).await?;
    factory::create_fixture(db, league.id, first.id, team.id, rival.id).await?;

    let weeks = LeagueService::new(db)
        .team_current_weeks(team.id, date(2026, 3, 1))
        .await?;

    assert_eq!(weeks.len(), 1);
    assert_eq!(weeks[0].week_id, first.id);
    assert!(weeks[0].is_next_week);
    assert!(!weeks[0].is_current_week);
    assert_eq!(weeks[0].matches.len(), 1);

    Ok(())
}

/// Tests a team playing in the week that spans today.
///
/// Expected: that week, flagged as current
#[tokio::test]
async fn prefers_week_spanning_today() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let league = factory::create_league(db, city.id).await?;
    let season = factory::create_season(db, league.id).await?;
    let first = WeekFactory::new(db, league.id, season.id)
        .span(date(2026, 3, 2), date(2026, 3, 8))
        .build()
        .await?;
    let current = WeekFactory::new(db, league.id, season.id)
        .week_number(2)
        .span(date(2026, 3, 9), date(2026, 3, 15))
        .build()
        .await?;
    let team = factory::create_team(db, city.id).await?;
    let rival = factory::create_team(db, city.id).await?;
    factory::create_fixture(db, league.id, first.id, team.id, rival.id).await?;
    factory::create_fixture(db, league.id, current.id, rival.id, team.id).await?;

    let weeks = LeagueService::new(db)
        .team_current_weeks(team.id, date(2026, 3, 11))
        .await?;

    assert_eq!(weeks[0].week_id, current.id);
    assert!(weeks[0].is_current_week);

    Ok(())
}
