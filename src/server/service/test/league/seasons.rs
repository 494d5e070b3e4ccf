use super::*;

/// Tests season spans and ordering.
///
/// Verifies a season without weeks is left out and seasons run newest first.
///
/// Expected: Ok(two seasons) spanning their first to last week
#[tokio::test]
async fn lists_seasons_with_weeks_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let league = factory::create_league(db, city.id).await?;
    let old = factory::create_season(db, league.id).await?;
    let new = factory::create_season(db, league.id).await?;
    factory::create_season(db, league.id).await?;

    WeekFactory::new(db, league.id, old.id)
        .span(date(2025, 3, 1), date(2025, 3, 7))
        .build()
        .await?;
    WeekFactory::new(db, league.id, old.id)
        .week_number(2)
        .span(date(2025, 3, 8), date(2025, 3, 14))
        .build()
        .await?;
    WeekFactory::new(db, league.id, new.id)
        .span(date(2026, 3, 1), date(2026, 3, 7))
        .build()
        .await?;

    let seasons = LeagueService::new(db).seasons(league.id).await?;

    assert_eq!(seasons.len(), 2);
    assert_eq!(seasons[0].season_id, new.id);
    assert_eq!(seasons[1].season_id, old.id);
    assert_eq!(seasons[1].start, date(2025, 3, 1));
    assert_eq!(seasons[1].end, date(2025, 3, 14));

    Ok(())
}

/// Tests seasons of a league that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn missing_league_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_league_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = LeagueService::new(db).seasons(42).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
