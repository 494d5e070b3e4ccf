use super::*;

/// Tests the season summary.
///
/// Expected: totals over every goal, top scorer first
#[tokio::test]
async fn summarizes_goals() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (city, league, season, week) = factory::create_league_with_week(db).await?;
    let (home, _, fixture) = factory::create_played_match(db, &week, city.id, 2, 0).await?;
    let striker = factory::create_player(db, home.id).await?;
    let winger = factory::create_player(db, home.id).await?;
    GoalFactory::new(db, fixture.id, home.id, striker.id)
        .assist(winger.id)
        .build()
        .await?;
    GoalFactory::new(db, fixture.id, home.id, striker.id)
        .penalty()
        .build()
        .await?;

    let stats = StatisticsService::new(db)
        .league(league.id, season.id, 10)
        .await?;

    assert_eq!(stats.total_goals, 2);
    assert_eq!(stats.total_assists, 1);
    assert_eq!(stats.total_penalty_goals, 1);
    assert_eq!(stats.top_scorers[0].player_id, striker.id);

    Ok(())
}

/// Tests a season without goals.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn season_without_goals_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (city, league, season, week) = factory::create_league_with_week(db).await?;
    factory::create_played_match(db, &week, city.id, 0, 0).await?;

    let result = StatisticsService::new(db)
        .league(league.id, season.id, 10)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
