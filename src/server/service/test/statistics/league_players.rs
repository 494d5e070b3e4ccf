use super::*;

/// Tests the ranking of players with season activity.
///
/// Players without any activity and archived players are left out; the
/// result is cut to `top`.
///
/// Expected: [striker, winger, keeper] ranked by goals, assists, awards
#[tokio::test]
async fn ranks_players_with_activity() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (city, league, season, week) = factory::create_league_with_week(db).await?;
    let (home, away, fixture) = factory::create_played_match(db, &week, city.id, 3, 0).await?;
    let striker = factory::create_player(db, home.id).await?;
    let winger = factory::create_player(db, home.id).await?;
    let keeper = factory::create_player(db, home.id).await?;
    factory::create_player(db, home.id).await?;
    let retired = PlayerFactory::new(db, Some(away.id))
        .is_archived(true)
        .build()
        .await?;
    FixtureFactory::new(db, league.id, week.id, away.id, home.id)
        .score(0, 0)
        .man_of_the_match(keeper.id)
        .build()
        .await?;

    for assist in [Some(winger.id), None] {
        let mut goal = GoalFactory::new(db, fixture.id, home.id, striker.id);
        if let Some(assist) = assist {
            goal = goal.assist(assist);
        }
        goal.build().await?;
    }
    GoalFactory::new(db, fixture.id, home.id, winger.id)
        .build()
        .await?;
    GoalFactory::new(db, fixture.id, away.id, retired.id)
        .build()
        .await?;
    factory::create_squad_entry(db, fixture.id, striker.id, home.id, true, 9).await?;

    let service = StatisticsService::new(db);
    let rows = service.league_players(league.id, season.id, 10).await?;

    assert_eq!(
        rows.iter().map(|r| r.player_id).collect::<Vec<_>>(),
        vec![striker.id, winger.id, keeper.id]
    );
    assert_eq!(rows[0].goals, 2);
    assert_eq!(rows[0].appearances, 1);
    assert_eq!(rows[0].team_name.as_deref(), Some(home.name.as_str()));
    assert_eq!(rows[1].assists, 1);
    assert_eq!(rows[2].man_of_the_match, 1);

    let top_two = service.league_players(league.id, season.id, 2).await?;
    assert_eq!(top_two.len(), 2);

    Ok(())
}

/// Tests a season without weeks.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn season_without_weeks_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let league = factory::create_league(db, city.id).await?;
    let season = factory::create_season(db, league.id).await?;

    let result = StatisticsService::new(db)
        .league_players(league.id, season.id, 10)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
