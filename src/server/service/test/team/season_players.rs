use super::*;

/// Tests per-player season counts from squads, goals and cards.
///
/// Own goals are kept apart from goals and the other season is ignored.
///
/// Expected: striker 2 apps (1 start), 2 goals (1 penalty), 1 own goal, 1
/// yellow; keeper 1 app, 1 assist
#[tokio::test]
async fn counts_season_events_per_player() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (city, league, season, week) = factory::create_league_with_week(db).await?;
    let (home, away, first) = factory::create_played_match(db, &week, city.id, 2, 1).await?;
    let second = FixtureFactory::new(db, league.id, week.id, away.id, home.id)
        .score(0, 0)
        .build()
        .await?;
    let keeper = PlayerFactory::new(db, Some(home.id)).number(1).build().await?;
    let striker = PlayerFactory::new(db, Some(home.id)).number(9).build().await?;

    factory::create_squad_entry(db, first.id, striker.id, home.id, true, 9).await?;
    factory::create_squad_entry(db, first.id, keeper.id, home.id, true, 1).await?;
    factory::create_squad_entry(db, second.id, striker.id, home.id, false, 9).await?;
    GoalFactory::new(db, first.id, home.id, striker.id)
        .assist(keeper.id)
        .build()
        .await?;
    GoalFactory::new(db, first.id, home.id, striker.id)
        .penalty()
        .build()
        .await?;
    GoalFactory::new(db, first.id, away.id, striker.id)
        .own_goal()
        .build()
        .await?;
    factory::create_card(db, first.id, striker.id, CardType::Yellow, 30).await?;

    let other_season = factory::create_season(db, league.id).await?;
    let other_week = factory::create_week(db, league.id, other_season.id).await?;
    let old = FixtureFactory::new(db, league.id, other_week.id, home.id, away.id)
        .score(1, 0)
        .build()
        .await?;
    GoalFactory::new(db, old.id, home.id, striker.id).build().await?;

    let players = TeamService::new(db).season_players(home.id, season.id).await?;

    assert_eq!(
        players.iter().map(|p| p.player_id).collect::<Vec<_>>(),
        vec![keeper.id, striker.id]
    );
    let keeper_line = &players[0];
    assert_eq!(keeper_line.appearances, 1);
    assert_eq!(keeper_line.started, 1);
    assert_eq!(keeper_line.assists, 1);
    assert_eq!(keeper_line.goals, 0);

    let striker_line = &players[1];
    assert_eq!(striker_line.appearances, 2);
    assert_eq!(striker_line.started, 1);
    assert_eq!(striker_line.substitute, 1);
    assert_eq!(striker_line.goals, 2);
    assert_eq!(striker_line.penalties, 1);
    assert_eq!(striker_line.own_goals, 1);
    assert_eq!(striker_line.yellow_cards, 1);
    assert_eq!(striker_line.red_cards, 0);

    Ok(())
}

/// Tests a team with no active players.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn team_without_players_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (city, _, season, _) = factory::create_league_with_week(db).await?;
    let team = factory::create_team(db, city.id).await?;
    PlayerFactory::new(db, Some(team.id))
        .is_archived(true)
        .build()
        .await?;

    let result = TeamService::new(db).season_players(team.id, season.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
