use super::*;

fn counts(board: &[TeamCountDto]) -> Vec<(i32, i32)> {
    board.iter().map(|c| (c.team_id, c.count)).collect()
}

/// Tests the team leaderboards.
///
/// Own goals do not count for scoring; assists and cards go to the player's
/// own team.
///
/// Expected: scoring [home 2, away 1], assisting [home 2], yellows [away 2],
/// reds [home 1]
#[tokio::test]
async fn counts_per_team() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (city, league, season, week) = factory::create_league_with_week(db).await?;
    let (home, away, fixture) = factory::create_played_match(db, &week, city.id, 3, 1).await?;
    let striker = factory::create_player(db, home.id).await?;
    let winger = factory::create_player(db, home.id).await?;
    let forward = factory::create_player(db, away.id).await?;
    let defender = factory::create_player(db, away.id).await?;

    for _ in 0..2 {
        GoalFactory::new(db, fixture.id, home.id, striker.id)
            .assist(winger.id)
            .build()
            .await?;
    }
    GoalFactory::new(db, fixture.id, away.id, forward.id)
        .build()
        .await?;
    GoalFactory::new(db, fixture.id, home.id, defender.id)
        .own_goal()
        .build()
        .await?;
    factory::create_card(db, fixture.id, forward.id, CardType::Yellow, 20).await?;
    factory::create_card(db, fixture.id, defender.id, CardType::Yellow, 60).await?;
    factory::create_card(db, fixture.id, striker.id, CardType::Red, 80).await?;

    let service = StatisticsService::new(db);
    let boards = service.top_teams(league.id, season.id, 5).await?;

    assert_eq!(counts(&boards.top_scoring), vec![(home.id, 2), (away.id, 1)]);
    assert_eq!(counts(&boards.top_assisting), vec![(home.id, 2)]);
    assert_eq!(counts(&boards.top_yellow_cards), vec![(away.id, 2)]);
    assert_eq!(counts(&boards.top_red_cards), vec![(home.id, 1)]);
    assert_eq!(boards.top_scoring[0].team_name, home.name);

    let leader = service.top_teams(league.id, season.id, 1).await?;
    assert_eq!(counts(&leader.top_scoring), vec![(home.id, 2)]);

    Ok(())
}

/// Tests a season without any events.
///
/// Expected: four empty boards
#[tokio::test]
async fn empty_season_has_empty_boards() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, league, season, _) = factory::create_league_with_week(db).await?;

    let boards = StatisticsService::new(db)
        .top_teams(league.id, season.id, 5)
        .await?;

    assert!(boards.top_scoring.is_empty());
    assert!(boards.top_assisting.is_empty());
    assert!(boards.top_yellow_cards.is_empty());
    assert!(boards.top_red_cards.is_empty());

    Ok(())
}
