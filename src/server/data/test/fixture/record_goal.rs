use super::*;

fn goal_params(match_id: i32, team_id: i32, player_id: i32) -> RecordGoalParams {
    RecordGoalParams {
        match_id,
        team_id,
        player_id,
        assist_player_id: None,
        minute: 33,
        is_penalty: true,
        is_own_goal: false,
        home_score: None,
        away_score: None,
    }
}

/// Tests that a goal is stored and the given score side overwritten.
///
/// Expected: Ok with the goal inserted, home score set, away score untouched
#[tokio::test]
async fn inserts_goal_and_updates_given_score() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (city, _league, _season, week) = factory::create_league_with_week(db).await?;
    let (home, _away, fixture) = factory::create_played_match(db, &week, city.id, 0, 2).await?;
    let scorer = factory::create_player(db, home.id).await?;

    let mut params = goal_params(fixture.id, home.id, scorer.id);
    params.home_score = Some(1);

    let goal = FixtureRepository::new(db).record_goal(params).await?;

    assert_eq!(goal.minute, 33);
    assert!(goal.is_penalty);

    let stored = entity::prelude::Fixture::find_by_id(fixture.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.home_score, Some(1));
    assert_eq!(stored.away_score, Some(2));

    Ok(())
}

/// Tests that a goal without score fields leaves the match row alone.
///
/// Expected: Ok with the original score kept
#[tokio::test]
async fn keeps_score_when_not_given() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (city, _league, _season, week) = factory::create_league_with_week(db).await?;
    let (home, _away, fixture) = factory::create_played_match(db, &week, city.id, 3, 1).await?;
    let scorer = factory::create_player(db, home.id).await?;

    FixtureRepository::new(db)
        .record_goal(goal_params(fixture.id, home.id, scorer.id))
        .await?;

    let stored = entity::prelude::Fixture::find_by_id(fixture.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!((stored.home_score, stored.away_score), (Some(3), Some(1)));

    Ok(())
}
