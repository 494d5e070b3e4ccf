use super::*;

/// Tests the suspension list of a week.
///
/// Expected: the week's suspensions only, by player last name, with team names
#[tokio::test]
async fn lists_by_last_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (city, league, season, week) = factory::create_league_with_week(db).await?;
    let next = factory::create_week(db, league.id, season.id).await?;
    let team = factory::create_team(db, city.id).await?;
    let yilmaz = PlayerFactory::new(db, Some(team.id))
        .name("Ali", "Yilmaz")
        .build()
        .await?;
    let demir = PlayerFactory::new(db, Some(team.id))
        .name("Can", "Demir")
        .build()
        .await?;
    insert_suspension(db, week.id, yilmaz.id, 1).await?;
    insert_suspension(db, week.id, demir.id, 2).await?;
    insert_suspension(db, next.id, demir.id, 1).await?;

    let rows = WeekService::new(db).suspensions(week.id).await?;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].player_id, demir.id);
    assert_eq!(rows[0].player_name, "Can Demir");
    assert_eq!(rows[0].games_suspended, 2);
    assert_eq!(rows[0].team_name.as_deref(), Some(team.name.as_str()));
    assert_eq!(rows[1].player_id, yilmaz.id);

    Ok(())
}

/// Tests a week without suspensions.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn empty_week_has_no_rows() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, week) = factory::create_league_with_week(db).await?;

    assert!(WeekService::new(db).suspensions(week.id).await?.is_empty());

    Ok(())
}
