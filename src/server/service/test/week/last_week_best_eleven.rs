use super::*;

async fn insert_best_team(
    db: &DatabaseConnection,
    week: &entity::week::Model,
    best_player_id: i32,
) -> Result<entity::week_best_team::Model, DbErr> {
    let best = entity::week_best_team::ActiveModel {
        week_id: ActiveValue::Set(week.id),
        league_id: ActiveValue::Set(week.league_id),
        season_id: ActiveValue::Set(week.season_id),
        best_player_id: ActiveValue::Set(Some(best_player_id)),
        best_team_id: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await?;
    entity::week_best_team_player::ActiveModel {
        week_best_team_id: ActiveValue::Set(best.id),
        player_id: ActiveValue::Set(best_player_id),
        order_number: ActiveValue::Set(1),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(best)
}

/// Tests that the newest week of the city's leagues is used.
///
/// Expected: the second week's selection, not the first's
#[tokio::test]
async fn uses_newest_week_in_city() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (city, league, season, first) = factory::create_league_with_week(db).await?;
    let second = WeekFactory::new(db, league.id, season.id)
        .week_number(2)
        .build()
        .await?;
    let team = factory::create_team(db, city.id).await?;
    let early = factory::create_player(db, team.id).await?;
    let late = factory::create_player(db, team.id).await?;
    insert_best_team(db, &first, early.id).await?;
    insert_best_team(db, &second, late.id).await?;

    let other_city = factory::create_city(db).await?;
    let other_league = factory::create_league(db, other_city.id).await?;
    let other_season = factory::create_season(db, other_league.id).await?;
    factory::create_week(db, other_league.id, other_season.id).await?;

    let dto = WeekService::new(db).last_week_best_eleven(city.id).await?;

    assert_eq!(dto.week_id, second.id);
    assert_eq!(dto.week_number, 2);
    assert_eq!(dto.best_player.map(|p| p.player_id), Some(late.id));
    assert_eq!(
        dto.players.iter().map(|p| p.player_id).collect::<Vec<_>>(),
        vec![late.id]
    );

    Ok(())
}

/// Tests a city without weeks and a newest week without a selection.
///
/// Expected: Err(NotFound) for both
#[tokio::test]
async fn missing_week_or_selection_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let empty_city = factory::create_city(db).await?;
    let (city, _, _, _) = factory::create_league_with_week(db).await?;
    let service = WeekService::new(db);

    assert!(matches!(
        service.last_week_best_eleven(empty_city.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.last_week_best_eleven(city.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
