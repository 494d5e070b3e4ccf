use super::*;

/// Tests the most valuable players of a city.
///
/// Expected: active valued players of the city only, highest value first, capped at `top`
#[tokio::test]
async fn ranks_active_players_by_value() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let other_city = factory::create_city(db).await?;
    let team = factory::create_team(db, city.id).await?;
    let foreign = factory::create_team(db, other_city.id).await?;

    let cheap = PlayerFactory::new(db, Some(team.id))
        .player_value(1_000.0)
        .build()
        .await?;
    let star = PlayerFactory::new(db, Some(team.id))
        .player_value(50_000.0)
        .build()
        .await?;
    PlayerFactory::new(db, Some(team.id))
        .player_value(10_000.0)
        .build()
        .await?;
    PlayerFactory::new(db, Some(team.id))
        .player_value(90_000.0)
        .is_archived(true)
        .build()
        .await?;
    PlayerFactory::new(db, Some(foreign.id))
        .player_value(80_000.0)
        .build()
        .await?;

    let service = PlayerService::new(db);
    let top = service.valuable(city.id, 2).await?;

    assert_eq!(top.len(), 2);
    assert_eq!(top[0].player_id, star.id);
    assert_eq!(top[0].team_name.as_deref(), Some(team.name.as_str()));
    assert!(top.iter().all(|p| p.player_id != cheap.id));

    assert_eq!(service.valuable(city.id, 10).await?.len(), 3);

    Ok(())
}
