use super::*;

/// Tests ordering by value, the limit, and exclusion of unvalued players.
///
/// Expected: Ok with the two most valuable players, highest first
#[tokio::test]
async fn orders_by_value_and_limits() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let team = factory::create_team(db, city.id).await?;
    let mid = PlayerFactory::new(db, Some(team.id))
        .player_value(500.0)
        .build()
        .await?;
    let top = PlayerFactory::new(db, Some(team.id))
        .player_value(900.0)
        .build()
        .await?;
    PlayerFactory::new(db, Some(team.id))
        .player_value(100.0)
        .build()
        .await?;
    PlayerFactory::new(db, Some(team.id)).build().await?;
    PlayerFactory::new(db, Some(team.id))
        .player_value(5000.0)
        .is_archived(true)
        .build()
        .await?;

    let players = PlayerRepository::new(db).top_valuable([team.id], 2).await?;

    assert_eq!(
        players.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![top.id, mid.id]
    );

    Ok(())
}
