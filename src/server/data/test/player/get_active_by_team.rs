use super::*;

/// Tests that archived players are excluded and the rest ordered by number.
///
/// Expected: Ok with numbers [3, 10]
#[tokio::test]
async fn excludes_archived_and_orders_by_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_match_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let team = factory::create_team(db, city.id).await?;
    PlayerFactory::new(db, Some(team.id)).number(10).build().await?;
    PlayerFactory::new(db, Some(team.id)).number(3).build().await?;
    PlayerFactory::new(db, Some(team.id))
        .number(7)
        .is_archived(true)
        .build()
        .await?;

    let players = PlayerRepository::new(db).get_active_by_team(team.id).await?;

    assert_eq!(
        players.iter().map(|p| p.number).collect::<Vec<_>>(),
        vec![Some(3), Some(10)]
    );

    Ok(())
}
