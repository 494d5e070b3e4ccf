use super::*;

/// Tests the favourite lookups by device.
///
/// Expected: favourite for the stored device, not for others, and gone after delete
#[tokio::test]
async fn tracks_favourites_per_device() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_transfer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let team = factory::create_team(db, city.id).await?;
    let repo = FavouriteRepository::new(db);

    let row = repo.create(team.id, "token-1", "mac-1").await?;

    assert!(repo.is_favourite(team.id, "mac-1").await?);
    assert!(!repo.is_favourite(team.id, "mac-2").await?);
    assert!(repo.find_by_token(team.id, "token-1").await?.is_some());
    assert_eq!(
        repo.team_ids_for_mac("mac-1").await?.into_iter().collect::<Vec<_>>(),
        vec![team.id]
    );

    repo.delete(row.id).await?;
    assert!(repo.find_by_mac(team.id, "mac-1").await?.is_none());

    Ok(())
}
