use super::*;

/// Tests the team menu of a city with and without a device.
///
/// Expected: teams by name, only the stored favourite flagged for its device
#[tokio::test]
async fn flags_favourites_of_device() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_transfer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let other_city = factory::create_city(db).await?;
    let zeta = TeamFactory::new(db, city.id).name("Zeta").build().await?;
    let alpha = TeamFactory::new(db, city.id).name("Alpha").build().await?;
    TeamFactory::new(db, other_city.id).name("Beta").build().await?;
    FavouriteRepository::new(db)
        .create(zeta.id, "token", "mac-1")
        .await?;

    let service = CityService::new(db);
    let teams = service.menu_teams(city.id, Some("mac-1")).await?;

    assert_eq!(teams.len(), 2);
    assert_eq!(teams[0].id, alpha.id);
    assert!(!teams[0].is_favourite);
    assert_eq!(teams[1].id, zeta.id);
    assert!(teams[1].is_favourite);

    let anonymous = service.menu_teams(city.id, None).await?;
    assert!(anonymous.iter().all(|t| !t.is_favourite));

    let blank = service.menu_teams(city.id, Some("  ")).await?;
    assert!(blank.iter().all(|t| !t.is_favourite));

    Ok(())
}
