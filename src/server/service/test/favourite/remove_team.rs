use super::*;

/// Tests removing a favourite that exists and then one that does not.
///
/// Expected: first call deletes and unsubscribes, second answers `already`
#[tokio::test]
async fn removes_and_unsubscribes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_transfer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let team = factory::create_team(db, city.id).await?;
    FavouriteRepository::new(db)
        .create(team.id, "token-1", "mac-1")
        .await?;

    let notifier = RecordingNotifier::default();
    let service = FavouriteService::new(db, &notifier);

    let removed = service.remove_team(favourite(team.id)).await?;
    let again = service.remove_team(favourite(team.id)).await?;

    assert!(!removed.already);
    assert!(again.already);
    assert_eq!(
        notifier.sent(),
        vec![Sent::Unsubscribe(
            vec!["token-1".to_string()],
            format!("team_{}_en", team.id)
        )]
    );
    assert!(!service.is_favourite(team.id, "mac-1").await?.is_favourite);

    Ok(())
}

/// Tests the input checks shared by remove and is-favourite.
///
/// Expected: Err(BadRequest) for a non-positive team or a blank mac id
#[tokio::test]
async fn validates_team_and_mac() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_transfer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let notifier = RecordingNotifier::default();
    let service = FavouriteService::new(db, &notifier);

    assert!(matches!(
        service.remove_team(favourite(0)).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.is_favourite(1, " ").await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}
