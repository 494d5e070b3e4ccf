use super::*;

/// Tests adding a team for the first time and then again.
///
/// Expected: first call subscribes to the team topic, second answers `already`
#[tokio::test]
async fn adds_once_and_subscribes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_transfer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let team = factory::create_team(db, city.id).await?;

    let notifier = RecordingNotifier::default();
    let service = FavouriteService::new(db, &notifier);

    let first = service.add_team(favourite(team.id)).await?;
    let second = service.add_team(favourite(team.id)).await?;

    assert!(first.success && !first.already);
    assert!(second.success && second.already);
    assert_eq!(
        notifier.sent(),
        vec![Sent::Subscribe(
            vec!["token-1".to_string()],
            format!("team_{}_en", team.id)
        )]
    );
    assert!(
        FavouriteRepository::new(db)
            .is_favourite(team.id, "mac-1")
            .await?
    );

    Ok(())
}

/// Tests a subscription failure after the row was stored.
///
/// Expected: Err(Unavailable) with the favourite kept
#[tokio::test]
async fn subscription_failure_keeps_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_transfer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let team = factory::create_team(db, city.id).await?;

    let notifier = RecordingNotifier::failing();
    let result = FavouriteService::new(db, &notifier)
        .add_team(favourite(team.id))
        .await;

    assert!(matches!(result, Err(AppError::Unavailable(_))));
    assert!(
        FavouriteRepository::new(db)
            .is_favourite(team.id, "mac-1")
            .await?
    );

    Ok(())
}

/// Tests subscribing a device to the broadcast topic without a token.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn subscribe_all_requires_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_transfer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let notifier = RecordingNotifier::default();
    let service = FavouriteService::new(db, &notifier);

    let result = service
        .add_user_to_all(SubscribeAllDto {
            user_token: "  ".to_string(),
            culture: "tr".to_string(),
        })
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    service
        .add_user_to_all(SubscribeAllDto {
            user_token: "token-2".to_string(),
            culture: "tr".to_string(),
        })
        .await?;
    assert_eq!(
        notifier.sent(),
        vec![Sent::Subscribe(
            vec!["token-2".to_string()],
            "all_users_tr".to_string()
        )]
    );

    Ok(())
}
