use super::*;

/// Tests subscribing a device to the broadcast topic of its language.
///
/// Expected: one subscription to "all_users_tr"
#[tokio::test]
async fn subscribes_to_language_topic() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_transfer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let notifier = RecordingNotifier::default();
    let result = FavouriteService::new(db, &notifier)
        .add_user_to_all(SubscribeAllDto {
            user_token: "token-1".to_string(),
            culture: "tr".to_string(),
        })
        .await?;

    assert!(result.success && !result.already);
    assert_eq!(
        notifier.sent(),
        vec![Sent::Subscribe(
            vec!["token-1".to_string()],
            "all_users_tr".to_string()
        )]
    );

    Ok(())
}

/// Tests a blank device token.
///
/// Expected: Err(BadRequest) and nothing sent
#[tokio::test]
async fn rejects_blank_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_transfer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let notifier = RecordingNotifier::default();
    let result = FavouriteService::new(db, &notifier)
        .add_user_to_all(SubscribeAllDto {
            user_token: "  ".to_string(),
            culture: "en".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(notifier.sent().is_empty());

    Ok(())
}

/// Tests a push provider failure.
///
/// Expected: Err(Unavailable)
#[tokio::test]
async fn provider_failure_is_unavailable() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_transfer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let notifier = RecordingNotifier::failing();
    let result = FavouriteService::new(db, &notifier)
        .add_user_to_all(SubscribeAllDto {
            user_token: "token-1".to_string(),
            culture: "en".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::Unavailable(_))));

    Ok(())
}
