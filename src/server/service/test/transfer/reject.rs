use super::*;

/// Tests rejecting a pending request.
///
/// Expected: Ok(rejected request) and the player is notified
#[tokio::test]
async fn rejects_and_notifies_player() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_transfer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player_user = factory::create_user(db, UserType::Player).await?;
    let requester = factory::create_user(db, UserType::Captain).await?;
    let pending =
        factory::create_transfer_request(db, &player_user.id, &requester.id, TransferStatus::Pending)
            .await?;

    let notifier = RecordingNotifier::default();
    let rejected = TransferService::new(db, &notifier, PLACEHOLDER)
        .reject(pending.id)
        .await?;

    assert_eq!(rejected.status, "rejected");
    assert!(rejected.rejection_date.is_some());
    assert_eq!(
        pushed_to(&notifier.sent(), &player_user),
        vec![notice::rejected_to_player()]
    );

    Ok(())
}

/// Tests that users without a push target are skipped.
///
/// Expected: Ok with nothing sent
#[tokio::test]
async fn skips_users_without_push_target() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_transfer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player_user = AppUserFactory::new(db)
        .user_type(UserType::Player)
        .external_id(None)
        .build()
        .await?;
    let requester = factory::create_user(db, UserType::Captain).await?;
    let pending =
        factory::create_transfer_request(db, &player_user.id, &requester.id, TransferStatus::Pending)
            .await?;

    let notifier = RecordingNotifier::default();
    TransferService::new(db, &notifier, PLACEHOLDER)
        .reject(pending.id)
        .await?;

    assert!(notifier.sent().is_empty());

    Ok(())
}

/// Tests rejecting a request that was already approved.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn refuses_approved_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_transfer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player_user = factory::create_user(db, UserType::Player).await?;
    let requester = factory::create_user(db, UserType::Captain).await?;
    let approved =
        factory::create_transfer_request(db, &player_user.id, &requester.id, TransferStatus::Approved)
            .await?;

    let notifier = RecordingNotifier::default();
    let result = TransferService::new(db, &notifier, PLACEHOLDER)
        .reject(approved.id)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
