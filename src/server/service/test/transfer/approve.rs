use super::*;

/// Tests approving a pending request.
///
/// Verifies the player moves to the requesting captain's team, the player and
/// captain are notified, and a completed news item names the new team.
///
/// Expected: Ok(approved request)
#[tokio::test]
async fn approves_and_moves_player() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_transfer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let current = factory::create_team(db, city.id).await?;
    let target = factory::create_team(db, city.id).await?;
    let (player_user, player) = member(db, current.id, UserType::Player).await?;
    let (requester, _) = member(db, target.id, UserType::Captain).await?;
    let pending =
        factory::create_transfer_request(db, &player_user.id, &requester.id, TransferStatus::Pending)
            .await?;

    let notifier = RecordingNotifier::default();
    let approved = TransferService::new(db, &notifier, PLACEHOLDER)
        .approve(pending.id)
        .await?;

    assert_eq!(approved.status, "approved");
    assert!(approved.approval_date.is_some());
    assert_eq!(approved.approval_captain_user_id, Some(requester.id.clone()));

    let moved = entity::prelude::Player::find_by_id(player.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(moved.team_id, Some(target.id));

    let sent = notifier.sent();
    assert_eq!(pushed_to(&sent, &player_user), vec![notice::approved_to_player()]);
    assert_eq!(
        pushed_to(&sent, &requester),
        vec![notice::completed_to_captain(&player.full_name())]
    );

    let news = entity::prelude::MatchNews::find().all(db).await?;
    assert_eq!(news.len(), 1);
    assert_eq!(news[0].title, "Transfer completed");
    assert_eq!(news[0].team_id, Some(target.id));

    Ok(())
}

/// Tests that a rejected request cannot be approved.
///
/// Expected: Err(BadRequest) and the player stays put
#[tokio::test]
async fn refuses_rejected_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_transfer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let current = factory::create_team(db, city.id).await?;
    let target = factory::create_team(db, city.id).await?;
    let (player_user, player) = member(db, current.id, UserType::Player).await?;
    let (requester, _) = member(db, target.id, UserType::Captain).await?;
    let rejected =
        factory::create_transfer_request(db, &player_user.id, &requester.id, TransferStatus::Rejected)
            .await?;

    let notifier = RecordingNotifier::default();
    let result = TransferService::new(db, &notifier, PLACEHOLDER)
        .approve(rejected.id)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    let unchanged = entity::prelude::Player::find_by_id(player.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(unchanged.team_id, Some(current.id));
    assert!(notifier.sent().is_empty());

    Ok(())
}

/// Tests approving an id that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn missing_request_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_transfer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let notifier = RecordingNotifier::default();
    let result = TransferService::new(db, &notifier, PLACEHOLDER)
        .approve(999)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
