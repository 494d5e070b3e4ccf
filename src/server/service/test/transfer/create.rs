use super::*;

/// Tests a request between two captained teams.
///
/// Verifies the current team's captain approves, both the captain and the
/// player are notified, and a talks news item is published for the current team.
///
/// Expected: Ok(pending request) with two notifications and one news item
#[tokio::test]
async fn creates_request_for_captained_team() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_transfer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let current = TeamFactory::new(db, city.id).name("Rovers").build().await?;
    let target = factory::create_team(db, city.id).await?;
    let (player_user, _) = member(db, current.id, UserType::Player).await?;
    let (captain, _) = member(db, current.id, UserType::Captain).await?;
    let (requester, _) = member(db, target.id, UserType::Captain).await?;

    let notifier = RecordingNotifier::default();
    let created = TransferService::new(db, &notifier, PLACEHOLDER)
        .create(request(&player_user, &requester))
        .await?;

    assert_eq!(created.status, "pending");
    assert_eq!(created.approval_captain_user_id, Some(captain.id.clone()));

    let sent = notifier.sent();
    assert_eq!(pushed_to(&sent, &captain), vec![notice::offer_to_captain()]);
    assert_eq!(pushed_to(&sent, &player_user), vec![notice::offer_to_player()]);

    let news = entity::prelude::MatchNews::find().all(db).await?;
    assert_eq!(news.len(), 1);
    assert_eq!(news[0].title, "Transfer talks");
    assert_eq!(news[0].team_id, Some(current.id));
    assert_eq!(news[0].main_photo.as_deref(), Some(PLACEHOLDER));
    assert!(news[0].published);

    Ok(())
}

/// Tests a player on a free team with no captain.
///
/// Expected: the player approves their own transfer and only gets the free team offer
#[tokio::test]
async fn free_team_without_captain_self_approves() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_transfer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let free = TeamFactory::new(db, city.id).is_free(true).build().await?;
    let target = factory::create_team(db, city.id).await?;
    let (player_user, _) = member(db, free.id, UserType::Player).await?;
    let (requester, _) = member(db, target.id, UserType::Captain).await?;

    let notifier = RecordingNotifier::default();
    let created = TransferService::new(db, &notifier, PLACEHOLDER)
        .create(request(&player_user, &requester))
        .await?;

    assert_eq!(created.approval_captain_user_id, Some(player_user.id.clone()));
    assert_eq!(
        notifier.sent(),
        vec![Sent::User(
            player_user.external_id.clone().unwrap(),
            notice::free_team_offer()
        )]
    );

    Ok(())
}

/// Tests a request where both users play for the same team.
///
/// Expected: Err(BadRequest) and nothing stored
#[tokio::test]
async fn rejects_same_team() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_transfer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let team = factory::create_team(db, city.id).await?;
    let (player_user, _) = member(db, team.id, UserType::Player).await?;
    let (captain, _) = member(db, team.id, UserType::Captain).await?;

    let notifier = RecordingNotifier::default();
    let result = TransferService::new(db, &notifier, PLACEHOLDER)
        .create(request(&player_user, &captain))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(entity::prelude::PlayerTransferRequest::find()
        .all(db)
        .await?
        .is_empty());

    Ok(())
}

/// Tests that neither user having a player row counts as the same team.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_users_without_player_rows() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_transfer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player_user = factory::create_user(db, UserType::Player).await?;
    let captain = factory::create_user(db, UserType::Captain).await?;

    let notifier = RecordingNotifier::default();
    let result = TransferService::new(db, &notifier, PLACEHOLDER)
        .create(request(&player_user, &captain))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests a second request while one is still pending.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_second_pending_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_transfer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let current = factory::create_team(db, city.id).await?;
    let target = factory::create_team(db, city.id).await?;
    let (player_user, _) = member(db, current.id, UserType::Player).await?;
    member(db, current.id, UserType::Captain).await?;
    let (requester, _) = member(db, target.id, UserType::Captain).await?;
    factory::create_transfer_request(db, &player_user.id, &requester.id, TransferStatus::Pending)
        .await?;

    let notifier = RecordingNotifier::default();
    let result = TransferService::new(db, &notifier, PLACEHOLDER)
        .create(request(&player_user, &requester))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests a city that has closed transfers.
///
/// Expected: Err(BadRequest) for a regular team
#[tokio::test]
async fn rejects_banned_city() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_transfer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    factory::create_city_restriction(db, city.id, true).await?;
    let current = factory::create_team(db, city.id).await?;
    let target = factory::create_team(db, city.id).await?;
    let (player_user, _) = member(db, current.id, UserType::Player).await?;
    member(db, current.id, UserType::Captain).await?;
    let (requester, _) = member(db, target.id, UserType::Captain).await?;

    let notifier = RecordingNotifier::default();
    let result = TransferService::new(db, &notifier, PLACEHOLDER)
        .create(request(&player_user, &requester))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(notifier.sent().is_empty());

    Ok(())
}

/// Tests a regular team that has no captain.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_team_without_captain() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_transfer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let current = factory::create_team(db, city.id).await?;
    let target = factory::create_team(db, city.id).await?;
    let (player_user, _) = member(db, current.id, UserType::Player).await?;
    let (requester, _) = member(db, target.id, UserType::Captain).await?;

    let notifier = RecordingNotifier::default();
    let result = TransferService::new(db, &notifier, PLACEHOLDER)
        .create(request(&player_user, &requester))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that a failing push gateway does not fail the request.
///
/// Expected: Ok(pending request)
#[tokio::test]
async fn push_failure_keeps_request() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_transfer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let current = factory::create_team(db, city.id).await?;
    let target = factory::create_team(db, city.id).await?;
    let (player_user, _) = member(db, current.id, UserType::Player).await?;
    member(db, current.id, UserType::Captain).await?;
    let (requester, _) = member(db, target.id, UserType::Captain).await?;

    let notifier = RecordingNotifier::failing();
    let created = TransferService::new(db, &notifier, PLACEHOLDER)
        .create(request(&player_user, &requester))
        .await?;

    assert_eq!(created.status, "pending");

    Ok(())
}
