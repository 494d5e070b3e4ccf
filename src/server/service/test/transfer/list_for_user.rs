use super::*;

/// Tests the list as seen by the approving captain.
///
/// Verifies names and teams are resolved and the decision button is shown.
///
/// Expected: Ok(one item) with button_show = true
#[tokio::test]
async fn approving_captain_can_decide() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_transfer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let current = TeamFactory::new(db, city.id).name("Rovers").build().await?;
    let target = TeamFactory::new(db, city.id).name("United").build().await?;
    let (player_user, player) = member(db, current.id, UserType::Player).await?;
    let (captain, _) = member(db, current.id, UserType::Captain).await?;
    let (requester, _) = member(db, target.id, UserType::Captain).await?;

    let notifier = RecordingNotifier::default();
    let service = TransferService::new(db, &notifier, PLACEHOLDER);
    service.create(request(&player_user, &requester)).await?;

    let items = service.list_for_user(&captain.id).await?;

    assert_eq!(items.len(), 1);
    let item = &items[0];
    assert_eq!(item.player_name, player.full_name());
    assert_eq!(item.requested_team_name.as_deref(), Some("United"));
    assert_eq!(item.approval_team_name.as_deref(), Some("Rovers"));
    assert_eq!(item.message, "Transfer offer for a player in your team");
    assert!(item.button_show);

    let requester_view = service.list_for_user(&requester.id).await?;
    assert_eq!(requester_view[0].message, "Transfer offer you made");
    assert!(!requester_view[0].button_show);

    Ok(())
}

/// Tests listing for an unknown user.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn unknown_user_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_transfer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let notifier = RecordingNotifier::default();
    let result = TransferService::new(db, &notifier, PLACEHOLDER)
        .list_for_user("nobody")
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
