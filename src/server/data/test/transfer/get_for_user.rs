use super::*;

/// Tests which requests a user sees.
///
/// The approving captain sees pending requests only; the player and the
/// requesting captain see every request they are part of.
///
/// Expected: approver sees 1, player sees 2, requester sees 2
#[tokio::test]
async fn returns_requests_by_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_transfer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_user(db, UserType::Player).await?;
    let requester = factory::create_user(db, UserType::Captain).await?;
    let approver = factory::create_user(db, UserType::Captain).await?;

    let repo = TransferRepository::new(db);
    let first = repo
        .create(&player.id, &requester.id, &approver.id)
        .await?
        .unwrap();
    repo.reject(first.id).await?;
    repo.create(&player.id, &requester.id, &approver.id).await?;

    assert_eq!(repo.get_for_user(&approver.id).await?.len(), 1);
    assert_eq!(repo.get_for_user(&player.id).await?.len(), 2);
    assert_eq!(repo.get_for_user(&requester.id).await?.len(), 2);

    Ok(())
}

/// Tests that newer requests are listed first.
///
/// Expected: Ok with the later-created request first
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_transfer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_user(db, UserType::Player).await?;
    let captain = factory::create_user(db, UserType::Captain).await?;
    let repo = TransferRepository::new(db);
    let older = repo
        .create(&player.id, &captain.id, &captain.id)
        .await?
        .unwrap();
    repo.reject(older.id).await?;
    let newer = repo
        .create(&player.id, &captain.id, &captain.id)
        .await?
        .unwrap();

    let listed = repo.get_for_user(&player.id).await?;

    assert_eq!(listed[0].id, newer.id);
    assert_eq!(listed[1].id, older.id);

    Ok(())
}
