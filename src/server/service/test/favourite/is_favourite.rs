use super::*;

/// Tests the favourite flag for the storing device and another one.
///
/// Expected: true for "mac-1", false for "mac-2"
#[tokio::test]
async fn reports_by_device() -> Result<(), AppError> {
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

    assert!(service.is_favourite(team.id, "mac-1").await?.is_favourite);
    assert!(!service.is_favourite(team.id, "mac-2").await?.is_favourite);

    Ok(())
}

/// Tests the argument checks.
///
/// Expected: Err(BadRequest) for team id 0, a negative id and a blank mac id
#[tokio::test]
async fn rejects_bad_arguments() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_transfer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let notifier = RecordingNotifier::default();
    let service = FavouriteService::new(db, &notifier);

    for (team_id, mac_id) in [(0, "mac-1"), (-3, "mac-1"), (5, " ")] {
        assert!(
            matches!(
                service.is_favourite(team_id, mac_id).await,
                Err(AppError::BadRequest(_))
            ),
            "team {team_id} mac {mac_id:?}"
        );
    }

    Ok(())
}
