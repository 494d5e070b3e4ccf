use super::*;

/// Tests app settings before any row exists.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn missing_settings_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ContentService::new(db).app_settings().await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
