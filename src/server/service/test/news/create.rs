use super::*;

/// Tests creating a news item from the admin form.
///
/// Expected: Ok(published item with its photo and a tr content row)
#[tokio::test]
async fn creates_published_item_with_base_content() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_news_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = NewsService::new(db);
    let created = service.create(save("Opening day")).await?;

    assert!(created.published);
    assert_eq!(created.photos.len(), 1);

    let detail = service.admin_get(created.id).await?;
    assert_eq!(detail.contents.len(), 1);
    assert_eq!(detail.contents[0].culture, "tr");
    assert_eq!(detail.contents[0].title, "Opening day");

    Ok(())
}

/// Tests the required text fields.
///
/// Expected: Err(BadRequest) for a blank title
#[tokio::test]
async fn rejects_blank_title() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_news_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = NewsService::new(db).create(save("   ")).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests toggling publication and the public listing.
///
/// Expected: unpublished items drop out of the actual news
#[tokio::test]
async fn toggle_hides_from_actual_news() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_news_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = NewsService::new(db);
    let created = service.create(save("Headline")).await?;

    let state = service.toggle_published(created.id).await?;

    assert!(!state.published);
    assert!(service.actual().await?.is_empty());
    assert_eq!(service.admin_list().await?.len(), 1);
    assert!(matches!(
        service.toggle_published(999).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
