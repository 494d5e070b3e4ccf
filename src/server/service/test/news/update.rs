use super::*;

/// Tests updating an item, which appends photos and rewrites the tr row.
///
/// Expected: Ok with two photos and the new title in both places
#[tokio::test]
async fn replaces_text_and_appends_photos() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_news_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = NewsService::new(db);
    let created = service.create(save("Draft")).await?;
    let updated = service.update(created.id, save("Final")).await?;

    assert_eq!(updated.title, "Final");
    assert_eq!(updated.photos.len(), 2);
    let detail = service.admin_get(created.id).await?;
    assert_eq!(detail.contents.len(), 1);
    assert_eq!(detail.contents[0].title, "Final");

    Ok(())
}

/// Tests that an update without a main photo keeps the stored one.
///
/// Expected: main photo unchanged, links and main flag replaced
#[tokio::test]
async fn keeps_main_photo_when_omitted() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_news_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let service = NewsService::new(db);
    let created = service.create(save("Draft")).await?;

    let mut changes = save("Final");
    changes.main_photo = None;
    changes.photo_urls = Vec::new();
    changes.city_id = Some(city.id);
    changes.is_main_news = true;
    let updated = service.update(created.id, changes).await?;

    assert_eq!(updated.main_photo.as_deref(), Some("/img/main.png"));
    assert_eq!(updated.photos.len(), 1);
    assert_eq!(updated.city_id, Some(city.id));
    assert!(updated.is_main_news);

    Ok(())
}

/// Tests an unknown item and a blank title.
///
/// Expected: Err(NotFound), then Err(BadRequest) with the item untouched
#[tokio::test]
async fn rejects_missing_item_and_blank_title() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_news_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = NewsService::new(db);
    let created = service.create(save("Draft")).await?;

    assert!(matches!(
        service.update(created.id + 100, save("Final")).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.update(created.id, save(" ")).await,
        Err(AppError::BadRequest(_))
    ));
    assert_eq!(service.admin_get(created.id).await?.news.title, "Draft");

    Ok(())
}
