use super::*;

/// Tests creating a news item with photos.
///
/// Verifies that the item is published, photos are attached in order, and a
/// `tr` content row mirrors the text.
///
/// Expected: Ok(NewsWithPhotos) with 2 photos and one `tr` content row
#[tokio::test]
async fn creates_published_item_with_photos_and_content() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_news_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NewsRepository::new(db);
    let created = repo.create(params("Derby day")).await?;

    assert!(created.news.published);
    assert_eq!(
        created
            .photos
            .iter()
            .map(|p| p.photo_url.as_str())
            .collect::<Vec<_>>(),
        vec!["one.png", "two.png"]
    );

    let contents = repo.contents_for(created.news.id).await?;
    assert_eq!(contents.len(), 1);
    assert_eq!(contents[0].culture, "tr");
    assert_eq!(contents[0].title, "Derby day");

    Ok(())
}

/// Tests that update replaces text and rewrites the `tr` row instead of adding one.
///
/// Expected: Ok(Some) with the new title and still one content row
#[tokio::test]
async fn update_replaces_text_and_base_content() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_news_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NewsRepository::new(db);
    let created = repo.create(params("Old")).await?;

    let mut changed = params("New");
    changed.photo_urls.clear();
    let updated = repo.update(created.news.id, changed).await?.unwrap();

    assert_eq!(updated.news.title, "New");
    assert_eq!(updated.photos.len(), 2);

    let contents = repo.contents_for(created.news.id).await?;
    assert_eq!(contents.len(), 1);
    assert_eq!(contents[0].title, "New");

    Ok(())
}

/// Tests updating a missing item.
///
/// Expected: Ok(None)
#[tokio::test]
async fn update_missing_returns_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_news_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = NewsRepository::new(db).update(999, params("Nope")).await?;

    assert!(result.is_none());

    Ok(())
}
