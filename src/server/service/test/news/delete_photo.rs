use super::*;

/// Tests deleting one photo of a news item.
///
/// Expected: the other photo stays, a second delete is NotFound
#[tokio::test]
async fn deletes_single_photo() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_news_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = NewsService::new(db);
    let mut dto = save("Gallery");
    dto.photo_urls.push("/img/2.png".to_string());
    let created = service.create(dto).await?;
    assert_eq!(created.photos.len(), 2);
    let removed = created.photos[0].id;

    service.delete_photo(removed).await?;

    let detail = service.admin_get(created.id).await?;
    assert_eq!(
        detail.news.photos.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![created.photos[1].id]
    );
    assert!(matches!(
        service.delete_photo(removed).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
