use super::*;

/// Tests the per-culture projection of published news.
///
/// Expected: text from the matching content row, `None` where a culture has none
#[tokio::test]
async fn uses_content_row_of_culture() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_news_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = NewsService::new(db);
    let created = service.create(save("Maç günü")).await?;
    service
        .upsert_content(
            created.id,
            "en",
            SaveNewsContentDto {
                title: "Match day".to_string(),
                subtitle: "Sub".to_string(),
                details_title: "Title".to_string(),
                details: "Body".to_string(),
            },
        )
        .await?;
    let untranslated = factory::create_news(db).await?;

    let english = service.localized(Some("en")).await?;
    let translated = english.iter().find(|n| n.id == created.id).unwrap();
    assert_eq!(translated.title.as_deref(), Some("Match day"));
    let missing = english.iter().find(|n| n.id == untranslated.id).unwrap();
    assert!(missing.title.is_none());

    let default = service.localized(None).await?;
    let turkish = default.iter().find(|n| n.id == created.id).unwrap();
    assert_eq!(turkish.culture, "tr");
    assert_eq!(turkish.title.as_deref(), Some("Maç günü"));

    Ok(())
}
