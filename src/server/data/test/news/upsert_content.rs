use super::*;

/// Tests that a second upsert for the same culture updates in place.
///
/// Expected: Ok with one `en` row carrying the latest title
#[tokio::test]
async fn upserts_one_row_per_culture() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_news_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let news = factory::create_news(db).await?;
    let repo = NewsRepository::new(db);

    let first = repo
        .upsert_content(news.id, "en", params("First").text)
        .await?;
    let second = repo
        .upsert_content(news.id, "en", params("Second").text)
        .await?;

    assert_eq!(first.id, second.id);

    let by_culture = repo.contents_for_culture(&[news.id], "en").await?;
    assert_eq!(by_culture.get(&news.id).map(|c| c.title.as_str()), Some("Second"));

    Ok(())
}
