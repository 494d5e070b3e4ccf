use super::*;

/// Tests the published filter and newest-first ordering.
///
/// Expected: Ok with the two published items, newest first
#[tokio::test]
async fn lists_published_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_news_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let old = NewsFactory::new(db)
        .created_date(now - Duration::days(2))
        .build()
        .await?;
    let new = NewsFactory::new(db).created_date(now).build().await?;
    NewsFactory::new(db).published(false).build().await?;

    let items = NewsRepository::new(db)
        .list(NewsFilter {
            only_published: true,
            ..Default::default()
        })
        .await?;

    assert_eq!(
        items.iter().map(|n| n.news.id).collect::<Vec<_>>(),
        vec![new.id, old.id]
    );

    Ok(())
}

/// Tests the city and main-news filters together.
///
/// Expected: Ok with only the main item of the city
#[tokio::test]
async fn filters_by_city_and_main_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_news_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let other = factory::create_city(db).await?;
    let main = NewsFactory::new(db)
        .city_id(city.id)
        .is_main_news(true)
        .build()
        .await?;
    NewsFactory::new(db).city_id(city.id).build().await?;
    NewsFactory::new(db)
        .city_id(other.id)
        .is_main_news(true)
        .build()
        .await?;

    let items = NewsRepository::new(db)
        .list(NewsFilter {
            city_id: Some(city.id),
            main_only: true,
            only_published: false,
        })
        .await?;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].news.id, main.id);

    Ok(())
}
