use super::*;

async fn insert_ad(
    db: &sea_orm::DatabaseConnection,
    name: &str,
    city_id: Option<i32>,
    is_active: bool,
    upload_date: chrono::DateTime<Utc>,
) -> Result<entity::advertisement::Model, DbErr> {
    entity::advertisement::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        link_url: ActiveValue::Set(None),
        image_path: ActiveValue::Set(Some(format!("{}.png", name))),
        alt_text: ActiveValue::Set(None),
        category: ActiveValue::Set(None),
        city_id: ActiveValue::Set(city_id),
        is_active: ActiveValue::Set(is_active),
        upload_date: ActiveValue::Set(upload_date),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Tests that only active ads are returned, newest first, with their city.
///
/// Expected: Ok with [new (no city), old (with city)]
#[tokio::test]
async fn returns_active_ads_with_city() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let now = Utc::now();
    insert_ad(db, "old", Some(city.id), true, now - Duration::days(3)).await?;
    insert_ad(db, "new", None, true, now).await?;
    insert_ad(db, "off", None, false, now).await?;

    let ads = ContentRepository::new(db).active_advertisements().await?;

    assert_eq!(
        ads.iter().map(|(ad, _)| ad.name.as_str()).collect::<Vec<_>>(),
        vec!["new", "old"]
    );
    assert!(ads[0].1.is_none());
    assert_eq!(ads[1].1.as_ref().map(|c| c.id), Some(city.id));

    Ok(())
}
