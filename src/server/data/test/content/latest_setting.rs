use super::*;

async fn insert_setting(
    db: &sea_orm::DatabaseConnection,
    version: &str,
    last_updated: chrono::DateTime<Utc>,
) -> Result<entity::app_setting::Model, DbErr> {
    entity::app_setting::ActiveModel {
        ios_version: ActiveValue::Set(version.to_string()),
        android_version: ActiveValue::Set(version.to_string()),
        force_update: ActiveValue::Set(false),
        app_stop: ActiveValue::Set(false),
        app_stop_message: ActiveValue::Set(None),
        last_updated: ActiveValue::Set(last_updated),
        tournament_start_date: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Tests that the most recently updated settings row wins.
///
/// Expected: Ok(Some) with version "2.0"
#[tokio::test]
async fn returns_most_recent_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    insert_setting(db, "2.0", now).await?;
    insert_setting(db, "1.0", now - Duration::days(1)).await?;

    let setting = ContentRepository::new(db).latest_setting().await?;

    assert_eq!(setting.map(|s| s.ios_version), Some("2.0".to_string()));

    Ok(())
}

/// Tests rich content filtering by published flag and culture.
///
/// Expected: Ok with only the published `en` row
#[tokio::test]
async fn filters_rich_content() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    for (culture, published) in [("en", true), ("en", false), ("tr", true)] {
        entity::rich_static_content::ActiveModel {
            category_code: ActiveValue::Set(Some("about".to_string())),
            culture: ActiveValue::Set(Some(culture.to_string())),
            image_url: ActiveValue::Set(None),
            video_url: ActiveValue::Set(None),
            text: ActiveValue::Set(Some(format!("{} text", culture))),
            alt_text: ActiveValue::Set(None),
            published: ActiveValue::Set(published),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    let rows = ContentRepository::new(db)
        .rich_content(RichContentFilter {
            category: Some("about".to_string()),
            culture: Some("en".to_string()),
            published: true,
        })
        .await?;

    assert_eq!(rows.len(), 1);
    assert!(rows[0].published);

    Ok(())
}
