use super::*;

async fn insert_story(
    db: &sea_orm::DatabaseConnection,
    title: &str,
    published: bool,
    updated_at: chrono::DateTime<Utc>,
) -> Result<entity::story::Model, DbErr> {
    entity::story::ActiveModel {
        title: ActiveValue::Set(title.to_string()),
        story_image: ActiveValue::Set(None),
        published: ActiveValue::Set(published),
        updated_at: ActiveValue::Set(updated_at),
        ..Default::default()
    }
    .insert(db)
    .await
}

async fn insert_content(
    db: &sea_orm::DatabaseConnection,
    story_id: i32,
    content_type: &str,
    display_order: i32,
) -> Result<entity::story_content::Model, DbErr> {
    entity::story_content::ActiveModel {
        story_id: ActiveValue::Set(story_id),
        media_url: ActiveValue::Set(format!("/stories/{}-{}", story_id, display_order)),
        content_type: ActiveValue::Set(content_type.to_string()),
        display_order: ActiveValue::Set(display_order),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Tests that drafts and stories older than the cutoff are left out and
/// contents come back in display order.
///
/// Expected: Ok with [fresh, older] and fresh's contents ordered 1, 2
#[tokio::test]
async fn returns_recent_published_stories_with_ordered_contents() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let fresh = insert_story(db, "fresh", true, now).await?;
    let older = insert_story(db, "older", true, now - Duration::hours(5)).await?;
    insert_story(db, "stale", true, now - Duration::hours(30)).await?;
    insert_story(db, "draft", false, now).await?;
    insert_content(db, fresh.id, "image/png", 2).await?;
    insert_content(db, fresh.id, "video/mp4", 1).await?;

    let stories = ContentRepository::new(db)
        .published_stories_since(now - Duration::hours(24))
        .await?;

    assert_eq!(
        stories.iter().map(|(s, _)| s.title.as_str()).collect::<Vec<_>>(),
        vec!["fresh", "older"]
    );
    assert_eq!(
        stories[0].1.iter().map(|c| c.display_order).collect::<Vec<_>>(),
        vec![1, 2]
    );
    assert_eq!(stories[1].0.id, older.id);
    assert!(stories[1].1.is_empty());

    Ok(())
}
