use super::*;

async fn insert_story(
    db: &DatabaseConnection,
    title: &str,
    updated_at: DateTime<Utc>,
    content_types: &[&str],
) -> Result<entity::story::Model, DbErr> {
    let story = entity::story::ActiveModel {
        title: ActiveValue::Set(title.to_string()),
        story_image: ActiveValue::Set(Some(format!("/stories/{}.jpg", title))),
        published: ActiveValue::Set(true),
        updated_at: ActiveValue::Set(updated_at),
        ..Default::default()
    }
    .insert(db)
    .await?;

    for (order, content_type) in content_types.iter().enumerate() {
        entity::story_content::ActiveModel {
            story_id: ActiveValue::Set(story.id),
            media_url: ActiveValue::Set(format!("/stories/{}/{}", title, order)),
            content_type: ActiveValue::Set(content_type.to_string()),
            display_order: ActiveValue::Set(order as i32),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    Ok(story)
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 4, 12, 0, 0).unwrap()
}

/// Tests the story type derived from contents and the 24 hour window.
///
/// Expected: [clip (video), gallery (image)]; the 25 hour old story is gone
#[tokio::test]
async fn derives_type_within_window() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    insert_story(db, "gallery", now() - Duration::hours(2), &["image/jpeg"]).await?;
    insert_story(db, "clip", now() - Duration::hours(1), &["image/png", "video/mp4"]).await?;
    insert_story(db, "yesterday", now() - Duration::hours(25), &["image/png"]).await?;

    let stories = ContentService::new(db).stories(None, now()).await?;

    assert_eq!(
        stories
            .iter()
            .map(|s| (s.title.as_str(), s.kind.as_str()))
            .collect::<Vec<_>>(),
        vec![("clip", "video"), ("gallery", "image")]
    );
    assert_eq!(stories[0].contents.len(), 2);

    Ok(())
}

/// Tests narrowing stories to one media type.
///
/// Expected: only stories with video content, carrying only their videos
#[tokio::test]
async fn narrows_contents_to_media_type() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    insert_story(db, "photos", now(), &["image/jpeg"]).await?;
    insert_story(db, "mixed", now(), &["image/png", "video/mp4"]).await?;

    let media = StoryMedia::parse(Some(" VIDEO "))?;
    let stories = ContentService::new(db).stories(media, now()).await?;

    assert_eq!(stories.len(), 1);
    assert_eq!(stories[0].title, "mixed");
    assert_eq!(stories[0].kind, "video");
    assert_eq!(
        stories[0]
            .contents
            .iter()
            .map(|c| c.content_type.as_str())
            .collect::<Vec<_>>(),
        vec!["video/mp4"]
    );

    Ok(())
}

/// Tests media type parsing.
///
/// Expected: blank means no filter, unknown values are BadRequest
#[test]
fn parses_media_type() {
    assert_eq!(StoryMedia::parse(None).unwrap(), None);
    assert_eq!(StoryMedia::parse(Some("  ")).unwrap(), None);
    assert_eq!(
        StoryMedia::parse(Some("Image")).unwrap(),
        Some(StoryMedia::Image)
    );
    assert!(matches!(
        StoryMedia::parse(Some("audio")),
        Err(AppError::BadRequest(_))
    ));
}
