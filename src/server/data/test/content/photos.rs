use super::*;

async fn insert_photo(
    db: &sea_orm::DatabaseConnection,
    file_name: &str,
    category: Option<&str>,
    uploaded_at: chrono::DateTime<Utc>,
) -> Result<entity::photo_gallery::Model, DbErr> {
    entity::photo_gallery::ActiveModel {
        category: ActiveValue::Set(category.map(str::to_string)),
        file_name: ActiveValue::Set(file_name.to_string()),
        file_path: ActiveValue::Set(format!("/gallery/{}", file_name)),
        uploaded_at: ActiveValue::Set(uploaded_at),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Tests photo listing with and without a category.
///
/// Expected: all photos newest first, then only the "final" ones
#[tokio::test]
async fn filters_by_category_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    insert_photo(db, "old.jpg", Some("final"), now - Duration::days(2)).await?;
    insert_photo(db, "new.jpg", Some("final"), now).await?;
    insert_photo(db, "misc.jpg", None, now - Duration::days(1)).await?;

    let repo = ContentRepository::new(db);
    let all = repo.photos(None).await?;
    assert_eq!(
        all.iter().map(|p| p.file_name.as_str()).collect::<Vec<_>>(),
        vec!["new.jpg", "misc.jpg", "old.jpg"]
    );

    let finals = repo.photos(Some("final")).await?;
    assert_eq!(
        finals.iter().map(|p| p.file_name.as_str()).collect::<Vec<_>>(),
        vec!["new.jpg", "old.jpg"]
    );

    Ok(())
}
