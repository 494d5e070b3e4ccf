use super::*;

/// Tests insert followed by update of the same key.
///
/// Expected: one entry holding the latest value
#[tokio::test]
async fn inserts_then_updates() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ContentRepository::new(db);
    let first = repo.upsert_static_value("rules", "v1".to_string()).await?;
    let second = repo.upsert_static_value("rules", "v2".to_string()).await?;

    assert_eq!(second.value, "v2");
    assert!(second.updated_at >= first.updated_at);
    assert_eq!(repo.static_values().await?.len(), 1);
    assert_eq!(
        repo.static_value("rules").await?.map(|v| v.value),
        Some("v2".to_string())
    );

    Ok(())
}
