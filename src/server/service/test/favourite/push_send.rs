use super::*;

fn push(title_en: &str) -> PushSendDto {
    PushSendDto {
        title_tr: "Duyuru".to_string(),
        message_tr: "Mesaj".to_string(),
        title_en: title_en.to_string(),
        message_en: "Message".to_string(),
    }
}

/// Tests a broadcast to every language topic.
///
/// Expected: Ok with one send per culture topic
#[tokio::test]
async fn broadcasts_to_all_topics() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_transfer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let notifier = RecordingNotifier::default();
    FavouriteService::new(db, &notifier)
        .push_send(push("Notice"))
        .await?;

    assert_eq!(
        notifier.sent(),
        vec![
            Sent::Topic("all_users_tr".to_string(), "tr".to_string()),
            Sent::Topic("all_users_en".to_string(), "en".to_string()),
        ]
    );

    Ok(())
}

/// Tests a broadcast with a blank field and one through a failing gateway.
///
/// Expected: Err(BadRequest) then Err(Unavailable)
#[tokio::test]
async fn rejects_blank_fields_and_reports_gateway_failure() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_transfer_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let notifier = RecordingNotifier::default();
    assert!(matches!(
        FavouriteService::new(db, &notifier).push_send(push("")).await,
        Err(AppError::BadRequest(_))
    ));

    let failing = RecordingNotifier::failing();
    assert!(matches!(
        FavouriteService::new(db, &failing).push_send(push("Notice")).await,
        Err(AppError::Unavailable(_))
    ));

    Ok(())
}
