use async_trait::async_trait;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Push gateway request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Push gateway returned {status}: {body}")]
    Gateway { status: u16, body: String },

    #[error("Push gateway is not configured")]
    NotConfigured,
}

/// Bilingual notification payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title_tr: String,
    pub message_tr: String,
    pub title_en: String,
    pub message_en: String,
}

impl Notification {
    pub fn new(
        title_tr: impl Into<String>,
        message_tr: impl Into<String>,
        title_en: impl Into<String>,
        message_en: impl Into<String>,
    ) -> Self {
        Self {
            title_tr: title_tr.into(),
            message_tr: message_tr.into(),
            title_en: title_en.into(),
            message_en: message_en.into(),
        }
    }

    /// Title and message for a culture code; anything but `en` gets Turkish.
    pub fn localized(&self, culture: &str) -> (&str, &str) {
        if culture.eq_ignore_ascii_case("en") {
            (&self.title_en, &self.message_en)
        } else {
            (&self.title_tr, &self.message_tr)
        }
    }
}

/// Topic every device of one language subscribes to.
pub fn all_users_topic(culture: &str) -> String {
    format!("all_users_{}", culture)
}

/// Topic for followers of a team in one language.
pub fn team_topic(team_id: i32, culture: &str) -> String {
    format!("team_{}_{}", team_id, culture)
}

/// Push notification port.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends to a single user identified by their push `external_id`.
    async fn send_to_user(
        &self,
        external_id: &str,
        notification: &Notification,
    ) -> Result<(), NotifyError>;

    /// Sends the text for `culture` to a topic.
    async fn send_to_topic(
        &self,
        topic: &str,
        culture: &str,
        notification: &Notification,
    ) -> Result<(), NotifyError>;

    async fn subscribe(&self, tokens: &[String], topic: &str) -> Result<(), NotifyError>;

    async fn unsubscribe(&self, tokens: &[String], topic: &str) -> Result<(), NotifyError>;
}

/// Sends the Turkish text to `all_users_tr` and the English text to `all_users_en`.
pub async fn send_to_all_users(
    notifier: &dyn Notifier,
    notification: &Notification,
) -> Result<(), NotifyError> {
    for culture in ["tr", "en"] {
        notifier
            .send_to_topic(&all_users_topic(culture), culture, notification)
            .await?;
    }
    Ok(())
}

/// Posts JSON to a push gateway exposing `/send`, `/subscribe` and `/unsubscribe`.
pub struct HttpNotifier {
    client: reqwest::Client,
    endpoint: String,
    server_key: Option<String>,
}

impl HttpNotifier {
    pub fn new(client: reqwest::Client, endpoint: String, server_key: Option<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            server_key,
        }
    }

    async fn post(&self, path: &str, body: serde_json::Value) -> Result<(), NotifyError> {
        let mut request = self
            .client
            .post(format!("{}/{}", self.endpoint, path))
            .json(&body);

        if let Some(key) = &self.server_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::Gateway {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }

    fn message(to: String, title: &str, body: &str, notification: &Notification) -> serde_json::Value {
        json!({
            "to": to,
            "notification": { "title": title, "body": body },
            "data": notification,
        })
    }
}

#[async_trait]
impl Notifier for HttpNotifier {
    async fn send_to_user(
        &self,
        external_id: &str,
        notification: &Notification,
    ) -> Result<(), NotifyError> {
        let (title, body) = notification.localized("tr");
        let payload = Self::message(external_id.to_string(), title, body, notification);
        self.post("send", payload).await
    }

    async fn send_to_topic(
        &self,
        topic: &str,
        culture: &str,
        notification: &Notification,
    ) -> Result<(), NotifyError> {
        let (title, body) = notification.localized(culture);
        let payload = Self::message(format!("/topics/{}", topic), title, body, notification);
        self.post("send", payload).await
    }

    async fn subscribe(&self, tokens: &[String], topic: &str) -> Result<(), NotifyError> {
        self.post("subscribe", json!({ "tokens": tokens, "topic": topic }))
            .await
    }

    async fn unsubscribe(&self, tokens: &[String], topic: &str) -> Result<(), NotifyError> {
        self.post("unsubscribe", json!({ "tokens": tokens, "topic": topic }))
            .await
    }
}

/// Used when no push gateway is configured. Every call succeeds after logging.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send_to_user(
        &self,
        external_id: &str,
        notification: &Notification,
    ) -> Result<(), NotifyError> {
        tracing::info!(
            "Push to user {}: {} / {}",
            external_id,
            notification.title_en,
            notification.message_en
        );
        Ok(())
    }

    async fn send_to_topic(
        &self,
        topic: &str,
        culture: &str,
        notification: &Notification,
    ) -> Result<(), NotifyError> {
        let (title, body) = notification.localized(culture);
        tracing::info!("Push to topic {}: {} / {}", topic, title, body);
        Ok(())
    }

    async fn subscribe(&self, tokens: &[String], topic: &str) -> Result<(), NotifyError> {
        tracing::info!("Subscribing {} token(s) to {}", tokens.len(), topic);
        Ok(())
    }

    async fn unsubscribe(&self, tokens: &[String], topic: &str) -> Result<(), NotifyError> {
        tracing::info!("Unsubscribing {} token(s) from {}", tokens.len(), topic);
        Ok(())
    }
}
