use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("Translation request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Translation API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Translation API returned no text")]
    EmptyResponse,
}

/// Machine translation port.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
        source_language: &str,
    ) -> Result<String, TranslateError>;
}

/// Translates `text` into every target, one request at a time.
///
/// # Returns
/// - `Ok(BTreeMap)` - Target language to translated text
/// - `Err(TranslateError)` - First failing translation
pub async fn translate_many(
    translator: &dyn Translator,
    text: &str,
    targets: &[String],
    source_language: &str,
) -> Result<BTreeMap<String, String>, TranslateError> {
    let mut translations = BTreeMap::new();

    for target in targets {
        let translated = translator.translate(text, target, source_language).await?;
        translations.insert(target.clone(), translated);
    }

    Ok(translations)
}

/// Calls an OpenAI-compatible chat completions endpoint.
pub struct OpenAiTranslator {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

impl OpenAiTranslator {
    pub fn new(client: reqwest::Client, endpoint: String, api_key: String, model: String) -> Self {
        Self {
            client,
            endpoint,
            api_key,
            model,
        }
    }

    fn system_prompt(target_language: &str, source_language: &str) -> String {
        format!(
            "You translate sports news from {} to {}. Keep names, scores and \
             formatting intact. Reply with the translated text only.",
            source_language, target_language
        )
    }
}

#[async_trait]
impl Translator for OpenAiTranslator {
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
        source_language: &str,
    ) -> Result<String, TranslateError> {
        let body = json!({
            "model": self.model,
            "temperature": 0.2,
            "messages": [
                { "role": "system", "content": Self::system_prompt(target_language, source_language) },
                { "role": "user", "content": text },
            ],
        });

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TranslateError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response.json().await?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or(TranslateError::EmptyResponse)
    }
}
