use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_TRANSLATION_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_TRANSLATION_MODEL: &str = "gpt-4o-mini";
const DEFAULT_NEWS_PLACEHOLDER_IMAGE: &str = "/images/kapimage.png";

/// Application configuration loaded from the environment.
#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,

    /// Expected `X-Api-Key` value for `/api` and `/web-api`.
    pub api_key: String,
    /// Expected `X-Admin-Key` value for `/admin`.
    pub admin_api_key: String,

    /// Distributed cache; the in-process cache is used when absent.
    pub redis_url: Option<String>,

    pub push_endpoint: Option<String>,
    pub push_server_key: Option<String>,

    pub translation_endpoint: String,
    pub translation_api_key: Option<String>,
    pub translation_model: String,

    pub news_placeholder_image: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let bind_address = optional("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "BIND_ADDRESS".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address,
            api_key: required("API_KEY")?,
            admin_api_key: required("ADMIN_API_KEY")?,
            redis_url: optional("REDIS_URL"),
            push_endpoint: optional("PUSH_ENDPOINT"),
            push_server_key: optional("PUSH_SERVER_KEY"),
            translation_endpoint: optional("TRANSLATION_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_TRANSLATION_ENDPOINT.to_string()),
            translation_api_key: optional("TRANSLATION_API_KEY"),
            translation_model: optional("TRANSLATION_MODEL")
                .unwrap_or_else(|| DEFAULT_TRANSLATION_MODEL.to_string()),
            news_placeholder_image: optional("NEWS_PLACEHOLDER_IMAGE")
                .unwrap_or_else(|| DEFAULT_NEWS_PLACEHOLDER_IMAGE.to_string()),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Unset and blank values are both treated as absent.
fn optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
