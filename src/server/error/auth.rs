use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The expected key header was not sent.
    #[error("Request to {path} is missing the {header} header")]
    MissingKey { header: &'static str, path: String },

    /// The key header was sent with the wrong value.
    #[error("Request to {path} sent an invalid {header} header")]
    InvalidKey { header: &'static str, path: String },
}

/// Converts authentication errors into HTTP responses.
///
/// Both variants are logged at warn level and answered with the same generic
/// 401 body so that clients cannot tell a missing key from a wrong one.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::warn!("{}", self);

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: "Unauthorized".to_string(),
            }),
        )
            .into_response()
    }
}
