//! Static key guards for the client, website and admin surfaces.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::server::{
    error::{auth::AuthError, AppError},
    state::AppState,
};

pub const API_KEY_HEADER: &str = "x-api-key";
pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

/// Compares `header` against `expected`.
fn check_key(
    headers: &HeaderMap,
    header: &'static str,
    expected: &str,
    path: &str,
) -> Result<(), AuthError> {
    let Some(value) = headers.get(header) else {
        return Err(AuthError::MissingKey {
            header,
            path: path.to_string(),
        });
    };

    if value.as_bytes() != expected.as_bytes() {
        return Err(AuthError::InvalidKey {
            header,
            path: path.to_string(),
        });
    }

    Ok(())
}

/// Requires `X-Api-Key` to match the configured API key.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    check_key(
        request.headers(),
        API_KEY_HEADER,
        &state.config.api_key,
        request.uri().path(),
    )?;

    Ok(next.run(request).await)
}

/// Requires `X-Admin-Key` to match the configured admin key.
pub async fn require_admin_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    check_key(
        request.headers(),
        ADMIN_KEY_HEADER,
        &state.config.admin_api_key,
        request.uri().path(),
    )?;

    Ok(next.run(request).await)
}
