use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        transfer::{CreateTransferRequestDto, TransferListItemDto, TransferRequestDto},
    },
    server::{
        controller::news::NEWS_PREFIX, error::AppError, service::transfer::TransferService,
        state::AppState,
    },
};

/// Tag for grouping transfer endpoints in OpenAPI documentation
pub static TRANSFER_TAG: &str = "transfer";

fn service(state: &AppState) -> TransferService<'_> {
    TransferService::new(
        &state.db,
        state.notifier.as_ref(),
        &state.config.news_placeholder_image,
    )
}

/// Ask for a player to join the requested captain's team.
///
/// The player's current captain approves the request; for a free team
/// without a captain the player approves it themself. Both sides are
/// notified and a "Transfer talks" news item is published.
///
/// # Arguments
/// - `state` - Application state containing the database connection, notifier and config
/// - `payload` - Player user and requested captain user
///
/// # Returns
/// - `201 Created` - Pending request
/// - `400 Bad Request` - Same team, request already pending, no team, transfers closed or no captain
/// - `401 Unauthorized` - Missing or invalid API key
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/transfers",
    tag = TRANSFER_TAG,
    request_body = CreateTransferRequestDto,
    responses(
        (status = 201, description = "Pending transfer request", body = TransferRequestDto),
        (status = 400, description = "Transfer rule violated", body = ErrorDto),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateTransferRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let request = service(&state).create(payload).await?;

    state.cache.invalidate_prefix(NEWS_PREFIX).await;

    Ok((StatusCode::CREATED, Json(request)))
}

/// Approve a pending request and move the player.
#[utoipa::path(
    post,
    path = "/api/transfers/{request_id}/approve",
    tag = TRANSFER_TAG,
    params(
        ("request_id" = i32, Path, description = "Transfer request ID")
    ),
    responses(
        (status = 200, description = "Approved request", body = TransferRequestDto),
        (status = 400, description = "Request is not pending", body = ErrorDto),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn approve(
    State(state): State<AppState>,
    Path(request_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let request = service(&state).approve(request_id).await?;

    state.cache.invalidate_prefix(NEWS_PREFIX).await;

    Ok((StatusCode::OK, Json(request)))
}

/// Reject a pending request.
#[utoipa::path(
    post,
    path = "/api/transfers/{request_id}/reject",
    tag = TRANSFER_TAG,
    params(
        ("request_id" = i32, Path, description = "Transfer request ID")
    ),
    responses(
        (status = 200, description = "Rejected request", body = TransferRequestDto),
        (status = 400, description = "Request is not pending", body = ErrorDto),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn reject(
    State(state): State<AppState>,
    Path(request_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let request = service(&state).reject(request_id).await?;

    Ok((StatusCode::OK, Json(request)))
}

/// Requests a user is part of, newest first.
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/transfers",
    tag = TRANSFER_TAG,
    params(
        ("user_id" = String, Path, description = "App user ID")
    ),
    responses(
        (status = 200, description = "Requests seen from the user's side", body = Vec<TransferListItemDto>),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn list_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let requests = service(&state).list_for_user(&user_id).await?;

    Ok((StatusCode::OK, Json(requests)))
}
