use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{AckDto, ErrorDto},
        favourite::{
            FavouriteResultDto, FavouriteTeamRequestDto, IsFavouriteDto, PushSendDto,
            SubscribeAllDto,
        },
    },
    server::{
        controller::{city::MENU_TEAMS_PREFIX, MacParams},
        error::AppError,
        service::favourite::FavouriteService,
        state::AppState,
    },
};

/// Tag for grouping favourite and push endpoints in OpenAPI documentation
pub static FAVOURITE_TAG: &str = "favourite";

/// Subscribe a device to the broadcast topic of its language.
#[utoipa::path(
    post,
    path = "/api/favourites/all-users",
    tag = FAVOURITE_TAG,
    request_body = SubscribeAllDto,
    responses(
        (status = 200, description = "Device subscribed", body = FavouriteResultDto),
        (status = 400, description = "Missing token", body = ErrorDto),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 503, description = "Push gateway failed", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn add_user_to_all(
    State(state): State<AppState>,
    Json(payload): Json<SubscribeAllDto>,
) -> Result<impl IntoResponse, AppError> {
    let result = FavouriteService::new(&state.db, state.notifier.as_ref())
        .add_user_to_all(payload)
        .await?;

    Ok((StatusCode::OK, Json(result)))
}

/// Follow a team from a device.
///
/// Stores the favourite and subscribes the device token to the team topic.
/// Adding a team twice answers success with `already = true`.
///
/// # Arguments
/// - `state` - Application state containing the database connection and notifier
/// - `payload` - Team, device token, device id and culture
///
/// # Returns
/// - `200 OK` - Favourite stored or already present
/// - `400 Bad Request` - Invalid team or blank token
/// - `401 Unauthorized` - Missing or invalid API key
/// - `503 Service Unavailable` - Subscription failed; the favourite is kept
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/favourites",
    tag = FAVOURITE_TAG,
    request_body = FavouriteTeamRequestDto,
    responses(
        (status = 200, description = "Favourite stored", body = FavouriteResultDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 503, description = "Push gateway failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn add_team(
    State(state): State<AppState>,
    Json(payload): Json<FavouriteTeamRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let result = FavouriteService::new(&state.db, state.notifier.as_ref())
        .add_team(payload)
        .await;

    // The row may be stored even when the subscription failed.
    state.cache.invalidate_prefix(MENU_TEAMS_PREFIX).await;

    Ok((StatusCode::OK, Json(result?)))
}

/// Stop following a team from a device.
#[utoipa::path(
    post,
    path = "/api/favourites/remove",
    tag = FAVOURITE_TAG,
    request_body = FavouriteTeamRequestDto,
    responses(
        (status = 200, description = "Favourite removed or absent", body = FavouriteResultDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 503, description = "Push gateway failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn remove_team(
    State(state): State<AppState>,
    Json(payload): Json<FavouriteTeamRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let result = FavouriteService::new(&state.db, state.notifier.as_ref())
        .remove_team(payload)
        .await;

    state.cache.invalidate_prefix(MENU_TEAMS_PREFIX).await;

    Ok((StatusCode::OK, Json(result?)))
}

#[utoipa::path(
    get,
    path = "/api/teams/{team_id}/favourite",
    tag = FAVOURITE_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID"),
        ("mac_id" = String, Query, description = "Device identifier")
    ),
    responses(
        (status = 200, description = "Whether the device follows the team", body = IsFavouriteDto),
        (status = 400, description = "Invalid team or blank device id", body = ErrorDto),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn is_favourite(
    State(state): State<AppState>,
    Path(team_id): Path<i32>,
    Query(params): Query<MacParams>,
) -> Result<impl IntoResponse, AppError> {
    let result = FavouriteService::new(&state.db, state.notifier.as_ref())
        .is_favourite(team_id, params.mac_id.as_deref().unwrap_or_default())
        .await?;

    Ok((StatusCode::OK, Json(result)))
}

/// Broadcast a bilingual notification to every subscribed device.
///
/// # Access Control
/// - `X-Admin-Key` - Admin surface only
///
/// # Arguments
/// - `state` - Application state containing the notifier
/// - `payload` - Turkish and English title and message
///
/// # Returns
/// - `200 OK` - Notification handed to the gateway
/// - `400 Bad Request` - A title or message is blank
/// - `401 Unauthorized` - Missing or invalid admin key
/// - `503 Service Unavailable` - Push gateway failed
#[utoipa::path(
    post,
    path = "/admin/push",
    tag = FAVOURITE_TAG,
    request_body = PushSendDto,
    responses(
        (status = 200, description = "Notification sent", body = AckDto),
        (status = 400, description = "Missing title or message", body = ErrorDto),
        (status = 401, description = "Missing or invalid admin key", body = ErrorDto),
        (status = 503, description = "Push gateway failed", body = ErrorDto)
    ),
    security(("admin_key" = [])),
)]
pub async fn push_send(
    State(state): State<AppState>,
    Json(payload): Json<PushSendDto>,
) -> Result<impl IntoResponse, AppError> {
    FavouriteService::new(&state.db, state.notifier.as_ref())
        .push_send(payload)
        .await?;

    Ok((StatusCode::OK, Json(AckDto::ok("Notification sent"))))
}
