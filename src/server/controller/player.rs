use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        team::{PlayerDetailsDto, ValuablePlayerDto},
    },
    server::{
        cache::ttl,
        controller::TopParams,
        error::AppError,
        service::player::PlayerService,
        state::AppState,
        util::time::today,
    },
};

/// Tag for grouping player endpoints in OpenAPI documentation
pub static PLAYER_TAG: &str = "player";

/// Player profile with per league, season and team statistics.
///
/// # Arguments
/// - `state` - Application state containing the database connection and cache
/// - `player_id` - Player ID
///
/// # Returns
/// - `200 OK` - Profile and statistics, latest season first
/// - `401 Unauthorized` - Missing or invalid API key
/// - `404 Not Found` - Player not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/players/{player_id}",
    tag = PLAYER_TAG,
    params(
        ("player_id" = i32, Path, description = "Player ID")
    ),
    responses(
        (status = 200, description = "Player details", body = PlayerDetailsDto),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn details(
    State(state): State<AppState>,
    Path(player_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let today = today();
    let key = format!("player:{}:{}", player_id, today);

    let player = state
        .cache
        .get_or_insert_with(&key, ttl::DEFAULT, || async {
            PlayerService::new(&state.db).details(player_id, today).await
        })
        .await?;

    Ok((StatusCode::OK, Json(player)))
}

/// Most valuable active players of a city.
#[utoipa::path(
    get,
    path = "/api/cities/{city_id}/valuable-players",
    tag = PLAYER_TAG,
    params(
        ("city_id" = i32, Path, description = "City ID"),
        ("top" = Option<usize>, Query, description = "Number of players, defaults to 10")
    ),
    responses(
        (status = 200, description = "Players ordered by value", body = Vec<ValuablePlayerDto>),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn valuable(
    State(state): State<AppState>,
    Path(city_id): Path<i32>,
    Query(params): Query<TopParams>,
) -> Result<impl IntoResponse, AppError> {
    let key = format!("city:{}:valuable:{}", city_id, params.top);

    let players = state
        .cache
        .get_or_insert_with(&key, ttl::DEFAULT, || async {
            PlayerService::new(&state.db)
                .valuable(city_id, params.top as u64)
                .await
        })
        .await?;

    Ok((StatusCode::OK, Json(players)))
}
