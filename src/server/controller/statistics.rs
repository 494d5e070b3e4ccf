use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        statistics::{LeaguePlayerStatDto, LeagueStatisticsDto, TopPlayersDto, TopTeamsDto},
    },
    server::{
        cache::ttl,
        controller::TopParams,
        error::AppError,
        service::statistics::StatisticsService,
        state::AppState,
    },
};

/// Tag for grouping statistics endpoints in OpenAPI documentation
pub static STATISTICS_TAG: &str = "statistics";

/// Scorers, assisters, team goal figures and totals of a league season.
///
/// # Arguments
/// - `state` - Application state containing the database connection and cache
/// - `league_id` - League ID
/// - `season_id` - Season ID
/// - `params` - Length of the scorer and assist lists
///
/// # Returns
/// - `200 OK` - League statistics
/// - `401 Unauthorized` - Missing or invalid API key
/// - `404 Not Found` - No goals in the league season
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/leagues/{league_id}/seasons/{season_id}/statistics",
    tag = STATISTICS_TAG,
    params(
        ("league_id" = i32, Path, description = "League ID"),
        ("season_id" = i32, Path, description = "Season ID"),
        ("top" = Option<usize>, Query, description = "List length, defaults to 10")
    ),
    responses(
        (status = 200, description = "League statistics", body = LeagueStatisticsDto),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 404, description = "No goals", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn league(
    State(state): State<AppState>,
    Path((league_id, season_id)): Path<(i32, i32)>,
    Query(params): Query<TopParams>,
) -> Result<impl IntoResponse, AppError> {
    let key = format!("stats:{}:{}:league:{}", league_id, season_id, params.top);

    let stats = state
        .cache
        .get_or_insert_with(&key, ttl::DEFAULT, || async {
            StatisticsService::new(&state.db)
                .league(league_id, season_id, params.top)
                .await
        })
        .await?;

    Ok((StatusCode::OK, Json(stats)))
}

/// Per-player figures over a league season.
#[utoipa::path(
    get,
    path = "/api/leagues/{league_id}/seasons/{season_id}/player-statistics",
    tag = STATISTICS_TAG,
    params(
        ("league_id" = i32, Path, description = "League ID"),
        ("season_id" = i32, Path, description = "Season ID"),
        ("top" = Option<usize>, Query, description = "Number of players, defaults to 10")
    ),
    responses(
        (status = 200, description = "Player statistics", body = Vec<LeaguePlayerStatDto>),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 404, description = "League season has no weeks", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn league_players(
    State(state): State<AppState>,
    Path((league_id, season_id)): Path<(i32, i32)>,
    Query(params): Query<TopParams>,
) -> Result<impl IntoResponse, AppError> {
    let key = format!("stats:{}:{}:players:{}", league_id, season_id, params.top);

    let players = state
        .cache
        .get_or_insert_with(&key, ttl::DEFAULT, || async {
            StatisticsService::new(&state.db)
                .league_players(league_id, season_id, params.top)
                .await
        })
        .await?;

    Ok((StatusCode::OK, Json(players)))
}

/// Top scorers, assisters and booked players.
#[utoipa::path(
    get,
    path = "/api/leagues/{league_id}/seasons/{season_id}/top-players",
    tag = STATISTICS_TAG,
    params(
        ("league_id" = i32, Path, description = "League ID"),
        ("season_id" = i32, Path, description = "Season ID"),
        ("top" = Option<usize>, Query, description = "List length, defaults to 10")
    ),
    responses(
        (status = 200, description = "Top player lists", body = TopPlayersDto),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn top_players(
    State(state): State<AppState>,
    Path((league_id, season_id)): Path<(i32, i32)>,
    Query(params): Query<TopParams>,
) -> Result<impl IntoResponse, AppError> {
    let key = format!("stats:{}:{}:top-players:{}", league_id, season_id, params.top);

    let top = state
        .cache
        .get_or_insert_with(&key, ttl::DEFAULT, || async {
            StatisticsService::new(&state.db)
                .top_players(league_id, season_id, params.top)
                .await
        })
        .await?;

    Ok((StatusCode::OK, Json(top)))
}

/// Top scoring, assisting and booked teams.
#[utoipa::path(
    get,
    path = "/api/leagues/{league_id}/seasons/{season_id}/top-teams",
    tag = STATISTICS_TAG,
    params(
        ("league_id" = i32, Path, description = "League ID"),
        ("season_id" = i32, Path, description = "Season ID"),
        ("top" = Option<usize>, Query, description = "List length, defaults to 10")
    ),
    responses(
        (status = 200, description = "Top team lists", body = TopTeamsDto),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn top_teams(
    State(state): State<AppState>,
    Path((league_id, season_id)): Path<(i32, i32)>,
    Query(params): Query<TopParams>,
) -> Result<impl IntoResponse, AppError> {
    let key = format!("stats:{}:{}:top-teams:{}", league_id, season_id, params.top);

    let top = state
        .cache
        .get_or_insert_with(&key, ttl::DEFAULT, || async {
            StatisticsService::new(&state.db)
                .top_teams(league_id, season_id, params.top)
                .await
        })
        .await?;

    Ok((StatusCode::OK, Json(top)))
}
