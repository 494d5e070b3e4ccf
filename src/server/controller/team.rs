use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        league::TeamLeaguesDto,
        team::{TeamSeasonMatchDto, TeamSeasonPlayerDto, TeamSeasonStatsDto, TeamSquadDto},
    },
    server::{
        cache::ttl,
        controller::MacParams,
        error::AppError,
        service::team::TeamService,
        state::AppState,
        util::time::today,
    },
};

/// Tag for grouping team endpoints in OpenAPI documentation
pub static TEAM_TAG: &str = "team";

/// Team with its active players and their ages.
///
/// # Arguments
/// - `state` - Application state containing the database connection and cache
/// - `team_id` - Team ID
///
/// # Returns
/// - `200 OK` - Team and its non-archived players
/// - `401 Unauthorized` - Missing or invalid API key
/// - `404 Not Found` - Team not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/teams/{team_id}/squad",
    tag = TEAM_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Team squad", body = TeamSquadDto),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn squad(
    State(state): State<AppState>,
    Path(team_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let today = today();
    let key = format!("team:{}:squad:{}", team_id, today);

    let squad = state
        .cache
        .get_or_insert_with(&key, ttl::DEFAULT, || async {
            TeamService::new(&state.db).squad(team_id, today).await
        })
        .await?;

    Ok((StatusCode::OK, Json(squad)))
}

/// Leagues and seasons a team has played in.
#[utoipa::path(
    get,
    path = "/api/teams/{team_id}/leagues",
    tag = TEAM_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Leagues of the team", body = TeamLeaguesDto),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 404, description = "Team not found or without matches", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn leagues(
    State(state): State<AppState>,
    Path(team_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let key = format!("team:{}:leagues", team_id);

    let leagues = state
        .cache
        .get_or_insert_with(&key, ttl::DEFAULT, || async {
            TeamService::new(&state.db).leagues(team_id).await
        })
        .await?;

    Ok((StatusCode::OK, Json(leagues)))
}

/// Matches of a team in a season, ordered by week.
#[utoipa::path(
    get,
    path = "/api/teams/{team_id}/seasons/{season_id}/matches",
    tag = TEAM_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID"),
        ("season_id" = i32, Path, description = "Season ID")
    ),
    responses(
        (status = 200, description = "Matches with score or kick-off time", body = Vec<TeamSeasonMatchDto>),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 404, description = "No matches", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn season_matches(
    State(state): State<AppState>,
    Path((team_id, season_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let key = format!("team:{}:season:{}:matches", team_id, season_id);

    let matches = state
        .cache
        .get_or_insert_with(&key, ttl::DEFAULT, || async {
            TeamService::new(&state.db)
                .season_matches(team_id, season_id)
                .await
        })
        .await?;

    Ok((StatusCode::OK, Json(matches)))
}

/// Per-player appearances, goals, assists and cards for a season.
#[utoipa::path(
    get,
    path = "/api/teams/{team_id}/seasons/{season_id}/players",
    tag = TEAM_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID"),
        ("season_id" = i32, Path, description = "Season ID")
    ),
    responses(
        (status = 200, description = "Player season figures", body = Vec<TeamSeasonPlayerDto>),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 404, description = "No players", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn season_players(
    State(state): State<AppState>,
    Path((team_id, season_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let key = format!("team:{}:season:{}:players", team_id, season_id);

    let players = state
        .cache
        .get_or_insert_with(&key, ttl::DEFAULT, || async {
            TeamService::new(&state.db)
                .season_players(team_id, season_id)
                .await
        })
        .await?;

    Ok((StatusCode::OK, Json(players)))
}

/// Record, goals and points of a team in a season.
///
/// The favourite flag depends on the caller's device, so this projection is
/// not cached.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `team_id` - Team ID
/// - `season_id` - Season ID
/// - `params` - Optional device identifier for `is_favorite`
///
/// # Returns
/// - `200 OK` - Season totals
/// - `401 Unauthorized` - Missing or invalid API key
/// - `404 Not Found` - Team not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/teams/{team_id}/seasons/{season_id}/stats",
    tag = TEAM_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID"),
        ("season_id" = i32, Path, description = "Season ID"),
        ("mac_id" = Option<String>, Query, description = "Device identifier for the favourite flag")
    ),
    responses(
        (status = 200, description = "Season totals", body = TeamSeasonStatsDto),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn season_stats(
    State(state): State<AppState>,
    Path((team_id, season_id)): Path<(i32, i32)>,
    Query(params): Query<MacParams>,
) -> Result<impl IntoResponse, AppError> {
    let stats = TeamService::new(&state.db)
        .season_stats(team_id, season_id, params.mac())
        .await?;

    Ok((StatusCode::OK, Json(stats)))
}
