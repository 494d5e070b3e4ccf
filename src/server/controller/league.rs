use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        league::{GroupDto, LeagueWeekDto, SeasonDto, TeamLeagueWeekDto},
    },
    server::{
        cache::ttl,
        error::AppError,
        service::league::LeagueService,
        state::AppState,
        util::time::today,
    },
};

/// Tag for grouping league, season and week endpoints in OpenAPI documentation
pub static LEAGUE_TAG: &str = "league";

/// Optional `?group_id=` filter.
#[derive(Debug, Default, Deserialize)]
pub struct GroupParams {
    pub group_id: Option<i32>,
}

/// Seasons of a league that have weeks, latest first.
///
/// # Arguments
/// - `state` - Application state containing the database connection and cache
/// - `league_id` - League to list seasons for
///
/// # Returns
/// - `200 OK` - Seasons with their first and last week dates
/// - `401 Unauthorized` - Missing or invalid API key
/// - `404 Not Found` - League does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/leagues/{league_id}/seasons",
    tag = LEAGUE_TAG,
    params(
        ("league_id" = i32, Path, description = "League ID")
    ),
    responses(
        (status = 200, description = "Seasons of the league", body = Vec<SeasonDto>),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 404, description = "League not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn seasons(
    State(state): State<AppState>,
    Path(league_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let key = format!("league:{}:seasons", league_id);

    let seasons = state
        .cache
        .get_or_insert_with(&key, ttl::DEFAULT, || async {
            LeagueService::new(&state.db).seasons(league_id).await
        })
        .await?;

    Ok((StatusCode::OK, Json(seasons)))
}

/// Groups of a league in one season, ordered by name.
#[utoipa::path(
    get,
    path = "/api/leagues/{league_id}/seasons/{season_id}/groups",
    tag = LEAGUE_TAG,
    params(
        ("league_id" = i32, Path, description = "League ID"),
        ("season_id" = i32, Path, description = "Season ID")
    ),
    responses(
        (status = 200, description = "Groups of the season", body = Vec<GroupDto>),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 404, description = "No groups", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn groups(
    State(state): State<AppState>,
    Path((league_id, season_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let key = format!("league:{}:season:{}:groups", league_id, season_id);

    let groups = state
        .cache
        .get_or_insert_with(&key, ttl::DEFAULT, || async {
            LeagueService::new(&state.db)
                .groups(league_id, season_id)
                .await
        })
        .await?;

    Ok((StatusCode::OK, Json(groups)))
}

/// Weeks of a league season with their matches grouped by day.
///
/// With `group_id`, only that group's matches are listed under
/// `grouped_matches`. Matches without a group are always listed.
///
/// # Arguments
/// - `state` - Application state containing the database connection and cache
/// - `league_id` - League ID
/// - `season_id` - Season ID, must belong to the league
/// - `params` - Optional group filter
///
/// # Returns
/// - `200 OK` - Weeks ordered by start date, one flagged as current
/// - `401 Unauthorized` - Missing or invalid API key
/// - `404 Not Found` - League or season not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/leagues/{league_id}/seasons/{season_id}/weeks",
    tag = LEAGUE_TAG,
    params(
        ("league_id" = i32, Path, description = "League ID"),
        ("season_id" = i32, Path, description = "Season ID"),
        ("group_id" = Option<i32>, Query, description = "Group to list grouped matches for")
    ),
    responses(
        (status = 200, description = "Weeks of the season", body = Vec<LeagueWeekDto>),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 404, description = "League or season not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn weeks(
    State(state): State<AppState>,
    Path((league_id, season_id)): Path<(i32, i32)>,
    Query(params): Query<GroupParams>,
) -> Result<impl IntoResponse, AppError> {
    let today = today();
    let key = format!(
        "league:{}:season:{}:weeks:{:?}:{}",
        league_id, season_id, params.group_id, today
    );

    let weeks = state
        .cache
        .get_or_insert_with(&key, ttl::DEFAULT, || async {
            LeagueService::new(&state.db)
                .weeks(league_id, season_id, params.group_id, today)
                .await
        })
        .await?;

    Ok((StatusCode::OK, Json(weeks)))
}

/// For each league a team plays in, the week that matters now.
///
/// That is the week spanning today, or else the team's earliest week in the
/// league flagged as `is_next_week`.
#[utoipa::path(
    get,
    path = "/api/teams/{team_id}/current-weeks",
    tag = LEAGUE_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Current week per league", body = Vec<TeamLeagueWeekDto>),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn team_current_weeks(
    State(state): State<AppState>,
    Path(team_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let today = today();
    let key = format!("team:{}:current-weeks:{}", team_id, today);

    let weeks = state
        .cache
        .get_or_insert_with(&key, ttl::DEFAULT, || async {
            LeagueService::new(&state.db)
                .team_current_weeks(team_id, today)
                .await
        })
        .await?;

    Ok((StatusCode::OK, Json(weeks)))
}
