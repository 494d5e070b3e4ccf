use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        standings::{GroupTableDto, StandingRowDto},
    },
    server::{
        cache::ttl,
        controller::league::GroupParams,
        error::AppError,
        service::standings::StandingsService,
        state::AppState,
    },
};

/// Tag for grouping standings endpoints in OpenAPI documentation
pub static STANDINGS_TAG: &str = "standings";

/// League table for a season.
///
/// Without `group_id`, one table is built per group of the season (or a
/// single "League" table when the season has no groups) and the rows of all
/// tables are returned in order.
///
/// # Arguments
/// - `state` - Application state containing the database connection and cache
/// - `league_id` - League ID
/// - `season_id` - Season ID, must belong to the league
/// - `params` - Optional group filter
///
/// # Returns
/// - `200 OK` - Standing rows, empty when nothing has been played
/// - `401 Unauthorized` - Missing or invalid API key
/// - `404 Not Found` - League or season not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/leagues/{league_id}/seasons/{season_id}/standings",
    tag = STANDINGS_TAG,
    params(
        ("league_id" = i32, Path, description = "League ID"),
        ("season_id" = i32, Path, description = "Season ID"),
        ("group_id" = Option<i32>, Query, description = "Restrict to one group")
    ),
    responses(
        (status = 200, description = "Standing rows", body = Vec<StandingRowDto>),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 404, description = "League or season not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn league(
    State(state): State<AppState>,
    Path((league_id, season_id)): Path<(i32, i32)>,
    Query(params): Query<GroupParams>,
) -> Result<impl IntoResponse, AppError> {
    let key = format!(
        "standings:{}:{}:{:?}",
        league_id, season_id, params.group_id
    );

    let rows = state
        .cache
        .get_or_insert_with(&key, ttl::DEFAULT, || async {
            StandingsService::new(&state.db)
                .league(league_id, season_id, params.group_id)
                .await
        })
        .await?;

    Ok((StatusCode::OK, Json(rows)))
}

/// Tables of every group a team played in during a season.
#[utoipa::path(
    get,
    path = "/api/teams/{team_id}/seasons/{season_id}/standings",
    tag = STANDINGS_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID"),
        ("season_id" = i32, Path, description = "Season ID")
    ),
    responses(
        (status = 200, description = "Group tables with the team marked", body = Vec<GroupTableDto>),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 404, description = "Team has no played matches", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn team(
    State(state): State<AppState>,
    Path((team_id, season_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let key = format!("standings:team:{}:{}", team_id, season_id);

    let tables = state
        .cache
        .get_or_insert_with(&key, ttl::DEFAULT, || async {
            StandingsService::new(&state.db).team(team_id, season_id).await
        })
        .await?;

    Ok((StatusCode::OK, Json(tables)))
}
