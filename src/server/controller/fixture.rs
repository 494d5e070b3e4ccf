use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        fixture::{
            AddSubstitutionDto, MatchDetailsDto, MatchSquadsDto, MatchSummaryDto,
            ScoreUpdatedDto, SubstitutionDto, UpdateScoreDto,
        },
    },
    server::{
        cache::ttl,
        error::AppError,
        model::fixture::RecordGoalParams,
        service::fixture::{MatchService, SubstitutionParams},
        state::AppState,
        util::time::today,
    },
};

/// Tag for grouping match endpoints in OpenAPI documentation
pub static MATCH_TAG: &str = "match";

/// Tag for grouping announcer endpoints in OpenAPI documentation
pub static ANNOUNCER_TAG: &str = "announcer";

fn details_key(match_id: i32) -> String {
    format!("match:{}:details", match_id)
}

/// Match details with goals, cards and the man of the match.
///
/// # Arguments
/// - `state` - Application state containing the database connection and cache
/// - `match_id` - Match ID
///
/// # Returns
/// - `200 OK` - Match details
/// - `401 Unauthorized` - Missing or invalid API key
/// - `404 Not Found` - Match not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/matches/{match_id}",
    tag = MATCH_TAG,
    params(
        ("match_id" = i32, Path, description = "Match ID")
    ),
    responses(
        (status = 200, description = "Match details", body = MatchDetailsDto),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn details(
    State(state): State<AppState>,
    Path(match_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let details = state
        .cache
        .get_or_insert_with(&details_key(match_id), ttl::DEFAULT, || async {
            MatchService::new(&state.db).details(match_id).await
        })
        .await?;

    Ok((StatusCode::OK, Json(details)))
}

/// Starting elevens and substitutes of both sides.
#[utoipa::path(
    get,
    path = "/api/matches/{match_id}/squads",
    tag = MATCH_TAG,
    params(
        ("match_id" = i32, Path, description = "Match ID")
    ),
    responses(
        (status = 200, description = "Squads of both teams", body = MatchSquadsDto),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn squads(
    State(state): State<AppState>,
    Path(match_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let key = format!("match:{}:squads", match_id);

    let squads = state
        .cache
        .get_or_insert_with(&key, ttl::SQUADS, || async {
            MatchService::new(&state.db).squads(match_id).await
        })
        .await?;

    Ok((StatusCode::OK, Json(squads)))
}

/// Matches kicking off today in the leagues of a city.
#[utoipa::path(
    get,
    path = "/api/announcer/cities/{city_id}/matches",
    tag = ANNOUNCER_TAG,
    params(
        ("city_id" = i32, Path, description = "City ID")
    ),
    responses(
        (status = 200, description = "Today's matches", body = Vec<MatchSummaryDto>),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn announcer_matches(
    State(state): State<AppState>,
    Path(city_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let matches = MatchService::new(&state.db)
        .announcer_today(city_id, today())
        .await?;

    Ok((StatusCode::OK, Json(matches)))
}

/// Record a substitution during a match.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Match, incoming and outgoing players, and minute
///
/// # Returns
/// - `201 Created` - Substitution stored
/// - `400 Bad Request` - Non-positive id or negative minute
/// - `401 Unauthorized` - Missing or invalid API key
/// - `404 Not Found` - Match or a player not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/announcer/substitutions",
    tag = ANNOUNCER_TAG,
    request_body = AddSubstitutionDto,
    responses(
        (status = 201, description = "Substitution stored", body = SubstitutionDto),
        (status = 400, description = "Invalid substitution", body = ErrorDto),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 404, description = "Match or player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn add_substitution(
    State(state): State<AppState>,
    Json(payload): Json<AddSubstitutionDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = SubstitutionParams {
        match_id: payload.match_id,
        player_in_id: payload.player_in_id,
        player_out_id: payload.player_out_id,
        minute: payload.minute,
    };

    let substitution = MatchService::new(&state.db).add_substitution(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(SubstitutionDto {
            success: true,
            substitution_id: substitution.id,
        }),
    ))
}

/// Record a goal and optionally overwrite the score.
///
/// Drops the cached match details so the next read sees the new score.
#[utoipa::path(
    post,
    path = "/api/announcer/goals",
    tag = ANNOUNCER_TAG,
    request_body = UpdateScoreDto,
    responses(
        (status = 201, description = "Goal stored", body = ScoreUpdatedDto),
        (status = 400, description = "Invalid goal", body = ErrorDto),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn update_score(
    State(state): State<AppState>,
    Json(payload): Json<UpdateScoreDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = RecordGoalParams {
        match_id: payload.match_id,
        team_id: payload.scoring_team_id,
        player_id: payload.scorer_player_id,
        assist_player_id: payload.assist_player_id,
        minute: payload.minute,
        is_penalty: payload.is_penalty,
        is_own_goal: payload.is_own_goal,
        home_score: payload.home_score,
        away_score: payload.away_score,
    };

    let goal = MatchService::new(&state.db).update_score(params).await?;

    state.cache.invalidate(&details_key(goal.match_id)).await;

    Ok((
        StatusCode::CREATED,
        Json(ScoreUpdatedDto {
            success: true,
            match_id: goal.match_id,
            goal_id: goal.id,
        }),
    ))
}
