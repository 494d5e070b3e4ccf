use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        week::{SuspensionDto, WeekBestTeamDto},
    },
    server::{cache::ttl, error::AppError, service::week::WeekService, state::AppState},
};

/// Tag for grouping week endpoints in OpenAPI documentation
pub static WEEK_TAG: &str = "week";

/// Players suspended in a week, ordered by last name.
#[utoipa::path(
    get,
    path = "/api/weeks/{week_id}/suspensions",
    tag = WEEK_TAG,
    params(
        ("week_id" = i32, Path, description = "Week ID")
    ),
    responses(
        (status = 200, description = "Suspensions of the week", body = Vec<SuspensionDto>),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn suspensions(
    State(state): State<AppState>,
    Path(week_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let key = format!("week:{}:suspensions", week_id);

    let suspensions = state
        .cache
        .get_or_insert_with(&key, ttl::DEFAULT, || async {
            WeekService::new(&state.db).suspensions(week_id).await
        })
        .await?;

    Ok((StatusCode::OK, Json(suspensions)))
}

/// Best player, best team and selected eleven of a week.
#[utoipa::path(
    get,
    path = "/api/weeks/{week_id}/best-team",
    tag = WEEK_TAG,
    params(
        ("week_id" = i32, Path, description = "Week ID")
    ),
    responses(
        (status = 200, description = "Best team of the week", body = WeekBestTeamDto),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 404, description = "No best team for the week", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn best_team(
    State(state): State<AppState>,
    Path(week_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let key = format!("week:{}:best-team", week_id);

    let best = state
        .cache
        .get_or_insert_with(&key, ttl::DEFAULT, || async {
            WeekService::new(&state.db).best_team(week_id).await
        })
        .await?;

    Ok((StatusCode::OK, Json(best)))
}
