use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{api::ErrorDto, search::SearchResultDto},
    server::{
        cache::ttl,
        error::AppError,
        service::search::{normalize_query, SearchService},
        state::AppState,
    },
};

pub static SEARCH_TAG: &str = "search";

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// Players, teams and leagues whose name contains the query.
///
/// Queries shorter than three characters after trimming are rejected. Results
/// are cached per lowercased query.
///
/// # Arguments
/// - `state` - Application state containing the database connection and cache
/// - `params` - Search text
///
/// # Returns
/// - `200 OK` - Players, then teams, then leagues
/// - `400 Bad Request` - Query too short
/// - `401 Unauthorized` - Missing or invalid API key
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/search",
    tag = SEARCH_TAG,
    params(
        ("q" = String, Query, description = "Search text, at least 3 characters")
    ),
    responses(
        (status = 200, description = "Matching players, teams and leagues", body = Vec<SearchResultDto>),
        (status = 400, description = "Query too short", body = ErrorDto),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let query = normalize_query(&params.q)?;
    let key = format!("search:{}", query.to_lowercase());

    let results = state
        .cache
        .get_or_insert_with(&key, ttl::LONG, || async {
            SearchService::new(&state.db).search(&query).await
        })
        .await?;

    Ok((StatusCode::OK, Json(results)))
}
