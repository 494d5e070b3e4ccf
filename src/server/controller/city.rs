use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        city::{CityDto, MenuLeagueDto, MenuTeamDto},
        league::{ActualLeagueMatchesDto, CityLeagueDto},
    },
    server::{
        cache::ttl,
        controller::MacParams,
        error::AppError,
        service::{city::CityService, league::LeagueService},
        state::AppState,
        util::time::today,
    },
};

/// Tag for grouping city endpoints in OpenAPI documentation
pub static CITY_TAG: &str = "city";

/// Cache key prefix of the team menus, dropped when favourites change.
pub const MENU_TEAMS_PREFIX: &str = "menu:teams:";

/// List every city.
///
/// Public endpoint used by the app before a key is known. Cities are ordered
/// by their configured order number, then by name.
///
/// # Arguments
/// - `state` - Application state containing the database connection and cache
///
/// # Returns
/// - `200 OK` - All cities
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/cities",
    tag = CITY_TAG,
    responses(
        (status = 200, description = "All cities", body = Vec<CityDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_cities(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let cities = state
        .cache
        .get_or_insert_with("cities", ttl::CITIES, || async {
            CityService::new(&state.db).list_cities().await
        })
        .await?;

    Ok((StatusCode::OK, Json(cities)))
}

/// Leagues of a city, each with its current week and that week's matches.
///
/// Leagues without a current or past week are left out.
///
/// # Arguments
/// - `state` - Application state containing the database connection and cache
/// - `city_id` - City to list leagues for
///
/// # Returns
/// - `200 OK` - Leagues with their current week
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/cities/{city_id}/leagues",
    tag = CITY_TAG,
    params(
        ("city_id" = i32, Path, description = "City ID")
    ),
    responses(
        (status = 200, description = "Leagues with their current week", body = Vec<CityLeagueDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn city_leagues(
    State(state): State<AppState>,
    Path(city_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let today = today();
    let key = format!("city:{}:leagues:{}", city_id, today);

    let leagues = state
        .cache
        .get_or_insert_with(&key, ttl::DEFAULT, || async {
            LeagueService::new(&state.db)
                .leagues_with_current_week(city_id, today)
                .await
        })
        .await?;

    Ok((StatusCode::OK, Json(leagues)))
}

/// Matches of the week nearest to today for every league of a city.
///
/// # Arguments
/// - `state` - Application state containing the database connection and cache
/// - `city_id` - City to list matches for
///
/// # Returns
/// - `200 OK` - One entry per league, matches grouped by day
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/cities/{city_id}/actual-matches",
    tag = CITY_TAG,
    params(
        ("city_id" = i32, Path, description = "City ID")
    ),
    responses(
        (status = 200, description = "Matches of the nearest week per league", body = Vec<ActualLeagueMatchesDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn actual_matches(
    State(state): State<AppState>,
    Path(city_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let today = today();
    let key = format!("city:{}:actual-matches:{}", city_id, today);

    let matches = state
        .cache
        .get_or_insert_with(&key, ttl::DEFAULT, || async {
            LeagueService::new(&state.db)
                .actual_matches(city_id, today)
                .await
        })
        .await?;

    Ok((StatusCode::OK, Json(matches)))
}

/// League menu of a city.
#[utoipa::path(
    get,
    path = "/api/cities/{city_id}/menu/leagues",
    tag = CITY_TAG,
    params(
        ("city_id" = i32, Path, description = "City ID")
    ),
    responses(
        (status = 200, description = "Leagues of the city", body = Vec<MenuLeagueDto>),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn menu_leagues(
    State(state): State<AppState>,
    Path(city_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let key = format!("menu:leagues:{}", city_id);

    let leagues = state
        .cache
        .get_or_insert_with(&key, ttl::LONG, || async {
            CityService::new(&state.db).menu_leagues(city_id).await
        })
        .await?;

    Ok((StatusCode::OK, Json(leagues)))
}

/// Team menu of a city.
///
/// When `mac_id` is supplied each team is flagged with whether that device
/// follows it.
///
/// # Arguments
/// - `state` - Application state containing the database connection and cache
/// - `city_id` - City to list teams for
/// - `params` - Optional device identifier
///
/// # Returns
/// - `200 OK` - Teams ordered by name
/// - `401 Unauthorized` - Missing or invalid API key
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/cities/{city_id}/menu/teams",
    tag = CITY_TAG,
    params(
        ("city_id" = i32, Path, description = "City ID"),
        ("mac_id" = Option<String>, Query, description = "Device identifier for favourite flags")
    ),
    responses(
        (status = 200, description = "Teams of the city", body = Vec<MenuTeamDto>),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn menu_teams(
    State(state): State<AppState>,
    Path(city_id): Path<i32>,
    Query(params): Query<MacParams>,
) -> Result<impl IntoResponse, AppError> {
    let mac = params.mac();
    let key = format!("{}{}:{}", MENU_TEAMS_PREFIX, city_id, mac.unwrap_or("-"));

    let teams = state
        .cache
        .get_or_insert_with(&key, ttl::LONG, || async {
            CityService::new(&state.db).menu_teams(city_id, mac).await
        })
        .await?;

    Ok((StatusCode::OK, Json(teams)))
}
