//! Read-only projections for the public website under `/web-api`.

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
        city::CityDto,
        fixture::{MatchSummaryDto, TeamBriefDto, WebMatchDetailsDto},
        league::{LeagueDto, WeekBlockDto, WeekDto},
        news::NewsDto,
        standings::StandingRowDto,
        team::{TeamPlayerDto, WebTeamDto},
        week::WeekBestTeamDto,
    },
    server::{
        cache::ttl,
        controller::news::NEWS_PREFIX,
        error::AppError,
        service::{
            city::CityService, fixture::MatchService, league::LeagueService, news::NewsService,
            standings::StandingsService, team::TeamService, week::WeekService,
        },
        state::AppState,
        util::time::today,
    },
};

/// Tag for grouping website endpoints in OpenAPI documentation
pub static WEB_TAG: &str = "web";

#[derive(Debug, Deserialize)]
pub struct PublishedParams {
    #[serde(default = "default_only_published")]
    pub only_published: bool,
}

fn default_only_published() -> bool {
    true
}

#[utoipa::path(
    get,
    path = "/web-api/cities",
    tag = WEB_TAG,
    responses(
        (status = 200, description = "All cities", body = Vec<CityDto>),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn cities(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let cities = state
        .cache
        .get_or_insert_with("cities", ttl::CITIES, || async {
            CityService::new(&state.db).list_cities().await
        })
        .await?;

    Ok((StatusCode::OK, Json(cities)))
}

/// Teams of a city ordered by name.
#[utoipa::path(
    get,
    path = "/web-api/cities/{city_id}/teams",
    tag = WEB_TAG,
    params(
        ("city_id" = i32, Path, description = "City ID")
    ),
    responses(
        (status = 200, description = "Teams of the city", body = Vec<TeamBriefDto>),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn city_teams(
    State(state): State<AppState>,
    Path(city_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let key = format!("web:city:{}:teams", city_id);

    let teams = state
        .cache
        .get_or_insert_with(&key, ttl::DEFAULT, || async {
            CityService::new(&state.db).city_teams(city_id).await
        })
        .await?;

    Ok((StatusCode::OK, Json(teams)))
}

/// Leagues of a city, newest start date first.
#[utoipa::path(
    get,
    path = "/web-api/cities/{city_id}/leagues",
    tag = WEB_TAG,
    params(
        ("city_id" = i32, Path, description = "City ID")
    ),
    responses(
        (status = 200, description = "Leagues of the city", body = Vec<LeagueDto>),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn city_leagues(
    State(state): State<AppState>,
    Path(city_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let key = format!("web:city:{}:leagues", city_id);

    let leagues = state
        .cache
        .get_or_insert_with(&key, ttl::DEFAULT, || async {
            CityService::new(&state.db).city_leagues(city_id).await
        })
        .await?;

    Ok((StatusCode::OK, Json(leagues)))
}

/// News of a city, newest first.
#[utoipa::path(
    get,
    path = "/web-api/cities/{city_id}/news",
    tag = WEB_TAG,
    params(
        ("city_id" = i32, Path, description = "City ID"),
        ("only_published" = Option<bool>, Query, description = "Defaults to true")
    ),
    responses(
        (status = 200, description = "News of the city", body = Vec<NewsDto>),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn city_news(
    State(state): State<AppState>,
    Path(city_id): Path<i32>,
    Query(params): Query<PublishedParams>,
) -> Result<impl IntoResponse, AppError> {
    let key = format!(
        "{}web:city:{}:{}",
        NEWS_PREFIX, city_id, params.only_published
    );

    let news = state
        .cache
        .get_or_insert_with(&key, ttl::DEFAULT, || async {
            NewsService::new(&state.db)
                .city(city_id, params.only_published)
                .await
        })
        .await?;

    Ok((StatusCode::OK, Json(news)))
}

/// Main news, newest first.
#[utoipa::path(
    get,
    path = "/web-api/news/main",
    tag = WEB_TAG,
    params(
        ("only_published" = Option<bool>, Query, description = "Defaults to true")
    ),
    responses(
        (status = 200, description = "Main news", body = Vec<NewsDto>),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn main_news(
    State(state): State<AppState>,
    Query(params): Query<PublishedParams>,
) -> Result<impl IntoResponse, AppError> {
    let key = format!("{}web:main:{}", NEWS_PREFIX, params.only_published);

    let news = state
        .cache
        .get_or_insert_with(&key, ttl::DEFAULT, || async {
            NewsService::new(&state.db).main(params.only_published).await
        })
        .await?;

    Ok((StatusCode::OK, Json(news)))
}

#[utoipa::path(
    get,
    path = "/web-api/news/{news_id}",
    tag = WEB_TAG,
    params(
        ("news_id" = i32, Path, description = "News ID")
    ),
    responses(
        (status = 200, description = "News item", body = NewsDto),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 404, description = "News not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn news_by_id(
    State(state): State<AppState>,
    Path(news_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let key = format!("{}web:{}", NEWS_PREFIX, news_id);

    let news = state
        .cache
        .get_or_insert_with(&key, ttl::DEFAULT, || async {
            NewsService::new(&state.db).by_id(news_id).await
        })
        .await?;

    Ok((StatusCode::OK, Json(news)))
}

/// The four most recent matches across the leagues of a city.
#[utoipa::path(
    get,
    path = "/web-api/cities/{city_id}/last-matches",
    tag = WEB_TAG,
    params(
        ("city_id" = i32, Path, description = "City ID")
    ),
    responses(
        (status = 200, description = "Latest matches", body = Vec<MatchSummaryDto>),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn last_matches(
    State(state): State<AppState>,
    Path(city_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let key = format!("web:city:{}:last-matches", city_id);

    let matches = state
        .cache
        .get_or_insert_with(&key, ttl::DEFAULT, || async {
            MatchService::new(&state.db).last_matches(city_id).await
        })
        .await?;

    Ok((StatusCode::OK, Json(matches)))
}

/// Best eleven of the city's latest week.
#[utoipa::path(
    get,
    path = "/web-api/cities/{city_id}/best-eleven",
    tag = WEB_TAG,
    params(
        ("city_id" = i32, Path, description = "City ID")
    ),
    responses(
        (status = 200, description = "Best team of the latest week", body = WeekBestTeamDto),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 404, description = "No week or no best team", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn best_eleven(
    State(state): State<AppState>,
    Path(city_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let key = format!("web:city:{}:best-eleven", city_id);

    let best = state
        .cache
        .get_or_insert_with(&key, ttl::DEFAULT, || async {
            WeekService::new(&state.db).last_week_best_eleven(city_id).await
        })
        .await?;

    Ok((StatusCode::OK, Json(best)))
}

/// Standings of the city's latest league and season.
#[utoipa::path(
    get,
    path = "/web-api/cities/{city_id}/standings",
    tag = WEB_TAG,
    params(
        ("city_id" = i32, Path, description = "City ID")
    ),
    responses(
        (status = 200, description = "Standing rows", body = Vec<StandingRowDto>),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 404, description = "No league or season", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn city_standings(
    State(state): State<AppState>,
    Path(city_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let key = format!("web:city:{}:standings", city_id);

    let rows = state
        .cache
        .get_or_insert_with(&key, ttl::DEFAULT, || async {
            StandingsService::new(&state.db).latest_for_city(city_id).await
        })
        .await?;

    Ok((StatusCode::OK, Json(rows)))
}

#[utoipa::path(
    get,
    path = "/web-api/teams/{team_id}",
    tag = WEB_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Team", body = WebTeamDto),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn team(
    State(state): State<AppState>,
    Path(team_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let key = format!("web:team:{}", team_id);

    let team = state
        .cache
        .get_or_insert_with(&key, ttl::DEFAULT, || async {
            TeamService::new(&state.db).web_team(team_id).await
        })
        .await?;

    Ok((StatusCode::OK, Json(team)))
}

/// Active players of a team ordered by shirt number.
#[utoipa::path(
    get,
    path = "/web-api/teams/{team_id}/roster",
    tag = WEB_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Team roster", body = Vec<TeamPlayerDto>),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn roster(
    State(state): State<AppState>,
    Path(team_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let today = today();
    let key = format!("web:team:{}:roster:{}", team_id, today);

    let players = state
        .cache
        .get_or_insert_with(&key, ttl::DEFAULT, || async {
            TeamService::new(&state.db).roster(team_id, today).await
        })
        .await?;

    Ok((StatusCode::OK, Json(players)))
}

/// Every match of a team, one block per league week.
#[utoipa::path(
    get,
    path = "/web-api/teams/{team_id}/matches",
    tag = WEB_TAG,
    params(
        ("team_id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Matches grouped by league week", body = Vec<WeekBlockDto>),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn team_matches(
    State(state): State<AppState>,
    Path(team_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let key = format!("web:team:{}:matches", team_id);

    let blocks = state
        .cache
        .get_or_insert_with(&key, ttl::DEFAULT, || async {
            TeamService::new(&state.db).match_blocks(team_id).await
        })
        .await?;

    Ok((StatusCode::OK, Json(blocks)))
}

/// Weeks of a league ordered by number.
#[utoipa::path(
    get,
    path = "/web-api/leagues/{league_id}/weeks",
    tag = WEB_TAG,
    params(
        ("league_id" = i32, Path, description = "League ID")
    ),
    responses(
        (status = 200, description = "Weeks of the league", body = Vec<WeekDto>),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 404, description = "League not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn league_weeks(
    State(state): State<AppState>,
    Path(league_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let key = format!("web:league:{}:weeks", league_id);

    let weeks = state
        .cache
        .get_or_insert_with(&key, ttl::DEFAULT, || async {
            LeagueService::new(&state.db).league_weeks(league_id).await
        })
        .await?;

    Ok((StatusCode::OK, Json(weeks)))
}

/// Matches of one league week ordered by kick-off.
#[utoipa::path(
    get,
    path = "/web-api/leagues/{league_id}/weeks/{week_id}/matches",
    tag = WEB_TAG,
    params(
        ("league_id" = i32, Path, description = "League ID"),
        ("week_id" = i32, Path, description = "Week ID")
    ),
    responses(
        (status = 200, description = "Matches of the week", body = Vec<MatchSummaryDto>),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn week_matches(
    State(state): State<AppState>,
    Path((league_id, week_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let key = format!("web:league:{}:week:{}", league_id, week_id);

    let matches = state
        .cache
        .get_or_insert_with(&key, ttl::DEFAULT, || async {
            LeagueService::new(&state.db)
                .week_matches(league_id, week_id)
                .await
        })
        .await?;

    Ok((StatusCode::OK, Json(matches)))
}

/// Matches of the league week whose start is nearest to today.
///
/// A league without weeks answers with an empty block rather than 404.
///
/// # Arguments
/// - `state` - Application state containing the database connection and cache
/// - `league_id` - League ID
///
/// # Returns
/// - `200 OK` - League name, week and its matches
/// - `401 Unauthorized` - Missing or invalid API key
/// - `404 Not Found` - League not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/web-api/leagues/{league_id}/actual-week",
    tag = WEB_TAG,
    params(
        ("league_id" = i32, Path, description = "League ID")
    ),
    responses(
        (status = 200, description = "Matches of the nearest week", body = WeekBlockDto),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 404, description = "League not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn actual_week_matches(
    State(state): State<AppState>,
    Path(league_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let today = today();
    let key = format!("web:league:{}:actual-week:{}", league_id, today);

    let block = state
        .cache
        .get_or_insert_with(&key, ttl::DEFAULT, || async {
            LeagueService::new(&state.db)
                .actual_week_matches(league_id, today)
                .await
        })
        .await?;

    Ok((StatusCode::OK, Json(block)))
}

/// A match with events, formations and both full squads.
#[utoipa::path(
    get,
    path = "/web-api/matches/{match_id}",
    tag = WEB_TAG,
    params(
        ("match_id" = i32, Path, description = "Match ID")
    ),
    responses(
        (status = 200, description = "Match page data", body = WebMatchDetailsDto),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn match_details(
    State(state): State<AppState>,
    Path(match_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let key = format!("web:match:{}", match_id);

    let details = state
        .cache
        .get_or_insert_with(&key, ttl::DEFAULT, || async {
            MatchService::new(&state.db).web_details(match_id).await
        })
        .await?;

    Ok((StatusCode::OK, Json(details)))
}
