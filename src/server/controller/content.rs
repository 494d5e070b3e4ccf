use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        content::{
            AdvertisementDto, AppSettingDto, PhotoDto, RichContentDto, StaticValueDto, StoryDto,
            UpsertStaticValueDto,
        },
    },
    server::{
        cache::ttl,
        data::content::RichContentFilter,
        error::AppError,
        service::content::{ContentService, StoryMedia},
        state::AppState,
    },
};

/// Tag for grouping settings and static content endpoints in OpenAPI documentation
pub static CONTENT_TAG: &str = "content";

#[derive(Debug, Deserialize)]
pub struct StaticValueParams {
    pub key: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RichContentParams {
    pub category: Option<String>,
    pub culture: Option<String>,
    #[serde(default = "default_published")]
    pub published: bool,
}

fn default_published() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct PhotoParams {
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StoryParams {
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Current app settings (versions, force update, stop switch).
///
/// # Arguments
/// - `state` - Application state containing the database connection and cache
///
/// # Returns
/// - `200 OK` - The most recently updated settings row
/// - `401 Unauthorized` - Missing or invalid API key
/// - `404 Not Found` - No settings stored
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/settings",
    tag = CONTENT_TAG,
    responses(
        (status = 200, description = "Current app settings", body = AppSettingDto),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 404, description = "No settings stored", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn app_settings(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let settings = state
        .cache
        .get_or_insert_with("settings", ttl::DEFAULT, || async {
            ContentService::new(&state.db).app_settings().await
        })
        .await?;

    Ok((StatusCode::OK, Json(settings)))
}

/// Key/value content. One entry with `?key=`, otherwise all entries.
#[utoipa::path(
    get,
    path = "/api/static-values",
    tag = CONTENT_TAG,
    params(
        ("key" = Option<String>, Query, description = "Single key to fetch")
    ),
    responses(
        (status = 200, description = "Matching entries", body = Vec<StaticValueDto>),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 404, description = "Key not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn static_values(
    State(state): State<AppState>,
    Query(params): Query<StaticValueParams>,
) -> Result<impl IntoResponse, AppError> {
    let values = ContentService::new(&state.db)
        .static_values(params.key.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(values)))
}

/// Rich content blocks filtered by category, culture and publish state.
#[utoipa::path(
    get,
    path = "/api/rich-content",
    tag = CONTENT_TAG,
    params(
        ("category" = Option<String>, Query, description = "Category code"),
        ("culture" = Option<String>, Query, description = "Culture code such as tr or en"),
        ("published" = Option<bool>, Query, description = "Publish state, defaults to true")
    ),
    responses(
        (status = 200, description = "Matching content, newest first", body = Vec<RichContentDto>),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn rich_content(
    State(state): State<AppState>,
    Query(params): Query<RichContentParams>,
) -> Result<impl IntoResponse, AppError> {
    let filter = RichContentFilter {
        category: params.category,
        culture: params.culture,
        published: params.published,
    };
    let content = ContentService::new(&state.db).rich_content(filter).await?;

    Ok((StatusCode::OK, Json(content)))
}

/// Active advertisements, newest upload first.
#[utoipa::path(
    get,
    path = "/api/advertisements",
    tag = CONTENT_TAG,
    responses(
        (status = 200, description = "Active advertisements", body = Vec<AdvertisementDto>),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn advertisements(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let ads = state
        .cache
        .get_or_insert_with("advertisements", ttl::LONG, || async {
            ContentService::new(&state.db).advertisements().await
        })
        .await?;

    Ok((StatusCode::OK, Json(ads)))
}

/// Gallery photos, newest upload first.
#[utoipa::path(
    get,
    path = "/api/photos",
    tag = CONTENT_TAG,
    params(
        ("category" = Option<String>, Query, description = "Gallery category")
    ),
    responses(
        (status = 200, description = "Matching photos", body = Vec<PhotoDto>),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn photos(
    State(state): State<AppState>,
    Query(params): Query<PhotoParams>,
) -> Result<impl IntoResponse, AppError> {
    let photos = ContentService::new(&state.db)
        .photos(params.category.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(photos)))
}

/// Published stories from the last 24 hours, optionally narrowed to one media type.
///
/// # Arguments
/// - `state` - Application state containing the database connection and cache
/// - `type` - `image` or `video`, case-insensitive
///
/// # Returns
/// - `200 OK` - Stories, most recently updated first
/// - `400 Bad Request` - Unknown media type
/// - `401 Unauthorized` - Missing or invalid API key
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/stories",
    tag = CONTENT_TAG,
    params(
        ("type" = Option<String>, Query, description = "image or video")
    ),
    responses(
        (status = 200, description = "Active stories", body = Vec<StoryDto>),
        (status = 400, description = "Unknown media type", body = ErrorDto),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn stories(
    State(state): State<AppState>,
    Query(params): Query<StoryParams>,
) -> Result<impl IntoResponse, AppError> {
    let media = StoryMedia::parse(params.kind.as_deref())?;
    let stories = ContentService::new(&state.db)
        .stories(media, Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(stories)))
}

/// Create or replace a key/value entry.
///
/// # Access Control
/// - `X-Admin-Key` - Admin surface only
///
/// # Arguments
/// - `state` - Application state containing the database connection and cache
/// - `key` - Entry key
/// - `payload` - New value
///
/// # Returns
/// - `200 OK` - Stored entry with its new timestamp
/// - `400 Bad Request` - Blank key
/// - `401 Unauthorized` - Missing or invalid admin key
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/admin/static-values/{key}",
    tag = CONTENT_TAG,
    params(
        ("key" = String, Path, description = "Entry key")
    ),
    request_body = UpsertStaticValueDto,
    responses(
        (status = 200, description = "Stored entry", body = StaticValueDto),
        (status = 400, description = "Blank key", body = ErrorDto),
        (status = 401, description = "Missing or invalid admin key", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("admin_key" = [])),
)]
pub async fn upsert_static_value(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(payload): Json<UpsertStaticValueDto>,
) -> Result<impl IntoResponse, AppError> {
    let value = ContentService::new(&state.db)
        .upsert_static_value(&key, payload.value)
        .await?;

    Ok((StatusCode::OK, Json(value)))
}
