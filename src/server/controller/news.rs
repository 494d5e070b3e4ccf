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
        news::{
            LocalizedNewsDto, NewsContentDto, NewsDetailDto, NewsDto, PublishStateDto,
            SaveNewsContentDto, SaveNewsDto, TranslateManyRequestDto, TranslateManyResponseDto,
            TranslateRequestDto, TranslateResponseDto,
        },
    },
    server::{
        cache::ttl,
        error::AppError,
        service::news::{NewsService, TranslationService},
        state::AppState,
    },
};

/// Tag for grouping news endpoints in OpenAPI documentation
pub static NEWS_TAG: &str = "news";

/// Tag for grouping news management endpoints in OpenAPI documentation
pub static NEWS_ADMIN_TAG: &str = "news-admin";

/// Every cached news projection lives under this prefix.
pub const NEWS_PREFIX: &str = "news:";

#[derive(Debug, Deserialize)]
pub struct CultureParams {
    pub culture: Option<String>,
}

/// Published news, newest first, with photos.
#[utoipa::path(
    get,
    path = "/api/news",
    tag = NEWS_TAG,
    responses(
        (status = 200, description = "Published news", body = Vec<NewsDto>),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn actual(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let key = format!("{}actual", NEWS_PREFIX);

    let news = state
        .cache
        .get_or_insert_with(&key, ttl::NEWS, || async {
            NewsService::new(&state.db).actual().await
        })
        .await?;

    Ok((StatusCode::OK, Json(news)))
}

/// Published news with the text of one culture.
///
/// Text fields are empty for items that have no content row in the
/// requested culture.
///
/// # Arguments
/// - `state` - Application state containing the database connection and cache
/// - `params` - Culture code, defaults to `tr`
///
/// # Returns
/// - `200 OK` - Published news, newest first
/// - `401 Unauthorized` - Missing or invalid API key
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/news/localized",
    tag = NEWS_TAG,
    params(
        ("culture" = Option<String>, Query, description = "Culture code, defaults to tr")
    ),
    responses(
        (status = 200, description = "Localized news", body = Vec<LocalizedNewsDto>),
        (status = 401, description = "Missing or invalid API key", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("api_key" = [])),
)]
pub async fn localized(
    State(state): State<AppState>,
    Query(params): Query<CultureParams>,
) -> Result<impl IntoResponse, AppError> {
    let culture = params.culture.as_deref();
    let key = format!(
        "{}localized:{}",
        NEWS_PREFIX,
        culture.unwrap_or_default().trim().to_lowercase()
    );

    let news = state
        .cache
        .get_or_insert_with(&key, ttl::NEWS, || async {
            NewsService::new(&state.db).localized(culture).await
        })
        .await?;

    Ok((StatusCode::OK, Json(news)))
}

/// Every news item regardless of publish state.
#[utoipa::path(
    get,
    path = "/admin/news",
    tag = NEWS_ADMIN_TAG,
    responses(
        (status = 200, description = "All news, newest first", body = Vec<NewsDto>),
        (status = 401, description = "Missing or invalid admin key", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("admin_key" = [])),
)]
pub async fn admin_list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let news = NewsService::new(&state.db).admin_list().await?;

    Ok((StatusCode::OK, Json(news)))
}

/// One news item with photos and every localized content row.
#[utoipa::path(
    get,
    path = "/admin/news/{news_id}",
    tag = NEWS_ADMIN_TAG,
    params(
        ("news_id" = i32, Path, description = "News ID")
    ),
    responses(
        (status = 200, description = "News with contents", body = NewsDetailDto),
        (status = 401, description = "Missing or invalid admin key", body = ErrorDto),
        (status = 404, description = "News not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("admin_key" = [])),
)]
pub async fn admin_get(
    State(state): State<AppState>,
    Path(news_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let news = NewsService::new(&state.db).admin_get(news_id).await?;

    Ok((StatusCode::OK, Json(news)))
}

/// Create a published news item and its `tr` content row.
///
/// # Access Control
/// - `X-Admin-Key` - Admin surface only
///
/// # Arguments
/// - `state` - Application state containing the database connection and cache
/// - `payload` - Text, image URLs and links to city, team or match
///
/// # Returns
/// - `201 Created` - Stored news item
/// - `400 Bad Request` - A required text field is blank
/// - `401 Unauthorized` - Missing or invalid admin key
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/admin/news",
    tag = NEWS_ADMIN_TAG,
    request_body = SaveNewsDto,
    responses(
        (status = 201, description = "News created", body = NewsDto),
        (status = 400, description = "Missing text", body = ErrorDto),
        (status = 401, description = "Missing or invalid admin key", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("admin_key" = [])),
)]
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<SaveNewsDto>,
) -> Result<impl IntoResponse, AppError> {
    let news = NewsService::new(&state.db).create(payload).await?;

    state.cache.invalidate_prefix(NEWS_PREFIX).await;

    Ok((StatusCode::CREATED, Json(news)))
}

/// Replace the text and links of a news item. New photo URLs are appended.
#[utoipa::path(
    put,
    path = "/admin/news/{news_id}",
    tag = NEWS_ADMIN_TAG,
    params(
        ("news_id" = i32, Path, description = "News ID")
    ),
    request_body = SaveNewsDto,
    responses(
        (status = 200, description = "News updated", body = NewsDto),
        (status = 400, description = "Missing text", body = ErrorDto),
        (status = 401, description = "Missing or invalid admin key", body = ErrorDto),
        (status = 404, description = "News not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("admin_key" = [])),
)]
pub async fn update(
    State(state): State<AppState>,
    Path(news_id): Path<i32>,
    Json(payload): Json<SaveNewsDto>,
) -> Result<impl IntoResponse, AppError> {
    let news = NewsService::new(&state.db).update(news_id, payload).await?;

    state.cache.invalidate_prefix(NEWS_PREFIX).await;

    Ok((StatusCode::OK, Json(news)))
}

/// Create or replace the content row of one culture.
#[utoipa::path(
    put,
    path = "/admin/news/{news_id}/contents/{culture}",
    tag = NEWS_ADMIN_TAG,
    params(
        ("news_id" = i32, Path, description = "News ID"),
        ("culture" = String, Path, description = "Culture code")
    ),
    request_body = SaveNewsContentDto,
    responses(
        (status = 200, description = "Content stored", body = NewsContentDto),
        (status = 400, description = "Missing text", body = ErrorDto),
        (status = 401, description = "Missing or invalid admin key", body = ErrorDto),
        (status = 404, description = "News not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("admin_key" = [])),
)]
pub async fn upsert_content(
    State(state): State<AppState>,
    Path((news_id, culture)): Path<(i32, String)>,
    Json(payload): Json<SaveNewsContentDto>,
) -> Result<impl IntoResponse, AppError> {
    let content = NewsService::new(&state.db)
        .upsert_content(news_id, &culture, payload)
        .await?;

    state.cache.invalidate_prefix(NEWS_PREFIX).await;

    Ok((StatusCode::OK, Json(content)))
}

/// Flip the publish state and return the new one.
#[utoipa::path(
    post,
    path = "/admin/news/{news_id}/toggle-publish",
    tag = NEWS_ADMIN_TAG,
    params(
        ("news_id" = i32, Path, description = "News ID")
    ),
    responses(
        (status = 200, description = "New publish state", body = PublishStateDto),
        (status = 401, description = "Missing or invalid admin key", body = ErrorDto),
        (status = 404, description = "News not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("admin_key" = [])),
)]
pub async fn toggle_publish(
    State(state): State<AppState>,
    Path(news_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let published = NewsService::new(&state.db)
        .toggle_published(news_id)
        .await?;

    state.cache.invalidate_prefix(NEWS_PREFIX).await;

    Ok((StatusCode::OK, Json(published)))
}

#[utoipa::path(
    delete,
    path = "/admin/news/photos/{photo_id}",
    tag = NEWS_ADMIN_TAG,
    params(
        ("photo_id" = i32, Path, description = "News photo ID")
    ),
    responses(
        (status = 204, description = "Photo deleted"),
        (status = 401, description = "Missing or invalid admin key", body = ErrorDto),
        (status = 404, description = "Photo not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("admin_key" = [])),
)]
pub async fn delete_photo(
    State(state): State<AppState>,
    Path(photo_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    NewsService::new(&state.db).delete_photo(photo_id).await?;

    state.cache.invalidate_prefix(NEWS_PREFIX).await;

    Ok(StatusCode::NO_CONTENT)
}

/// Machine-translate news text into one language.
///
/// # Arguments
/// - `state` - Application state holding the optional translator
/// - `payload` - Text, target language and optional source language
///
/// # Returns
/// - `200 OK` - Translated text
/// - `400 Bad Request` - Blank text or target
/// - `401 Unauthorized` - Missing or invalid admin key
/// - `503 Service Unavailable` - No translator configured
/// - `500 Internal Server Error` - Translation backend failure
#[utoipa::path(
    post,
    path = "/admin/translate",
    tag = NEWS_ADMIN_TAG,
    request_body = TranslateRequestDto,
    responses(
        (status = 200, description = "Translated text", body = TranslateResponseDto),
        (status = 400, description = "Blank text or target", body = ErrorDto),
        (status = 401, description = "Missing or invalid admin key", body = ErrorDto),
        (status = 503, description = "Translation not configured", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("admin_key" = [])),
)]
pub async fn translate(
    State(state): State<AppState>,
    Json(payload): Json<TranslateRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let translated = TranslationService::new(state.translator.as_deref())
        .translate(payload)
        .await?;

    Ok((StatusCode::OK, Json(translated)))
}

/// Machine-translate news text into several languages.
#[utoipa::path(
    post,
    path = "/admin/translate/many",
    tag = NEWS_ADMIN_TAG,
    request_body = TranslateManyRequestDto,
    responses(
        (status = 200, description = "Text per target language", body = TranslateManyResponseDto),
        (status = 400, description = "Blank text or no targets", body = ErrorDto),
        (status = 401, description = "Missing or invalid admin key", body = ErrorDto),
        (status = 503, description = "Translation not configured", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("admin_key" = [])),
)]
pub async fn translate_many(
    State(state): State<AppState>,
    Json(payload): Json<TranslateManyRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let translations = TranslationService::new(state.translator.as_deref())
        .translate_many(payload)
        .await?;

    Ok((StatusCode::OK, Json(translations)))
}
