use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewsPhotoDto {
    pub id: i32,
    pub photo_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewsDto {
    pub id: i32,
    pub title: String,
    pub subtitle: String,
    pub main_photo: Option<String>,
    pub details_title: String,
    pub details: String,
    pub match_id: Option<i32>,
    pub city_id: Option<i32>,
    pub team_id: Option<i32>,
    pub is_main_news: bool,
    pub published: bool,
    pub created_date: DateTime<Utc>,
    pub photos: Vec<NewsPhotoDto>,
}

/// News item with text taken from one culture's content row.
///
/// Text fields are `None` when the item has no row for that culture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LocalizedNewsDto {
    pub id: i32,
    pub culture: String,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub details_title: Option<String>,
    pub details: Option<String>,
    pub main_photo: Option<String>,
    pub match_id: Option<i32>,
    pub city_id: Option<i32>,
    pub team_id: Option<i32>,
    pub is_main_news: bool,
    pub created_date: DateTime<Utc>,
    pub photos: Vec<NewsPhotoDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewsContentDto {
    pub id: i32,
    pub culture: String,
    pub title: String,
    pub subtitle: String,
    pub details_title: String,
    pub details: String,
}

/// Admin view of a news item with every localized row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewsDetailDto {
    pub news: NewsDto,
    pub contents: Vec<NewsContentDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SaveNewsDto {
    pub title: String,
    pub subtitle: String,
    pub details_title: String,
    pub details: String,
    pub main_photo: Option<String>,
    #[serde(default)]
    pub photo_urls: Vec<String>,
    pub city_id: Option<i32>,
    pub team_id: Option<i32>,
    pub match_id: Option<i32>,
    #[serde(default)]
    pub is_main_news: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SaveNewsContentDto {
    pub title: String,
    pub subtitle: String,
    pub details_title: String,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PublishStateDto {
    pub id: i32,
    pub published: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TranslateRequestDto {
    pub text: String,
    pub target_language: String,
    pub source_language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TranslateResponseDto {
    pub translated_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TranslateManyRequestDto {
    pub text: String,
    pub target_languages: Vec<String>,
    pub source_language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TranslateManyResponseDto {
    pub translations: BTreeMap<String, String>,
}
