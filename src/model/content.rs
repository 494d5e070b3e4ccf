use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AppSettingDto {
    pub ios_version: String,
    pub android_version: String,
    pub force_update: bool,
    pub app_stop: bool,
    pub app_stop_message: Option<String>,
    pub last_updated: DateTime<Utc>,
    pub tournament_start_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StaticValueDto {
    pub key: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpsertStaticValueDto {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RichContentDto {
    pub id: i32,
    pub category_code: Option<String>,
    pub culture: Option<String>,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
    pub text: Option<String>,
    pub alt_text: Option<String>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AdvertisementDto {
    pub id: i32,
    pub name: String,
    pub link_url: Option<String>,
    pub image_path: Option<String>,
    pub alt_text: Option<String>,
    pub category: Option<String>,
    pub city_id: Option<i32>,
    pub city_name: Option<String>,
    pub upload_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PhotoDto {
    pub id: i32,
    pub category: Option<String>,
    pub file_name: String,
    pub file_path: String,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StoryContentDto {
    pub id: i32,
    pub media_url: String,
    pub content_type: String,
    pub display_order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StoryDto {
    pub id: i32,
    pub title: String,
    pub story_image: Option<String>,
    pub published: bool,
    pub updated_at: DateTime<Utc>,
    /// `video` when any content is a video, otherwise `image`.
    #[serde(rename = "type")]
    pub kind: String,
    pub contents: Vec<StoryContentDto>,
}
