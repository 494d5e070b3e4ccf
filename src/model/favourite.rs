use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

fn default_culture() -> String {
    "tr".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubscribeAllDto {
    pub user_token: String,
    #[serde(default = "default_culture")]
    pub culture: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FavouriteTeamRequestDto {
    pub team_id: i32,
    pub user_token: String,
    pub mac_id: String,
    #[serde(default = "default_culture")]
    pub culture: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FavouriteResultDto {
    pub success: bool,
    /// The row was already in the requested state; nothing changed.
    pub already: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IsFavouriteDto {
    pub is_favourite: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PushSendDto {
    pub title_tr: String,
    pub message_tr: String,
    pub title_en: String,
    pub message_en: String,
}
