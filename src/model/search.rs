use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SearchResultType {
    Player,
    Team,
    League,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SearchResultDto {
    pub id: i32,
    pub name: String,
    pub logo: Option<String>,
    #[serde(rename = "type")]
    pub result_type: SearchResultType,
}
