use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateTransferRequestDto {
    pub player_user_id: String,
    pub requested_captain_user_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TransferRequestDto {
    pub id: i32,
    pub player_user_id: String,
    pub requested_captain_user_id: String,
    pub approval_captain_user_id: Option<String>,
    pub status: String,
    pub request_date: DateTime<Utc>,
    pub approval_date: Option<DateTime<Utc>>,
    pub rejection_date: Option<DateTime<Utc>>,
}

/// A transfer request as listed for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TransferListItemDto {
    pub id: i32,
    pub player_user_id: String,
    pub player_name: String,
    pub requested_captain_user_id: String,
    pub requested_captain_name: Option<String>,
    pub approval_captain_user_id: Option<String>,
    pub approval_captain_name: Option<String>,
    /// Team the player is asked to join.
    pub requested_team_id: Option<i32>,
    pub requested_team_name: Option<String>,
    /// Team whose captain approves, the player's current team.
    pub approval_team_id: Option<i32>,
    pub approval_team_name: Option<String>,
    pub request_date: DateTime<Utc>,
    pub approval_date: Option<DateTime<Utc>>,
    pub rejection_date: Option<DateTime<Utc>>,
    pub status: String,
    pub message: String,
    pub button_show: bool,
}
