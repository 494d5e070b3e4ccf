use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::fixture::TeamBriefDto;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SuspensionDto {
    pub id: i32,
    pub player_id: i32,
    pub player_name: String,
    pub icon: Option<String>,
    pub team_id: Option<i32>,
    pub team_name: Option<String>,
    pub suspension_type: String,
    pub games_suspended: i32,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BestPlayerDto {
    pub player_id: i32,
    pub name: String,
    pub position: Option<String>,
    pub icon: Option<String>,
    pub team_id: Option<i32>,
    pub team_name: Option<String>,
    pub order_number: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WeekBestTeamDto {
    pub week_id: i32,
    pub week_number: i32,
    pub week_name: Option<String>,
    pub league_id: i32,
    pub season_id: i32,
    pub best_player: Option<BestPlayerDto>,
    pub best_team: Option<TeamBriefDto>,
    pub players: Vec<BestPlayerDto>,
}
