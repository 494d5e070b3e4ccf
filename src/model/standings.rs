use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RankingStatusDto {
    pub order_no: i32,
    pub color_code: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StandingRowDto {
    pub group_id: Option<i32>,
    pub group_name: String,
    pub league_id: i32,
    pub league_name: String,
    pub season_id: i32,
    pub season_name: String,
    pub position: i32,
    pub team_id: i32,
    pub team_name: String,
    pub team_logo: Option<String>,
    pub played: i32,
    pub won: i32,
    pub drawn: i32,
    pub lost: i32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_difference: i32,
    pub points: i32,
    pub penalty_points: i32,
    pub penalty_description: Option<String>,
    pub is_current_team: bool,
    pub ranking_statuses: Vec<RankingStatusDto>,
}

/// One group's table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GroupTableDto {
    pub group_id: Option<i32>,
    pub group_name: String,
    pub rows: Vec<StandingRowDto>,
}
