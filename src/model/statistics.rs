use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScorerDto {
    pub player_id: i32,
    pub player_name: String,
    pub icon: Option<String>,
    pub team_id: Option<i32>,
    pub team_name: Option<String>,
    pub goals: i32,
    pub penalty_goals: i32,
    pub assists: i32,
    pub matches: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TeamGoalStatsDto {
    pub team_id: i32,
    pub team_name: String,
    pub logo_url: Option<String>,
    pub goals: i32,
    pub penalty_goals: i32,
    pub own_goals: i32,
    pub assisted_goals: i32,
    pub yellow_cards: i32,
    pub red_cards: i32,
    pub played: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LeagueStatisticsDto {
    pub league_id: i32,
    pub season_id: i32,
    pub total_goals: i32,
    pub total_assists: i32,
    pub total_penalty_goals: i32,
    pub total_own_goals: i32,
    pub average_goals_per_match: f64,
    pub top_scorers: Vec<ScorerDto>,
    pub top_assists: Vec<ScorerDto>,
    pub team_stats: Vec<TeamGoalStatsDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LeaguePlayerStatDto {
    pub player_id: i32,
    pub player_name: String,
    pub icon: Option<String>,
    pub team_id: Option<i32>,
    pub team_name: Option<String>,
    pub appearances: i32,
    pub goals: i32,
    pub assists: i32,
    pub penalties: i32,
    pub own_goals: i32,
    pub yellow_cards: i32,
    pub red_cards: i32,
    pub man_of_the_match: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PlayerCountDto {
    pub player_id: i32,
    pub player_name: String,
    pub icon: Option<String>,
    pub team_id: Option<i32>,
    pub team_name: Option<String>,
    pub team_logo: Option<String>,
    pub count: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TopPlayersDto {
    pub top_scorers: Vec<PlayerCountDto>,
    pub top_assists: Vec<PlayerCountDto>,
    pub top_goal_assists: Vec<PlayerCountDto>,
    pub top_yellows: Vec<PlayerCountDto>,
    pub top_reds: Vec<PlayerCountDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TeamCountDto {
    pub team_id: i32,
    pub team_name: String,
    pub logo_url: Option<String>,
    pub count: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TopTeamsDto {
    pub top_scoring: Vec<TeamCountDto>,
    pub top_assisting: Vec<TeamCountDto>,
    pub top_yellow_cards: Vec<TeamCountDto>,
    pub top_red_cards: Vec<TeamCountDto>,
}
