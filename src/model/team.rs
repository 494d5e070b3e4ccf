use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TeamPlayerDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub position: Option<String>,
    pub number: Option<i32>,
    pub icon: Option<String>,
    pub age: Option<i32>,
    pub nationality: Option<String>,
    pub player_value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TeamSquadDto {
    pub team_id: i32,
    pub team_name: String,
    pub logo_url: Option<String>,
    pub players: Vec<TeamPlayerDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TeamSeasonMatchDto {
    pub match_id: i32,
    pub week_number: i32,
    pub week_name: Option<String>,
    pub match_date: DateTime<Utc>,
    pub home_team_id: i32,
    pub home_team_name: String,
    pub home_team_logo: Option<String>,
    pub away_team_id: i32,
    pub away_team_name: String,
    pub away_team_logo: Option<String>,
    /// `h-a` when played, kick-off `HH:MM` otherwise.
    pub score: String,
    pub is_played: bool,
    pub result: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TeamSeasonPlayerDto {
    pub player_id: i32,
    pub name: String,
    pub number: Option<i32>,
    pub position: Option<String>,
    pub icon: Option<String>,
    pub appearances: i32,
    pub started: i32,
    pub substitute: i32,
    pub goals: i32,
    pub penalties: i32,
    pub own_goals: i32,
    pub assists: i32,
    pub yellow_cards: i32,
    pub red_cards: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TeamSeasonStatsDto {
    pub team_id: i32,
    pub team_name: String,
    pub logo_url: Option<String>,
    pub manager: Option<String>,
    pub season_id: i32,
    pub season_name: String,
    pub played: i32,
    pub won: i32,
    pub drawn: i32,
    pub lost: i32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub points: i32,
    pub is_favorite: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PlayerSeasonStatsDto {
    pub league_id: i32,
    pub league_name: String,
    pub season_id: i32,
    pub season_name: String,
    pub team_id: i32,
    pub team_name: String,
    pub appearances: i32,
    pub goals: i32,
    pub assists: i32,
    pub penalties: i32,
    pub own_goals: i32,
    pub yellow_cards: i32,
    pub red_cards: i32,
    pub man_of_the_match: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlayerDetailsDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub position: Option<String>,
    pub number: Option<i32>,
    pub icon: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub age: Option<i32>,
    pub nationality: Option<String>,
    pub height: Option<i32>,
    pub weight: Option<i32>,
    pub preferred_foot: Option<String>,
    pub player_type: Option<String>,
    pub player_value: Option<f64>,
    pub licensed: bool,
    pub team_id: Option<i32>,
    pub team_name: Option<String>,
    pub team_logo: Option<String>,
    pub stats: Vec<PlayerSeasonStatsDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ValuablePlayerDto {
    pub player_id: i32,
    pub full_name: String,
    pub position: Option<String>,
    pub icon: Option<String>,
    pub preferred_foot: Option<String>,
    pub team_id: Option<i32>,
    pub team_name: Option<String>,
    pub team_logo: Option<String>,
    pub player_value: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WebTeamDto {
    pub id: i32,
    pub name: String,
    pub logo_url: Option<String>,
    pub manager: Option<String>,
    pub city_id: i32,
}
