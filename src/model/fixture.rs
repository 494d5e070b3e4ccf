use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One match as it appears in lists.
///
/// `result` is only filled when the list is seen from one team's side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MatchSummaryDto {
    pub id: i32,
    pub league_id: i32,
    pub week_id: i32,
    pub group_id: Option<i32>,
    pub home_team_id: i32,
    pub home_team_name: String,
    pub home_team_logo: Option<String>,
    pub away_team_id: i32,
    pub away_team_name: String,
    pub away_team_logo: Option<String>,
    pub match_date: DateTime<Utc>,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub is_played: bool,
    pub status: String,
    pub match_url: Option<String>,
    pub result: Option<String>,
}

/// Matches of one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MatchDayDto {
    /// `dd.MM`
    pub date: String,
    pub full_date: NaiveDate,
    pub matches: Vec<MatchSummaryDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TeamBriefDto {
    pub id: i32,
    pub name: String,
    pub logo_url: Option<String>,
    pub manager: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GoalEventDto {
    pub id: i32,
    pub minute: i32,
    pub player_id: i32,
    pub player_name: String,
    pub player_icon: Option<String>,
    pub assist_player_id: Option<i32>,
    pub assist_player_name: Option<String>,
    pub team_id: i32,
    pub team_name: String,
    pub is_penalty: bool,
    pub is_own_goal: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CardEventDto {
    pub id: i32,
    pub minute: i32,
    pub player_id: i32,
    pub player_name: String,
    pub team_name: Option<String>,
    pub card_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ManOfTheMatchDto {
    pub player_id: i32,
    pub player_name: String,
    pub icon: Option<String>,
    pub team_name: Option<String>,
    pub goals: i32,
    pub assists: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MatchDetailsDto {
    pub id: i32,
    pub league_id: i32,
    pub league_name: String,
    pub league_icon: Option<String>,
    pub home_team: TeamBriefDto,
    pub away_team: TeamBriefDto,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub is_played: bool,
    pub status: String,
    pub match_date: DateTime<Utc>,
    pub match_url: Option<String>,
    pub goals: Vec<GoalEventDto>,
    pub cards: Vec<CardEventDto>,
    pub man_of_the_match: Option<ManOfTheMatchDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SquadPlayerDto {
    pub player_id: i32,
    pub name: String,
    pub number: Option<i32>,
    pub position: Option<String>,
    pub icon: Option<String>,
    pub top_position: Option<i32>,
    pub left_position: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SquadSideDto {
    pub team_id: i32,
    pub team_name: String,
    pub team_logo: Option<String>,
    pub formation_image: Option<String>,
    pub starting: Vec<SquadPlayerDto>,
    pub substitutes: Vec<SquadPlayerDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MatchSquadsDto {
    pub match_id: i32,
    pub home: SquadSideDto,
    pub away: SquadSideDto,
}

/// Website match page: the match plus every event and squad row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WebMatchDetailsDto {
    pub summary: MatchSummaryDto,
    pub goals: Vec<GoalEventDto>,
    pub cards: Vec<CardEventDto>,
    pub formations: Vec<FormationDto>,
    pub home_squad: Vec<SquadPlayerDto>,
    pub away_squad: Vec<SquadPlayerDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FormationDto {
    pub team_id: i32,
    pub formation_image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddSubstitutionDto {
    pub match_id: i32,
    pub player_in_id: i32,
    pub player_out_id: i32,
    pub minute: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SubstitutionDto {
    pub success: bool,
    pub substitution_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateScoreDto {
    pub match_id: i32,
    pub scoring_team_id: i32,
    pub scorer_player_id: i32,
    pub assist_player_id: Option<i32>,
    pub minute: i32,
    #[serde(default)]
    pub is_penalty: bool,
    #[serde(default)]
    pub is_own_goal: bool,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScoreUpdatedDto {
    pub success: bool,
    pub match_id: i32,
    pub goal_id: i32,
}
