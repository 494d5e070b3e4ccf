use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::fixture::{MatchDayDto, MatchSummaryDto};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GroupMatchesDto {
    pub group_id: i32,
    pub group_name: String,
    pub matches: Vec<MatchSummaryDto>,
}

/// A week with its matches split by group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WeekMatchesDto {
    pub week_id: i32,
    pub week_number: i32,
    pub week_name: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub season_id: i32,
    pub season_name: String,
    pub league_name: String,
    pub grouped_matches: Vec<GroupMatchesDto>,
    pub ungrouped_matches: Vec<MatchSummaryDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CityLeagueDto {
    pub league_id: i32,
    pub league_name: String,
    pub logo_path: Option<String>,
    pub current_week: WeekMatchesDto,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ActualLeagueMatchesDto {
    pub league_id: i32,
    pub league_name: String,
    pub logo_path: Option<String>,
    pub week_id: i32,
    pub week_number: i32,
    pub week_name: Option<String>,
    pub days: Vec<MatchDayDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SeasonDto {
    pub season_id: i32,
    pub name: String,
    pub is_active: bool,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GroupDto {
    pub group_id: i32,
    pub name: String,
    pub description: Option<String>,
}

/// Matches of one day inside a league week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WeekDayDto {
    /// `dd.MM`
    pub date: String,
    pub full_date: NaiveDate,
    pub grouped_matches: Vec<GroupMatchesDto>,
    pub ungrouped_matches: Vec<MatchSummaryDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LeagueWeekDto {
    pub week_id: i32,
    pub week_number: i32,
    pub week_name: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_current_week: bool,
    pub days: Vec<WeekDayDto>,
}

/// The week of a league that matters to one team right now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TeamLeagueWeekDto {
    pub league_id: i32,
    pub league_name: String,
    pub logo_path: Option<String>,
    pub week_id: i32,
    pub week_number: i32,
    pub week_name: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_current_week: bool,
    pub is_next_week: bool,
    pub matches: Vec<MatchSummaryDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SeasonBriefDto {
    pub season_id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TeamLeagueDto {
    pub league_id: i32,
    pub league_name: String,
    pub logo_path: Option<String>,
    pub seasons: Vec<SeasonBriefDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TeamLeaguesDto {
    pub team_id: i32,
    pub team_name: String,
    pub logo_url: Option<String>,
    pub leagues: Vec<TeamLeagueDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LeagueDto {
    pub id: i32,
    pub name: String,
    pub logo_path: Option<String>,
    pub league_type: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WeekDto {
    pub week_id: i32,
    pub season_id: i32,
    pub week_number: i32,
    pub week_name: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Matches of one league week, used by the website.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WeekBlockDto {
    pub league_id: i32,
    pub league_name: String,
    pub week_id: Option<i32>,
    pub week_name: Option<String>,
    pub matches: Vec<MatchSummaryDto>,
}
