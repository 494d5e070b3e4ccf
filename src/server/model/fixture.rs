//! Domain models for matches.

use chrono::NaiveDate;
use entity::fixture::MatchStatus;
use std::collections::{BTreeMap, HashMap};

use crate::{
    model::fixture::{MatchDayDto, MatchSummaryDto, TeamBriefDto},
    server::util::time::day_label,
};

/// Outcome of a played match from one team's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    pub fn letter(self) -> &'static str {
        match self {
            Outcome::Win => "W",
            Outcome::Draw => "D",
            Outcome::Loss => "L",
        }
    }
}

pub fn status_label(status: &MatchStatus) -> &'static str {
    match status {
        MatchStatus::Scheduled => "scheduled",
        MatchStatus::Started => "started",
        MatchStatus::Finished => "finished",
        MatchStatus::Postponed => "postponed",
        MatchStatus::Cancelled => "cancelled",
    }
}

/// A match together with both teams.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRow {
    pub fixture: entity::fixture::Model,
    pub home: Option<entity::team::Model>,
    pub away: Option<entity::team::Model>,
}

impl MatchRow {
    /// Joins a match with its teams from a preloaded team map.
    pub fn from_parts(
        fixture: entity::fixture::Model,
        teams: &HashMap<i32, entity::team::Model>,
    ) -> Self {
        let home = teams.get(&fixture.home_team_id).cloned();
        let away = teams.get(&fixture.away_team_id).cloned();
        Self { fixture, home, away }
    }

    pub fn date(&self) -> NaiveDate {
        self.fixture.match_date.date_naive()
    }

    pub fn involves(&self, team_id: i32) -> bool {
        self.fixture.home_team_id == team_id || self.fixture.away_team_id == team_id
    }

    /// Outcome for `team_id`, or `None` when unplayed or the team did not take part.
    pub fn outcome_for(&self, team_id: i32) -> Option<Outcome> {
        if !self.fixture.is_played || !self.involves(team_id) {
            return None;
        }

        let home = self.fixture.home_score.unwrap_or(0);
        let away = self.fixture.away_score.unwrap_or(0);
        let (own, other) = if self.fixture.home_team_id == team_id {
            (home, away)
        } else {
            (away, home)
        };

        Some(match own.cmp(&other) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Equal => Outcome::Draw,
            std::cmp::Ordering::Less => Outcome::Loss,
        })
    }

    pub fn into_dto(self) -> MatchSummaryDto {
        self.into_dto_for(None)
    }

    /// Converts to a list row, filling `result` from `team_id`'s side when given.
    pub fn into_dto_for(self, team_id: Option<i32>) -> MatchSummaryDto {
        let result = team_id
            .and_then(|id| self.outcome_for(id))
            .map(|o| o.letter().to_string());
        let f = self.fixture;

        MatchSummaryDto {
            id: f.id,
            league_id: f.league_id,
            week_id: f.week_id,
            group_id: f.group_id,
            home_team_id: f.home_team_id,
            home_team_name: self.home.as_ref().map(|t| t.name.clone()).unwrap_or_default(),
            home_team_logo: self.home.and_then(|t| t.logo_url),
            away_team_id: f.away_team_id,
            away_team_name: self.away.as_ref().map(|t| t.name.clone()).unwrap_or_default(),
            away_team_logo: self.away.and_then(|t| t.logo_url),
            match_date: f.match_date,
            home_score: f.home_score,
            away_score: f.away_score,
            is_played: f.is_played,
            status: status_label(&f.status).to_string(),
            match_url: f.match_url,
            result,
        }
    }
}

/// Groups matches by calendar day, ascending. Matches keep their order inside a day.
pub fn group_by_day(rows: Vec<MatchRow>) -> Vec<(NaiveDate, Vec<MatchRow>)> {
    let mut days: BTreeMap<NaiveDate, Vec<MatchRow>> = BTreeMap::new();
    for row in rows {
        days.entry(row.date()).or_default().push(row);
    }
    days.into_iter().collect()
}

pub fn into_day_dtos(rows: Vec<MatchRow>) -> Vec<MatchDayDto> {
    group_by_day(rows)
        .into_iter()
        .map(|(day, rows)| MatchDayDto {
            date: day_label(day),
            full_date: day,
            matches: rows.into_iter().map(MatchRow::into_dto).collect(),
        })
        .collect()
}

/// Parameters for recording a goal from the announcer screen.
#[derive(Debug, Clone)]
pub struct RecordGoalParams {
    pub match_id: i32,
    pub team_id: i32,
    pub player_id: i32,
    pub assist_player_id: Option<i32>,
    pub minute: i32,
    pub is_penalty: bool,
    pub is_own_goal: bool,
    /// Overwrites the stored home score when given.
    pub home_score: Option<i32>,
    /// Overwrites the stored away score when given.
    pub away_score: Option<i32>,
}

pub fn team_brief(team: &entity::team::Model) -> TeamBriefDto {
    TeamBriefDto {
        id: team.id,
        name: team.name.clone(),
        logo_url: team.logo_url.clone(),
        manager: team.manager.clone(),
    }
}
