//! Match fixtures for creating in-memory test data.
//!
//! The table is called `fixture` because `match` is reserved in Rust.

use chrono::{DateTime, TimeZone, Utc};
use entity::fixture::{self, MatchStatus};

/// Default kick-off used by fixtures.
pub fn default_match_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 4, 19, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Creates an unplayed match between teams 1 and 2.
///
/// # Default Values
/// - id: `1`, league_id: `1`, week_id: `1`, group_id: `None`
/// - home_team_id: `1`, away_team_id: `2`
/// - match_date: 2026-03-04 19:00 UTC
/// - scores: `None`, is_played: `false`, status: `Scheduled`
pub fn entity() -> fixture::Model {
    entity_builder().build()
}

/// Creates a match entity builder for customization.
pub fn entity_builder() -> FixtureEntityBuilder {
    FixtureEntityBuilder::default()
}

/// Builder for customized match entity models.
pub struct FixtureEntityBuilder {
    model: fixture::Model,
}

impl Default for FixtureEntityBuilder {
    fn default() -> Self {
        Self {
            model: fixture::Model {
                id: 1,
                league_id: 1,
                week_id: 1,
                group_id: None,
                home_team_id: 1,
                away_team_id: 2,
                match_date: default_match_date(),
                home_score: None,
                away_score: None,
                is_played: false,
                status: MatchStatus::Scheduled,
                match_url: None,
                man_of_the_match_id: None,
            },
        }
    }
}

impl FixtureEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.model.id = id;
        self
    }

    pub fn league_id(mut self, league_id: i32) -> Self {
        self.model.league_id = league_id;
        self
    }

    pub fn week_id(mut self, week_id: i32) -> Self {
        self.model.week_id = week_id;
        self
    }

    pub fn group_id(mut self, group_id: Option<i32>) -> Self {
        self.model.group_id = group_id;
        self
    }

    /// Sets the home and away team ids.
    pub fn teams(mut self, home: i32, away: i32) -> Self {
        self.model.home_team_id = home;
        self.model.away_team_id = away;
        self
    }

    pub fn match_date(mut self, match_date: DateTime<Utc>) -> Self {
        self.model.match_date = match_date;
        self
    }

    /// Records a final score and marks the match as played and finished.
    pub fn score(mut self, home: i32, away: i32) -> Self {
        self.model.home_score = Some(home);
        self.model.away_score = Some(away);
        self.model.is_played = true;
        self.model.status = MatchStatus::Finished;
        self
    }

    pub fn man_of_the_match(mut self, player_id: Option<i32>) -> Self {
        self.model.man_of_the_match_id = player_id;
        self
    }

    pub fn match_url(mut self, match_url: Option<String>) -> Self {
        self.model.match_url = match_url;
        self
    }

    pub fn build(self) -> fixture::Model {
        self.model
    }
}
