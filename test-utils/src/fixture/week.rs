//! Week fixtures.

use chrono::NaiveDate;
use entity::week;

/// Default week number.
pub const DEFAULT_WEEK_NUMBER: i32 = 1;

/// Default week start, a Monday.
pub fn default_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap_or_default()
}

/// Creates a week entity model spanning 2026-03-02 to 2026-03-08.
pub fn entity() -> week::Model {
    entity_builder().build()
}

/// Creates a week entity builder for customization.
pub fn entity_builder() -> WeekEntityBuilder {
    WeekEntityBuilder::default()
}

/// Builder for customized week entity models.
pub struct WeekEntityBuilder {
    model: week::Model,
}

impl Default for WeekEntityBuilder {
    fn default() -> Self {
        let start = default_start();
        Self {
            model: week::Model {
                id: 1,
                league_id: 1,
                season_id: 1,
                week_number: DEFAULT_WEEK_NUMBER,
                week_name: None,
                start_date: start,
                end_date: start + chrono::Duration::days(6),
            },
        }
    }
}

impl WeekEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.model.id = id;
        self
    }

    pub fn league_id(mut self, league_id: i32) -> Self {
        self.model.league_id = league_id;
        self
    }

    pub fn season_id(mut self, season_id: i32) -> Self {
        self.model.season_id = season_id;
        self
    }

    pub fn week_number(mut self, week_number: i32) -> Self {
        self.model.week_number = week_number;
        self
    }

    pub fn week_name(mut self, week_name: Option<String>) -> Self {
        self.model.week_name = week_name;
        self
    }

    /// Sets the inclusive date span of the week.
    pub fn span(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.model.start_date = start;
        self.model.end_date = end;
        self
    }

    pub fn build(self) -> week::Model {
        self.model
    }
}
