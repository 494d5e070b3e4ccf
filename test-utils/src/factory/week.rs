//! Week factory for creating test week entities.

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::fixture;

/// Factory for creating test weeks.
///
/// Defaults come from `fixture::week::entity()`: week 1 spanning
/// 2026-03-02..=2026-03-08.
pub struct WeekFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::week::Model,
}

impl<'a> WeekFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, league_id: i32, season_id: i32) -> Self {
        let entity = fixture::week::entity_builder()
            .league_id(league_id)
            .season_id(season_id)
            .build();

        Self { db, entity }
    }

    pub fn week_number(mut self, week_number: i32) -> Self {
        self.entity.week_number = week_number;
        self
    }

    pub fn week_name(mut self, week_name: impl Into<String>) -> Self {
        self.entity.week_name = Some(week_name.into());
        self
    }

    /// Sets the inclusive date span of the week.
    pub fn span(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.entity.start_date = start;
        self.entity.end_date = end;
        self
    }

    pub async fn build(self) -> Result<entity::week::Model, DbErr> {
        entity::week::ActiveModel {
            id: ActiveValue::NotSet,
            league_id: ActiveValue::Set(self.entity.league_id),
            season_id: ActiveValue::Set(self.entity.season_id),
            week_number: ActiveValue::Set(self.entity.week_number),
            week_name: ActiveValue::Set(self.entity.week_name),
            start_date: ActiveValue::Set(self.entity.start_date),
            end_date: ActiveValue::Set(self.entity.end_date),
        }
        .insert(self.db)
        .await
    }
}

/// Creates week 1 of the season with fixture dates.
pub async fn create_week(
    db: &DatabaseConnection,
    league_id: i32,
    season_id: i32,
) -> Result<entity::week::Model, DbErr> {
    WeekFactory::new(db, league_id, season_id).build().await
}
