//! League factory for creating test league entities.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test leagues.
///
/// ```rust,ignore
/// let league = LeagueFactory::new(&db, city.id)
///     .name("Premier")
///     .start_date(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap())
///     .build()
///     .await?;
/// ```
pub struct LeagueFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::league::Model,
}

impl<'a> LeagueFactory<'a> {
    /// Creates a new LeagueFactory for the given city.
    ///
    /// Defaults: unique name, no logo, start date 2026-01-01, no end date.
    pub fn new(db: &'a DatabaseConnection, city_id: i32) -> Self {
        let entity = entity::league::Model {
            id: 0,
            city_id,
            name: format!("League {}", next_id()),
            logo_path: None,
            league_type: None,
            start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap_or_default(),
            end_date: None,
            team_squad_count: 11,
        };

        Self { db, entity }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn logo_path(mut self, logo_path: Option<String>) -> Self {
        self.entity.logo_path = logo_path;
        self
    }

    pub fn start_date(mut self, start_date: NaiveDate) -> Self {
        self.entity.start_date = start_date;
        self
    }

    /// Builds and inserts the league entity into the database.
    pub async fn build(self) -> Result<entity::league::Model, DbErr> {
        entity::league::ActiveModel {
            id: ActiveValue::NotSet,
            city_id: ActiveValue::Set(self.entity.city_id),
            name: ActiveValue::Set(self.entity.name),
            logo_path: ActiveValue::Set(self.entity.logo_path),
            league_type: ActiveValue::Set(self.entity.league_type),
            start_date: ActiveValue::Set(self.entity.start_date),
            end_date: ActiveValue::Set(self.entity.end_date),
            team_squad_count: ActiveValue::Set(self.entity.team_squad_count),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a league with default values in the given city.
pub async fn create_league(
    db: &DatabaseConnection,
    city_id: i32,
) -> Result<entity::league::Model, DbErr> {
    LeagueFactory::new(db, city_id).build().await
}
