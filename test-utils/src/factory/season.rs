//! Season and group factories.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test seasons.
pub struct SeasonFactory<'a> {
    db: &'a DatabaseConnection,
    league_id: i32,
    name: String,
    is_active: bool,
}

impl<'a> SeasonFactory<'a> {
    /// Creates a new active season factory with a unique name.
    pub fn new(db: &'a DatabaseConnection, league_id: i32) -> Self {
        Self {
            db,
            league_id,
            name: format!("Season {}", next_id()),
            is_active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub async fn build(self) -> Result<entity::season::Model, DbErr> {
        entity::season::ActiveModel {
            id: ActiveValue::NotSet,
            league_id: ActiveValue::Set(self.league_id),
            name: ActiveValue::Set(self.name),
            is_active: ActiveValue::Set(self.is_active),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active season with a unique name.
pub async fn create_season(
    db: &DatabaseConnection,
    league_id: i32,
) -> Result<entity::season::Model, DbErr> {
    SeasonFactory::new(db, league_id).build().await
}

/// Creates a league group with the given name.
pub async fn create_group(
    db: &DatabaseConnection,
    league_id: i32,
    season_id: i32,
    name: impl Into<String>,
) -> Result<entity::league_group::Model, DbErr> {
    entity::league_group::ActiveModel {
        id: ActiveValue::NotSet,
        league_id: ActiveValue::Set(league_id),
        season_id: ActiveValue::Set(season_id),
        name: ActiveValue::Set(name.into()),
        description: ActiveValue::Set(None),
    }
    .insert(db)
    .await
}
