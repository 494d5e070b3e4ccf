//! Player factory for creating test player entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test players with customizable fields.
///
/// Defaults are sourced from `fixture::player::entity()` with a unique last
/// name so that name ordering in tests is deterministic when set explicitly.
pub struct PlayerFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::player::Model,
}

impl<'a> PlayerFactory<'a> {
    /// Creates a new PlayerFactory, optionally attached to a team.
    pub fn new(db: &'a DatabaseConnection, team_id: Option<i32>) -> Self {
        let entity = fixture::player::entity_builder()
            .team_id(team_id)
            .name("Test", format!("Player {}", next_id()))
            .build();

        Self { db, entity }
    }

    pub fn name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.entity.first_name = first.into();
        self.entity.last_name = last.into();
        self
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.entity.user_id = Some(user_id.into());
        self
    }

    pub fn number(mut self, number: i32) -> Self {
        self.entity.number = Some(number);
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.entity.icon = Some(icon.into());
        self
    }

    pub fn date_of_birth(mut self, date_of_birth: NaiveDate) -> Self {
        self.entity.date_of_birth = Some(date_of_birth);
        self
    }

    pub fn player_value(mut self, value: f64) -> Self {
        self.entity.player_value = Some(value);
        self
    }

    pub fn is_archived(mut self, is_archived: bool) -> Self {
        self.entity.is_archived = is_archived;
        self
    }

    /// Builds and inserts the player entity into the database.
    pub async fn build(self) -> Result<entity::player::Model, DbErr> {
        let e = self.entity;
        entity::player::ActiveModel {
            id: ActiveValue::NotSet,
            team_id: ActiveValue::Set(e.team_id),
            user_id: ActiveValue::Set(e.user_id),
            first_name: ActiveValue::Set(e.first_name),
            last_name: ActiveValue::Set(e.last_name),
            position: ActiveValue::Set(e.position),
            number: ActiveValue::Set(e.number),
            icon: ActiveValue::Set(e.icon),
            date_of_birth: ActiveValue::Set(e.date_of_birth),
            nationality: ActiveValue::Set(e.nationality),
            height: ActiveValue::Set(e.height),
            weight: ActiveValue::Set(e.weight),
            preferred_foot: ActiveValue::Set(e.preferred_foot),
            player_type: ActiveValue::Set(e.player_type),
            player_value: ActiveValue::Set(e.player_value),
            licensed: ActiveValue::Set(e.licensed),
            is_archived: ActiveValue::Set(e.is_archived),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a player with default values on the given team.
pub async fn create_player(
    db: &DatabaseConnection,
    team_id: i32,
) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db, Some(team_id)).build().await
}
