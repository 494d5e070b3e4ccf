//! Team factory for creating test team entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test teams with customizable fields.
///
/// ```rust,ignore
/// let team = TeamFactory::new(&db, city.id)
///     .name("Rovers")
///     .is_free(true)
///     .build()
///     .await?;
/// ```
pub struct TeamFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::team::Model,
}

impl<'a> TeamFactory<'a> {
    /// Creates a new TeamFactory with a unique name in the given city.
    pub fn new(db: &'a DatabaseConnection, city_id: i32) -> Self {
        let entity = fixture::team::entity_builder()
            .city_id(city_id)
            .name(format!("Team {}", next_id()))
            .build();

        Self { db, entity }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn logo_url(mut self, logo_url: impl Into<String>) -> Self {
        self.entity.logo_url = Some(logo_url.into());
        self
    }

    pub fn manager(mut self, manager: impl Into<String>) -> Self {
        self.entity.manager = Some(manager.into());
        self
    }

    pub fn is_free(mut self, is_free: bool) -> Self {
        self.entity.is_free = is_free;
        self
    }

    /// Builds and inserts the team entity into the database.
    pub async fn build(self) -> Result<entity::team::Model, DbErr> {
        entity::team::ActiveModel {
            id: ActiveValue::NotSet,
            city_id: ActiveValue::Set(self.entity.city_id),
            name: ActiveValue::Set(self.entity.name),
            logo_url: ActiveValue::Set(self.entity.logo_url),
            manager: ActiveValue::Set(self.entity.manager),
            is_free: ActiveValue::Set(self.entity.is_free),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a team with default values in the given city.
pub async fn create_team(
    db: &DatabaseConnection,
    city_id: i32,
) -> Result<entity::team::Model, DbErr> {
    TeamFactory::new(db, city_id).build().await
}
