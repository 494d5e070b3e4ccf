//! City factory for creating test city entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test cities.
pub struct CityFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::city::Model,
}

impl<'a> CityFactory<'a> {
    /// Creates a new CityFactory with a unique name.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let mut entity = crate::fixture::city::entity();
        entity.name = format!("City {}", next_id());

        Self { db, entity }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn order_no(mut self, order_no: i32) -> Self {
        self.entity.order_no = order_no;
        self
    }

    /// Builds and inserts the city entity into the database.
    pub async fn build(self) -> Result<entity::city::Model, DbErr> {
        entity::city::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
            order_no: ActiveValue::Set(self.entity.order_no),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a city with default values.
pub async fn create_city(db: &DatabaseConnection) -> Result<entity::city::Model, DbErr> {
    CityFactory::new(db).build().await
}

/// Marks a city as transfer-banned (or not).
pub async fn create_city_restriction(
    db: &DatabaseConnection,
    city_id: i32,
    is_transfer_banned: bool,
) -> Result<entity::city_restriction::Model, DbErr> {
    entity::city_restriction::ActiveModel {
        id: ActiveValue::NotSet,
        city_id: ActiveValue::Set(city_id),
        is_transfer_banned: ActiveValue::Set(is_transfer_banned),
    }
    .insert(db)
    .await
}
