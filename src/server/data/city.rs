use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct CityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CityRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every city, ordered by `order_no` then name.
    pub async fn get_all(&self) -> Result<Vec<entity::city::Model>, DbErr> {
        entity::prelude::City::find()
            .order_by_asc(entity::city::Column::OrderNo)
            .order_by_asc(entity::city::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::city::Model>, DbErr> {
        entity::prelude::City::find_by_id(id).one(self.db).await
    }

    /// Whether any restriction row bans transfers in the city.
    pub async fn is_transfer_banned(&self, city_id: i32) -> Result<bool, DbErr> {
        let restrictions = entity::prelude::CityRestriction::find()
            .filter(entity::city_restriction::Column::CityId.eq(city_id))
            .all(self.db)
            .await?;

        Ok(restrictions.iter().any(|r| r.is_transfer_banned))
    }
}
