use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::collections::HashMap;

use crate::server::util::text::contains_folded;

pub struct LeagueRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LeagueRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::league::Model>, DbErr> {
        entity::prelude::League::find_by_id(id).one(self.db).await
    }

    /// Gets the leagues of a city, newest start date first.
    pub async fn get_by_city(&self, city_id: i32) -> Result<Vec<entity::league::Model>, DbErr> {
        entity::prelude::League::find()
            .filter(entity::league::Column::CityId.eq(city_id))
            .order_by_desc(entity::league::Column::StartDate)
            .order_by_desc(entity::league::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_ids(
        &self,
        ids: impl IntoIterator<Item = i32>,
    ) -> Result<HashMap<i32, entity::league::Model>, DbErr> {
        let ids: Vec<i32> = ids.into_iter().collect();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        Ok(entity::prelude::League::find()
            .filter(entity::league::Column::Id.is_in(ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|l| (l.id, l))
            .collect())
    }

    /// Gets the most recently created league of a city (highest id).
    pub async fn latest_for_city(
        &self,
        city_id: i32,
    ) -> Result<Option<entity::league::Model>, DbErr> {
        entity::prelude::League::find()
            .filter(entity::league::Column::CityId.eq(city_id))
            .order_by_desc(entity::league::Column::Id)
            .one(self.db)
            .await
    }

    /// Case-insensitive substring match on the league name.
    pub async fn search(&self, query: &str) -> Result<Vec<entity::league::Model>, DbErr> {
        let rows = entity::prelude::League::find()
            .order_by_asc(entity::league::Column::Name)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter(|r| contains_folded(&r.name, query))
            .collect())
    }
}
