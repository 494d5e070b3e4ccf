use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::collections::HashMap;

use crate::server::util::text::contains_folded;

pub struct TeamRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::team::Model>, DbErr> {
        entity::prelude::Team::find_by_id(id).one(self.db).await
    }

    /// Loads teams by id into a map; unknown ids are skipped.
    pub async fn get_by_ids(
        &self,
        ids: impl IntoIterator<Item = i32>,
    ) -> Result<HashMap<i32, entity::team::Model>, DbErr> {
        let ids: Vec<i32> = ids.into_iter().collect();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        Ok(entity::prelude::Team::find()
            .filter(entity::team::Column::Id.is_in(ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|t| (t.id, t))
            .collect())
    }

    /// Gets the teams of a city ordered by name.
    pub async fn get_by_city(&self, city_id: i32) -> Result<Vec<entity::team::Model>, DbErr> {
        entity::prelude::Team::find()
            .filter(entity::team::Column::CityId.eq(city_id))
            .order_by_asc(entity::team::Column::Name)
            .all(self.db)
            .await
    }

    /// Case-insensitive substring match on the team name.
    pub async fn search(&self, query: &str) -> Result<Vec<entity::team::Model>, DbErr> {
        let rows = entity::prelude::Team::find()
            .order_by_asc(entity::team::Column::Name)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter(|r| contains_folded(&r.name, query))
            .collect())
    }
}
