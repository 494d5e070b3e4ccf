use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::collections::HashMap;

/// Seasons and the groups inside them.
pub struct SeasonRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeasonRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::season::Model>, DbErr> {
        entity::prelude::Season::find_by_id(id).one(self.db).await
    }

    pub async fn get_by_league(&self, league_id: i32) -> Result<Vec<entity::season::Model>, DbErr> {
        entity::prelude::Season::find()
            .filter(entity::season::Column::LeagueId.eq(league_id))
            .order_by_asc(entity::season::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_ids(
        &self,
        ids: impl IntoIterator<Item = i32>,
    ) -> Result<HashMap<i32, entity::season::Model>, DbErr> {
        let ids: Vec<i32> = ids.into_iter().collect();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        Ok(entity::prelude::Season::find()
            .filter(entity::season::Column::Id.is_in(ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|s| (s.id, s))
            .collect())
    }

    /// Gets the league's season with the highest id.
    pub async fn latest_for_league(
        &self,
        league_id: i32,
    ) -> Result<Option<entity::season::Model>, DbErr> {
        entity::prelude::Season::find()
            .filter(entity::season::Column::LeagueId.eq(league_id))
            .order_by_desc(entity::season::Column::Id)
            .one(self.db)
            .await
    }

    /// Gets the groups of a league season ordered by name.
    pub async fn get_groups(
        &self,
        league_id: i32,
        season_id: i32,
    ) -> Result<Vec<entity::league_group::Model>, DbErr> {
        entity::prelude::LeagueGroup::find()
            .filter(entity::league_group::Column::LeagueId.eq(league_id))
            .filter(entity::league_group::Column::SeasonId.eq(season_id))
            .order_by_asc(entity::league_group::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn get_groups_by_ids(
        &self,
        ids: impl IntoIterator<Item = i32>,
    ) -> Result<HashMap<i32, entity::league_group::Model>, DbErr> {
        let ids: Vec<i32> = ids.into_iter().collect();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        Ok(entity::prelude::LeagueGroup::find()
            .filter(entity::league_group::Column::Id.is_in(ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|g| (g.id, g))
            .collect())
    }
}
