use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::collections::HashMap;

pub struct WeekRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WeekRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::week::Model>, DbErr> {
        entity::prelude::Week::find_by_id(id).one(self.db).await
    }

    /// Gets all weeks of a league ordered by week number.
    pub async fn get_by_league(&self, league_id: i32) -> Result<Vec<entity::week::Model>, DbErr> {
        entity::prelude::Week::find()
            .filter(entity::week::Column::LeagueId.eq(league_id))
            .order_by_asc(entity::week::Column::WeekNumber)
            .order_by_asc(entity::week::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the weeks of several leagues ordered by week number.
    pub async fn get_by_leagues(
        &self,
        league_ids: impl IntoIterator<Item = i32>,
    ) -> Result<Vec<entity::week::Model>, DbErr> {
        let league_ids: Vec<i32> = league_ids.into_iter().collect();
        if league_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Week::find()
            .filter(entity::week::Column::LeagueId.is_in(league_ids))
            .order_by_asc(entity::week::Column::WeekNumber)
            .order_by_asc(entity::week::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the weeks of one league season ordered by start date.
    pub async fn get_by_league_season(
        &self,
        league_id: i32,
        season_id: i32,
    ) -> Result<Vec<entity::week::Model>, DbErr> {
        entity::prelude::Week::find()
            .filter(entity::week::Column::LeagueId.eq(league_id))
            .filter(entity::week::Column::SeasonId.eq(season_id))
            .order_by_asc(entity::week::Column::StartDate)
            .order_by_asc(entity::week::Column::WeekNumber)
            .all(self.db)
            .await
    }

    pub async fn get_by_ids(
        &self,
        ids: impl IntoIterator<Item = i32>,
    ) -> Result<HashMap<i32, entity::week::Model>, DbErr> {
        let ids: Vec<i32> = ids.into_iter().collect();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        Ok(entity::prelude::Week::find()
            .filter(entity::week::Column::Id.is_in(ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|w| (w.id, w))
            .collect())
    }

    /// Gets the week with the highest id across the given leagues.
    pub async fn latest_in_leagues(
        &self,
        league_ids: impl IntoIterator<Item = i32>,
    ) -> Result<Option<entity::week::Model>, DbErr> {
        let league_ids: Vec<i32> = league_ids.into_iter().collect();
        if league_ids.is_empty() {
            return Ok(None);
        }

        entity::prelude::Week::find()
            .filter(entity::week::Column::LeagueId.is_in(league_ids))
            .order_by_desc(entity::week::Column::Id)
            .one(self.db)
            .await
    }
}
