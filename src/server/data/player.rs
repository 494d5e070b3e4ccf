use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;

use crate::server::util::text::contains_folded;

pub struct PlayerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::player::Model>, DbErr> {
        entity::prelude::Player::find_by_id(id).one(self.db).await
    }

    pub async fn get_by_ids(
        &self,
        ids: impl IntoIterator<Item = i32>,
    ) -> Result<HashMap<i32, entity::player::Model>, DbErr> {
        let ids: Vec<i32> = ids.into_iter().collect();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        Ok(entity::prelude::Player::find()
            .filter(entity::player::Column::Id.is_in(ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect())
    }

    /// Gets the non-archived players of a team ordered by shirt number.
    pub async fn get_active_by_team(
        &self,
        team_id: i32,
    ) -> Result<Vec<entity::player::Model>, DbErr> {
        self.get_active_by_teams([team_id]).await
    }

    /// Gets the non-archived players of several teams ordered by shirt number.
    pub async fn get_active_by_teams(
        &self,
        team_ids: impl IntoIterator<Item = i32>,
    ) -> Result<Vec<entity::player::Model>, DbErr> {
        let team_ids: Vec<i32> = team_ids.into_iter().collect();
        if team_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Player::find()
            .filter(entity::player::Column::TeamId.is_in(team_ids))
            .filter(entity::player::Column::IsArchived.eq(false))
            .order_by_asc(entity::player::Column::Number)
            .order_by_asc(entity::player::Column::LastName)
            .all(self.db)
            .await
    }

    /// Gets the player row linked to an app user, if any.
    pub async fn find_by_user_id(
        &self,
        user_id: &str,
    ) -> Result<Option<entity::player::Model>, DbErr> {
        entity::prelude::Player::find()
            .filter(entity::player::Column::UserId.eq(user_id))
            .order_by_asc(entity::player::Column::Id)
            .one(self.db)
            .await
    }

    /// Loads player rows keyed by their linked user id.
    pub async fn get_by_user_ids(
        &self,
        user_ids: impl IntoIterator<Item = String>,
    ) -> Result<HashMap<String, entity::player::Model>, DbErr> {
        let user_ids: Vec<String> = user_ids.into_iter().collect();
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let players = entity::prelude::Player::find()
            .filter(entity::player::Column::UserId.is_in(user_ids))
            .order_by_desc(entity::player::Column::Id)
            .all(self.db)
            .await?;

        // Lowest id wins when a user is linked twice.
        Ok(players
            .into_iter()
            .filter_map(|p| p.user_id.clone().map(|uid| (uid, p)))
            .collect())
    }

    /// Gets the most valuable non-archived players of the given teams.
    pub async fn top_valuable(
        &self,
        team_ids: impl IntoIterator<Item = i32>,
        top: u64,
    ) -> Result<Vec<entity::player::Model>, DbErr> {
        let team_ids: Vec<i32> = team_ids.into_iter().collect();
        if team_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Player::find()
            .filter(entity::player::Column::TeamId.is_in(team_ids))
            .filter(entity::player::Column::IsArchived.eq(false))
            .filter(entity::player::Column::PlayerValue.is_not_null())
            .order_by_desc(entity::player::Column::PlayerValue)
            .order_by_asc(entity::player::Column::Id)
            .limit(top)
            .all(self.db)
            .await
    }

    /// Case-insensitive substring match on "first last".
    ///
    /// Folding happens in Rust since SQLite's `LOWER()` only folds ASCII.
    pub async fn search(&self, query: &str) -> Result<Vec<entity::player::Model>, DbErr> {
        let players = entity::prelude::Player::find()
            .order_by_asc(entity::player::Column::FirstName)
            .order_by_asc(entity::player::Column::LastName)
            .all(self.db)
            .await?;

        Ok(players
            .into_iter()
            .filter(|p| contains_folded(&p.full_name(), query))
            .collect())
    }
}
