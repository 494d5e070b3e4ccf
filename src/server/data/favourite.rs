use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};
use std::collections::HashSet;

/// Favourite teams remembered per device.
pub struct FavouriteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavouriteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_token(
        &self,
        team_id: i32,
        user_token: &str,
    ) -> Result<Option<entity::favourite_team::Model>, DbErr> {
        entity::prelude::FavouriteTeam::find()
            .filter(entity::favourite_team::Column::TeamId.eq(team_id))
            .filter(entity::favourite_team::Column::UserToken.eq(user_token))
            .one(self.db)
            .await
    }

    pub async fn find_by_mac(
        &self,
        team_id: i32,
        mac_id: &str,
    ) -> Result<Option<entity::favourite_team::Model>, DbErr> {
        entity::prelude::FavouriteTeam::find()
            .filter(entity::favourite_team::Column::TeamId.eq(team_id))
            .filter(entity::favourite_team::Column::MacId.eq(mac_id))
            .one(self.db)
            .await
    }

    pub async fn create(
        &self,
        team_id: i32,
        user_token: &str,
        mac_id: &str,
    ) -> Result<entity::favourite_team::Model, DbErr> {
        entity::favourite_team::ActiveModel {
            team_id: ActiveValue::Set(team_id),
            user_token: ActiveValue::Set(user_token.to_string()),
            mac_id: ActiveValue::Set(mac_id.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::FavouriteTeam::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }

    pub async fn is_favourite(&self, team_id: i32, mac_id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::FavouriteTeam::find()
            .filter(entity::favourite_team::Column::TeamId.eq(team_id))
            .filter(entity::favourite_team::Column::MacId.eq(mac_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn team_ids_for_mac(&self, mac_id: &str) -> Result<HashSet<i32>, DbErr> {
        Ok(entity::prelude::FavouriteTeam::find()
            .filter(entity::favourite_team::Column::MacId.eq(mac_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|f| f.team_id)
            .collect())
    }
}
