use entity::app_user::UserType;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::collections::HashMap;

/// Read access to application users.
///
/// Accounts are managed outside this service; users are only looked up for
/// names, roles and push targets.
pub struct AppUserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AppUserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<entity::app_user::Model>, DbErr> {
        entity::prelude::AppUser::find_by_id(id.to_string())
            .one(self.db)
            .await
    }

    pub async fn get_by_ids(
        &self,
        ids: impl IntoIterator<Item = String>,
    ) -> Result<HashMap<String, entity::app_user::Model>, DbErr> {
        let ids: Vec<String> = ids.into_iter().collect();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        Ok(entity::prelude::AppUser::find()
            .filter(entity::app_user::Column::Id.is_in(ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|u| (u.id.clone(), u))
            .collect())
    }

    /// Finds the captain of a team: a captain-type user linked to one of its players.
    ///
    /// When several qualify, the one linked to the lowest player id is returned.
    pub async fn find_captain_of_team(
        &self,
        team_id: i32,
    ) -> Result<Option<entity::app_user::Model>, DbErr> {
        let user_ids: Vec<String> = entity::prelude::Player::find()
            .filter(entity::player::Column::TeamId.eq(team_id))
            .filter(entity::player::Column::UserId.is_not_null())
            .order_by_asc(entity::player::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .filter_map(|p| p.user_id)
            .collect();

        if user_ids.is_empty() {
            return Ok(None);
        }

        let captains = self.get_by_ids(user_ids.iter().cloned()).await?;

        Ok(user_ids
            .iter()
            .filter_map(|id| captains.get(id))
            .find(|u| u.user_type == UserType::Captain)
            .cloned())
    }
}
