//! App user factory.

use crate::factory::helpers::next_id;
use entity::app_user::UserType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users.
///
/// Ids are unique strings of the form `user-<n>`, and each user gets an
/// `external_id` push target by default.
pub struct AppUserFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::app_user::Model,
}

impl<'a> AppUserFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = entity::app_user::Model {
            id: format!("user-{}", id),
            first_name: "User".to_string(),
            last_name: format!("{}", id),
            user_type: UserType::Public,
            external_id: Some(format!("push-{}", id)),
            city_id: None,
        };

        Self { db, entity }
    }

    pub fn name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.entity.first_name = first.into();
        self.entity.last_name = last.into();
        self
    }

    pub fn user_type(mut self, user_type: UserType) -> Self {
        self.entity.user_type = user_type;
        self
    }

    pub fn external_id(mut self, external_id: Option<String>) -> Self {
        self.entity.external_id = external_id;
        self
    }

    pub async fn build(self) -> Result<entity::app_user::Model, DbErr> {
        entity::app_user::ActiveModel {
            id: ActiveValue::Set(self.entity.id),
            first_name: ActiveValue::Set(self.entity.first_name),
            last_name: ActiveValue::Set(self.entity.last_name),
            user_type: ActiveValue::Set(self.entity.user_type),
            external_id: ActiveValue::Set(self.entity.external_id),
            city_id: ActiveValue::Set(self.entity.city_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user of the given type.
pub async fn create_user(
    db: &DatabaseConnection,
    user_type: UserType,
) -> Result<entity::app_user::Model, DbErr> {
    AppUserFactory::new(db).user_type(user_type).build().await
}
