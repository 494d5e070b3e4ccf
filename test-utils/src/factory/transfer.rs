//! Transfer request factory.

use chrono::Utc;
use entity::player_transfer_request::TransferStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a transfer request with the given status, dated now.
pub async fn create_transfer_request(
    db: &DatabaseConnection,
    player_user_id: &str,
    requested_captain_user_id: &str,
    status: TransferStatus,
) -> Result<entity::player_transfer_request::Model, DbErr> {
    entity::player_transfer_request::ActiveModel {
        id: ActiveValue::NotSet,
        player_user_id: ActiveValue::Set(player_user_id.to_string()),
        requested_captain_user_id: ActiveValue::Set(requested_captain_user_id.to_string()),
        approval_captain_user_id: ActiveValue::Set(None),
        status: ActiveValue::Set(status),
        request_date: ActiveValue::Set(Utc::now()),
        approval_date: ActiveValue::Set(None),
        rejection_date: ActiveValue::Set(None),
    }
    .insert(db)
    .await
}
