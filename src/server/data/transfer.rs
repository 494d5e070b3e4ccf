use chrono::Utc;
use entity::player_transfer_request::{self, TransferStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, SqlErr, TransactionTrait,
};

pub struct TransferRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TransferRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a pending request dated now.
    ///
    /// Returns `None` when the player already has a pending request. The check
    /// and the insert share a transaction, and the partial unique index on
    /// pending rows catches a concurrent insert.
    pub async fn create(
        &self,
        player_user_id: &str,
        requested_captain_user_id: &str,
        approval_captain_user_id: &str,
    ) -> Result<Option<player_transfer_request::Model>, DbErr> {
        let txn = self.db.begin().await?;

        if pending_count(&txn, player_user_id).await? > 0 {
            return Ok(None);
        }

        let inserted = player_transfer_request::ActiveModel {
            player_user_id: ActiveValue::Set(player_user_id.to_string()),
            requested_captain_user_id: ActiveValue::Set(requested_captain_user_id.to_string()),
            approval_captain_user_id: ActiveValue::Set(Some(approval_captain_user_id.to_string())),
            status: ActiveValue::Set(TransferStatus::Pending),
            request_date: ActiveValue::Set(Utc::now()),
            approval_date: ActiveValue::Set(None),
            rejection_date: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(&txn)
        .await;

        match inserted {
            Ok(request) => {
                txn.commit().await?;
                Ok(Some(request))
            }
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<player_transfer_request::Model>, DbErr> {
        entity::prelude::PlayerTransferRequest::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Whether the player already has a request waiting for a decision.
    pub async fn has_pending_for_player(&self, player_user_id: &str) -> Result<bool, DbErr> {
        Ok(pending_count(self.db, player_user_id).await? > 0)
    }

    /// Marks a pending request approved and moves the player in one transaction.
    ///
    /// The requested captain becomes the approving captain. `player_move` is
    /// `(player_id, new_team_id)` and is skipped when `None`. Returns `None`
    /// without moving anyone when the request is no longer pending.
    pub async fn approve(
        &self,
        request: &player_transfer_request::Model,
        player_move: Option<(i32, Option<i32>)>,
    ) -> Result<Option<player_transfer_request::Model>, DbErr> {
        let txn = self.db.begin().await?;

        let decided = decide_pending(
            &txn,
            request.id,
            player_transfer_request::ActiveModel {
                status: ActiveValue::Set(TransferStatus::Approved),
                approval_date: ActiveValue::Set(Some(Utc::now())),
                approval_captain_user_id: ActiveValue::Set(Some(
                    request.requested_captain_user_id.clone(),
                )),
                ..Default::default()
            },
        )
        .await?;
        let Some(approved) = decided else {
            return Ok(None);
        };

        if let Some((player_id, team_id)) = player_move {
            entity::player::ActiveModel {
                id: ActiveValue::Unchanged(player_id),
                team_id: ActiveValue::Set(team_id),
                ..Default::default()
            }
            .update(&txn)
            .await?;
        }

        txn.commit().await?;

        Ok(Some(approved))
    }

    /// Marks a pending request rejected. Returns `None` when it is no longer pending.
    pub async fn reject(
        &self,
        request_id: i32,
    ) -> Result<Option<player_transfer_request::Model>, DbErr> {
        decide_pending(
            self.db,
            request_id,
            player_transfer_request::ActiveModel {
                status: ActiveValue::Set(TransferStatus::Rejected),
                rejection_date: ActiveValue::Set(Some(Utc::now())),
                ..Default::default()
            },
        )
        .await
    }

    /// Requests a user is involved in, newest first.
    ///
    /// The user is the player or the requesting captain, or the approving
    /// captain of a request that is still pending.
    pub async fn get_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<player_transfer_request::Model>, DbErr> {
        entity::prelude::PlayerTransferRequest::find()
            .filter(
                Condition::any()
                    .add(player_transfer_request::Column::PlayerUserId.eq(user_id))
                    .add(player_transfer_request::Column::RequestedCaptainUserId.eq(user_id))
                    .add(
                        Condition::all()
                            .add(player_transfer_request::Column::ApprovalCaptainUserId.eq(user_id))
                            .add(player_transfer_request::Column::Status.eq(TransferStatus::Pending)),
                    ),
            )
            .order_by_desc(player_transfer_request::Column::RequestDate)
            .order_by_desc(player_transfer_request::Column::Id)
            .all(self.db)
            .await
    }
}

async fn pending_count<C: ConnectionTrait>(db: &C, player_user_id: &str) -> Result<u64, DbErr> {
    entity::prelude::PlayerTransferRequest::find()
        .filter(player_transfer_request::Column::PlayerUserId.eq(player_user_id))
        .filter(player_transfer_request::Column::Status.eq(TransferStatus::Pending))
        .count(db)
        .await
}

/// Applies `changes` only while the row is still pending, then reads it back.
async fn decide_pending<C: ConnectionTrait>(
    db: &C,
    request_id: i32,
    changes: player_transfer_request::ActiveModel,
) -> Result<Option<player_transfer_request::Model>, DbErr> {
    let result = entity::prelude::PlayerTransferRequest::update_many()
        .set(changes)
        .filter(player_transfer_request::Column::Id.eq(request_id))
        .filter(player_transfer_request::Column::Status.eq(TransferStatus::Pending))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        return Ok(None);
    }

    entity::prelude::PlayerTransferRequest::find_by_id(request_id)
        .one(db)
        .await
}
