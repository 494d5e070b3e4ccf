use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000009_create_app_user_table::AppUser;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlayerTransferRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(PlayerTransferRequest::Id))
                    .col(string(PlayerTransferRequest::PlayerUserId))
                    .col(string(PlayerTransferRequest::RequestedCaptainUserId))
                    .col(string_null(PlayerTransferRequest::ApprovalCaptainUserId))
                    .col(string_len(PlayerTransferRequest::Status, 16).default("pending"))
                    .col(timestamp_with_time_zone(PlayerTransferRequest::RequestDate))
                    .col(timestamp_with_time_zone_null(PlayerTransferRequest::ApprovalDate))
                    .col(timestamp_with_time_zone_null(PlayerTransferRequest::RejectionDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_transfer_player_user_id")
                            .from(PlayerTransferRequest::Table, PlayerTransferRequest::PlayerUserId)
                            .to(AppUser::Table, AppUser::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_transfer_requested_captain_user_id")
                            .from(
                                PlayerTransferRequest::Table,
                                PlayerTransferRequest::RequestedCaptainUserId,
                            )
                            .to(AppUser::Table, AppUser::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_transfer_approval_captain_user_id")
                            .from(
                                PlayerTransferRequest::Table,
                                PlayerTransferRequest::ApprovalCaptainUserId,
                            )
                            .to(AppUser::Table, AppUser::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // At most one pending request per player. Partial indexes are shared
        // SQL between SQLite and Postgres.
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE UNIQUE INDEX IF NOT EXISTS idx_transfer_one_pending_per_player \
                 ON player_transfer_request (player_user_id) WHERE status = 'pending'",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlayerTransferRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlayerTransferRequest {
    Table,
    Id,
    PlayerUserId,
    RequestedCaptainUserId,
    ApprovalCaptainUserId,
    Status,
    RequestDate,
    ApprovalDate,
    RejectionDate,
}
