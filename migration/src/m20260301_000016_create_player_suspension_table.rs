use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000005_create_week_table::Week, m20260301_000010_create_player_table::Player,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlayerSuspension::Table)
                    .if_not_exists()
                    .col(pk_auto(PlayerSuspension::Id))
                    .col(integer(PlayerSuspension::PlayerId))
                    .col(integer(PlayerSuspension::WeekId))
                    .col(string(PlayerSuspension::SuspensionType))
                    .col(integer(PlayerSuspension::GamesSuspended).default(1))
                    .col(text_null(PlayerSuspension::Notes))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_suspension_player_id")
                            .from(PlayerSuspension::Table, PlayerSuspension::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_suspension_week_id")
                            .from(PlayerSuspension::Table, PlayerSuspension::WeekId)
                            .to(Week::Table, Week::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlayerSuspension::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlayerSuspension {
    Table,
    Id,
    PlayerId,
    WeekId,
    SuspensionType,
    GamesSuspended,
    Notes,
}
