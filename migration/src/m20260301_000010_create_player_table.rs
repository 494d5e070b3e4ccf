use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000007_create_team_table::Team, m20260301_000009_create_app_user_table::AppUser,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(pk_auto(Player::Id))
                    .col(integer_null(Player::TeamId))
                    .col(string_null(Player::UserId))
                    .col(string(Player::FirstName))
                    .col(string(Player::LastName))
                    .col(string_null(Player::Position))
                    .col(integer_null(Player::Number))
                    .col(string_null(Player::Icon))
                    .col(date_null(Player::DateOfBirth))
                    .col(string_null(Player::Nationality))
                    .col(integer_null(Player::Height))
                    .col(integer_null(Player::Weight))
                    .col(string_null(Player::PreferredFoot))
                    .col(string_null(Player::PlayerType))
                    .col(double_null(Player::PlayerValue))
                    .col(boolean(Player::Licensed).default(false))
                    .col(boolean(Player::IsArchived).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_team_id")
                            .from(Player::Table, Player::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_user_id")
                            .from(Player::Table, Player::UserId)
                            .to(AppUser::Table, AppUser::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Player {
    Table,
    Id,
    TeamId,
    UserId,
    FirstName,
    LastName,
    Position,
    Number,
    Icon,
    DateOfBirth,
    Nationality,
    Height,
    Weight,
    PreferredFoot,
    PlayerType,
    PlayerValue,
    Licensed,
    IsArchived,
}
