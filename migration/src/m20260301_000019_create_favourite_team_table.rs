use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000007_create_team_table::Team;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavouriteTeam::Table)
                    .if_not_exists()
                    .col(pk_auto(FavouriteTeam::Id))
                    .col(integer(FavouriteTeam::TeamId))
                    .col(string(FavouriteTeam::UserToken))
                    .col(string(FavouriteTeam::MacId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favourite_team_team_id")
                            .from(FavouriteTeam::Table, FavouriteTeam::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_favourite_team_team_mac")
                    .table(FavouriteTeam::Table)
                    .col(FavouriteTeam::TeamId)
                    .col(FavouriteTeam::MacId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FavouriteTeam::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FavouriteTeam {
    Table,
    Id,
    TeamId,
    UserToken,
    MacId,
}
