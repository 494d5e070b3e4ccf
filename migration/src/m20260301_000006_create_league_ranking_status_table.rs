use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000002_create_league_table::League;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LeagueRankingStatus::Table)
                    .if_not_exists()
                    .col(pk_auto(LeagueRankingStatus::Id))
                    .col(integer(LeagueRankingStatus::LeagueId))
                    .col(integer(LeagueRankingStatus::OrderNo))
                    .col(string(LeagueRankingStatus::ColorCode))
                    .col(string(LeagueRankingStatus::Description))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_league_ranking_status_league_id")
                            .from(LeagueRankingStatus::Table, LeagueRankingStatus::LeagueId)
                            .to(League::Table, League::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LeagueRankingStatus::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LeagueRankingStatus {
    Table,
    Id,
    LeagueId,
    OrderNo,
    ColorCode,
    Description,
}
