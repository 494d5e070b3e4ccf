use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000002_create_league_table::League, m20260301_000003_create_season_table::Season,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Week::Table)
                    .if_not_exists()
                    .col(pk_auto(Week::Id))
                    .col(integer(Week::LeagueId))
                    .col(integer(Week::SeasonId))
                    .col(integer(Week::WeekNumber))
                    .col(string_null(Week::WeekName))
                    .col(date(Week::StartDate))
                    .col(date(Week::EndDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_week_league_id")
                            .from(Week::Table, Week::LeagueId)
                            .to(League::Table, League::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_week_season_id")
                            .from(Week::Table, Week::SeasonId)
                            .to(Season::Table, Season::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Week::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Week {
    Table,
    Id,
    LeagueId,
    SeasonId,
    WeekNumber,
    WeekName,
    StartDate,
    EndDate,
}
