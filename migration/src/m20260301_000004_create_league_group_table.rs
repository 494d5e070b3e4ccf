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
                    .table(LeagueGroup::Table)
                    .if_not_exists()
                    .col(pk_auto(LeagueGroup::Id))
                    .col(integer(LeagueGroup::LeagueId))
                    .col(integer(LeagueGroup::SeasonId))
                    .col(string(LeagueGroup::Name))
                    .col(string_null(LeagueGroup::Description))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_league_group_league_id")
                            .from(LeagueGroup::Table, LeagueGroup::LeagueId)
                            .to(League::Table, League::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_league_group_season_id")
                            .from(LeagueGroup::Table, LeagueGroup::SeasonId)
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
            .drop_table(Table::drop().table(LeagueGroup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LeagueGroup {
    Table,
    Id,
    LeagueId,
    SeasonId,
    Name,
    Description,
}
