use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_city_table::City;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(League::Table)
                    .if_not_exists()
                    .col(pk_auto(League::Id))
                    .col(integer(League::CityId))
                    .col(string(League::Name))
                    .col(string_null(League::LogoPath))
                    .col(string_null(League::LeagueType))
                    .col(date(League::StartDate))
                    .col(date_null(League::EndDate))
                    .col(integer(League::TeamSquadCount).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_league_city_id")
                            .from(League::Table, League::CityId)
                            .to(City::Table, City::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(League::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum League {
    Table,
    Id,
    CityId,
    Name,
    LogoPath,
    LeagueType,
    StartDate,
    EndDate,
    TeamSquadCount,
}
