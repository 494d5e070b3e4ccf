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
                    .table(Team::Table)
                    .if_not_exists()
                    .col(pk_auto(Team::Id))
                    .col(integer(Team::CityId))
                    .col(string(Team::Name))
                    .col(string_null(Team::LogoUrl))
                    .col(string_null(Team::Manager))
                    .col(boolean(Team::IsFree).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_city_id")
                            .from(Team::Table, Team::CityId)
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
            .drop_table(Table::drop().table(Team::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Team {
    Table,
    Id,
    CityId,
    Name,
    LogoUrl,
    Manager,
    IsFree,
}
