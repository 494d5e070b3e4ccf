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
                    .table(AppUser::Table)
                    .if_not_exists()
                    .col(string(AppUser::Id).primary_key())
                    .col(string(AppUser::FirstName))
                    .col(string(AppUser::LastName))
                    .col(string_len(AppUser::UserType, 16).default("public"))
                    .col(string_null(AppUser::ExternalId))
                    .col(integer_null(AppUser::CityId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_app_user_city_id")
                            .from(AppUser::Table, AppUser::CityId)
                            .to(City::Table, City::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AppUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AppUser {
    Table,
    Id,
    FirstName,
    LastName,
    UserType,
    ExternalId,
    CityId,
}
