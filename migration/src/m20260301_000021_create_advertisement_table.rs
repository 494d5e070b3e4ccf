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
                    .table(Advertisement::Table)
                    .if_not_exists()
                    .col(pk_auto(Advertisement::Id))
                    .col(string(Advertisement::Name))
                    .col(string_null(Advertisement::LinkUrl))
                    .col(string_null(Advertisement::ImagePath))
                    .col(string_null(Advertisement::AltText))
                    .col(string_null(Advertisement::Category))
                    .col(integer_null(Advertisement::CityId))
                    .col(boolean(Advertisement::IsActive).default(true))
                    .col(
                        timestamp_with_time_zone(Advertisement::UploadDate)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_advertisement_city_id")
                            .from(Advertisement::Table, Advertisement::CityId)
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
            .drop_table(Table::drop().table(Advertisement::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Advertisement {
    Table,
    Id,
    Name,
    LinkUrl,
    ImagePath,
    AltText,
    Category,
    CityId,
    IsActive,
    UploadDate,
}
