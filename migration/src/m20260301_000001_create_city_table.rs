use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(City::Table)
                    .if_not_exists()
                    .col(pk_auto(City::Id))
                    .col(string(City::Name))
                    .col(integer(City::OrderNo).default(0))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CityRestriction::Table)
                    .if_not_exists()
                    .col(pk_auto(CityRestriction::Id))
                    .col(integer(CityRestriction::CityId))
                    .col(boolean(CityRestriction::IsTransferBanned).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_city_restriction_city_id")
                            .from(CityRestriction::Table, CityRestriction::CityId)
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
            .drop_table(Table::drop().table(CityRestriction::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(City::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum City {
    Table,
    Id,
    Name,
    OrderNo,
}

#[derive(DeriveIden)]
pub enum CityRestriction {
    Table,
    Id,
    CityId,
    IsTransferBanned,
}
