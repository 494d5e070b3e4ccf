use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AppSetting::Table)
                    .if_not_exists()
                    .col(pk_auto(AppSetting::Id))
                    .col(string(AppSetting::IosVersion))
                    .col(string(AppSetting::AndroidVersion))
                    .col(boolean(AppSetting::ForceUpdate).default(false))
                    .col(boolean(AppSetting::AppStop).default(false))
                    .col(string_null(AppSetting::AppStopMessage))
                    .col(timestamp_with_time_zone(AppSetting::LastUpdated))
                    .col(timestamp_with_time_zone_null(AppSetting::TournamentStartDate))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(StaticKeyValue::Table)
                    .if_not_exists()
                    .col(string(StaticKeyValue::Key).primary_key())
                    .col(text(StaticKeyValue::Value))
                    .col(timestamp_with_time_zone(StaticKeyValue::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(RichStaticContent::Table)
                    .if_not_exists()
                    .col(pk_auto(RichStaticContent::Id))
                    .col(string_null(RichStaticContent::CategoryCode))
                    .col(string_null(RichStaticContent::Culture))
                    .col(string_null(RichStaticContent::ImageUrl))
                    .col(string_null(RichStaticContent::VideoUrl))
                    .col(text_null(RichStaticContent::Text))
                    .col(string_null(RichStaticContent::AltText))
                    .col(boolean(RichStaticContent::Published).default(false))
                    .col(timestamp_with_time_zone(RichStaticContent::CreatedAt))
                    .col(timestamp_with_time_zone(RichStaticContent::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RichStaticContent::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StaticKeyValue::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AppSetting::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AppSetting {
    Table,
    Id,
    IosVersion,
    AndroidVersion,
    ForceUpdate,
    AppStop,
    AppStopMessage,
    LastUpdated,
    TournamentStartDate,
}

#[derive(DeriveIden)]
pub enum StaticKeyValue {
    Table,
    Key,
    Value,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum RichStaticContent {
    Table,
    Id,
    CategoryCode,
    Culture,
    ImageUrl,
    VideoUrl,
    Text,
    AltText,
    Published,
    CreatedAt,
    UpdatedAt,
}
