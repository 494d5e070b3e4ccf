use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_city_table::City, m20260301_000007_create_team_table::Team,
    m20260301_000011_create_fixture_table::Fixture,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MatchNews::Table)
                    .if_not_exists()
                    .col(pk_auto(MatchNews::Id))
                    .col(string(MatchNews::Title))
                    .col(string(MatchNews::Subtitle))
                    .col(string_null(MatchNews::MainPhoto))
                    .col(string(MatchNews::DetailsTitle))
                    .col(text(MatchNews::Details))
                    .col(integer_null(MatchNews::MatchId))
                    .col(integer_null(MatchNews::CityId))
                    .col(integer_null(MatchNews::TeamId))
                    .col(boolean(MatchNews::IsMainNews).default(false))
                    .col(boolean(MatchNews::Published).default(false))
                    .col(
                        timestamp_with_time_zone(MatchNews::CreatedDate)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_news_match_id")
                            .from(MatchNews::Table, MatchNews::MatchId)
                            .to(Fixture::Table, Fixture::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_news_city_id")
                            .from(MatchNews::Table, MatchNews::CityId)
                            .to(City::Table, City::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_news_team_id")
                            .from(MatchNews::Table, MatchNews::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MatchNewsPhoto::Table)
                    .if_not_exists()
                    .col(pk_auto(MatchNewsPhoto::Id))
                    .col(integer(MatchNewsPhoto::MatchNewsId))
                    .col(string(MatchNewsPhoto::PhotoUrl))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_news_photo_match_news_id")
                            .from(MatchNewsPhoto::Table, MatchNewsPhoto::MatchNewsId)
                            .to(MatchNews::Table, MatchNews::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MatchNewsContent::Table)
                    .if_not_exists()
                    .col(pk_auto(MatchNewsContent::Id))
                    .col(integer(MatchNewsContent::MatchNewsId))
                    .col(string_len(MatchNewsContent::Culture, 8))
                    .col(string(MatchNewsContent::Title))
                    .col(string(MatchNewsContent::Subtitle))
                    .col(string(MatchNewsContent::DetailsTitle))
                    .col(text(MatchNewsContent::Details))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_news_content_match_news_id")
                            .from(MatchNewsContent::Table, MatchNewsContent::MatchNewsId)
                            .to(MatchNews::Table, MatchNews::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_match_news_content_news_culture")
                    .table(MatchNewsContent::Table)
                    .col(MatchNewsContent::MatchNewsId)
                    .col(MatchNewsContent::Culture)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MatchNewsContent::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MatchNewsPhoto::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MatchNews::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MatchNews {
    Table,
    Id,
    Title,
    Subtitle,
    MainPhoto,
    DetailsTitle,
    Details,
    MatchId,
    CityId,
    TeamId,
    IsMainNews,
    Published,
    CreatedDate,
}

#[derive(DeriveIden)]
pub enum MatchNewsPhoto {
    Table,
    Id,
    MatchNewsId,
    PhotoUrl,
}

#[derive(DeriveIden)]
pub enum MatchNewsContent {
    Table,
    Id,
    MatchNewsId,
    Culture,
    Title,
    Subtitle,
    DetailsTitle,
    Details,
}
