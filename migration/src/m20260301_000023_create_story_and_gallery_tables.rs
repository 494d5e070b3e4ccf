use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PhotoGallery::Table)
                    .if_not_exists()
                    .col(pk_auto(PhotoGallery::Id))
                    .col(string_null(PhotoGallery::Category))
                    .col(string(PhotoGallery::FileName))
                    .col(string(PhotoGallery::FilePath))
                    .col(
                        timestamp_with_time_zone(PhotoGallery::UploadedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Story::Table)
                    .if_not_exists()
                    .col(pk_auto(Story::Id))
                    .col(string(Story::Title))
                    .col(string_null(Story::StoryImage))
                    .col(boolean(Story::Published).default(false))
                    .col(timestamp_with_time_zone(Story::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(StoryContent::Table)
                    .if_not_exists()
                    .col(pk_auto(StoryContent::Id))
                    .col(integer(StoryContent::StoryId))
                    .col(string(StoryContent::MediaUrl))
                    .col(string(StoryContent::ContentType))
                    .col(integer(StoryContent::DisplayOrder).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_story_content_story_id")
                            .from(StoryContent::Table, StoryContent::StoryId)
                            .to(Story::Table, Story::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StoryContent::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Story::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PhotoGallery::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PhotoGallery {
    Table,
    Id,
    Category,
    FileName,
    FilePath,
    UploadedAt,
}

#[derive(DeriveIden)]
pub enum Story {
    Table,
    Id,
    Title,
    StoryImage,
    Published,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum StoryContent {
    Table,
    Id,
    StoryId,
    MediaUrl,
    ContentType,
    DisplayOrder,
}
