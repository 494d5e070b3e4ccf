use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000010_create_player_table::Player, m20260301_000011_create_fixture_table::Fixture,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Card::Table)
                    .if_not_exists()
                    .col(pk_auto(Card::Id))
                    .col(integer(Card::MatchId))
                    .col(integer(Card::PlayerId))
                    .col(string_len(Card::CardType, 8))
                    .col(integer(Card::Minute))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_card_match_id")
                            .from(Card::Table, Card::MatchId)
                            .to(Fixture::Table, Fixture::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_card_player_id")
                            .from(Card::Table, Card::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Card::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Card {
    Table,
    Id,
    MatchId,
    PlayerId,
    CardType,
    Minute,
}
