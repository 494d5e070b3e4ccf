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
                    .table(MatchSubstitution::Table)
                    .if_not_exists()
                    .col(pk_auto(MatchSubstitution::Id))
                    .col(integer(MatchSubstitution::MatchId))
                    .col(integer(MatchSubstitution::PlayerInId))
                    .col(integer(MatchSubstitution::PlayerOutId))
                    .col(integer(MatchSubstitution::Minute))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_substitution_match_id")
                            .from(MatchSubstitution::Table, MatchSubstitution::MatchId)
                            .to(Fixture::Table, Fixture::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_substitution_player_in_id")
                            .from(MatchSubstitution::Table, MatchSubstitution::PlayerInId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_substitution_player_out_id")
                            .from(MatchSubstitution::Table, MatchSubstitution::PlayerOutId)
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
            .drop_table(Table::drop().table(MatchSubstitution::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MatchSubstitution {
    Table,
    Id,
    MatchId,
    PlayerInId,
    PlayerOutId,
    Minute,
}
