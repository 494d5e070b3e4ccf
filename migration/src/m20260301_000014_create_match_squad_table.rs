use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000007_create_team_table::Team, m20260301_000010_create_player_table::Player,
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
                    .table(MatchSquad::Table)
                    .if_not_exists()
                    .col(pk_auto(MatchSquad::Id))
                    .col(integer(MatchSquad::MatchId))
                    .col(integer(MatchSquad::PlayerId))
                    .col(integer(MatchSquad::TeamId))
                    .col(boolean(MatchSquad::IsStarting11).default(false))
                    .col(boolean(MatchSquad::IsSubstitute).default(false))
                    .col(integer(MatchSquad::ShirtNumber).default(0))
                    .col(integer_null(MatchSquad::TopPosition))
                    .col(integer_null(MatchSquad::LeftPosition))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_squad_match_id")
                            .from(MatchSquad::Table, MatchSquad::MatchId)
                            .to(Fixture::Table, Fixture::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_squad_player_id")
                            .from(MatchSquad::Table, MatchSquad::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_squad_team_id")
                            .from(MatchSquad::Table, MatchSquad::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(MatchSquadFormation::Table)
                    .if_not_exists()
                    .col(pk_auto(MatchSquadFormation::Id))
                    .col(integer(MatchSquadFormation::MatchId))
                    .col(integer(MatchSquadFormation::TeamId))
                    .col(string(MatchSquadFormation::FormationImage))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_squad_formation_match_id")
                            .from(MatchSquadFormation::Table, MatchSquadFormation::MatchId)
                            .to(Fixture::Table, Fixture::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_match_squad_formation_team_id")
                            .from(MatchSquadFormation::Table, MatchSquadFormation::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MatchSquadFormation::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MatchSquad::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MatchSquad {
    Table,
    Id,
    MatchId,
    PlayerId,
    TeamId,
    IsStarting11,
    IsSubstitute,
    ShirtNumber,
    TopPosition,
    LeftPosition,
}

#[derive(DeriveIden)]
pub enum MatchSquadFormation {
    Table,
    Id,
    MatchId,
    TeamId,
    FormationImage,
}
