use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000002_create_league_table::League, m20260301_000003_create_season_table::Season,
    m20260301_000007_create_team_table::Team,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeamPenalty::Table)
                    .if_not_exists()
                    .col(pk_auto(TeamPenalty::Id))
                    .col(integer(TeamPenalty::LeagueId))
                    .col(integer(TeamPenalty::SeasonId))
                    .col(integer(TeamPenalty::TeamId))
                    .col(integer(TeamPenalty::PenaltyPoints))
                    .col(string_null(TeamPenalty::Description))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_penalty_league_id")
                            .from(TeamPenalty::Table, TeamPenalty::LeagueId)
                            .to(League::Table, League::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_penalty_season_id")
                            .from(TeamPenalty::Table, TeamPenalty::SeasonId)
                            .to(Season::Table, Season::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_penalty_team_id")
                            .from(TeamPenalty::Table, TeamPenalty::TeamId)
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
            .drop_table(Table::drop().table(TeamPenalty::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TeamPenalty {
    Table,
    Id,
    LeagueId,
    SeasonId,
    TeamId,
    PenaltyPoints,
    Description,
}
