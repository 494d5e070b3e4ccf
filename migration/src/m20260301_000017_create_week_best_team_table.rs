use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000002_create_league_table::League, m20260301_000003_create_season_table::Season,
    m20260301_000005_create_week_table::Week, m20260301_000007_create_team_table::Team,
    m20260301_000010_create_player_table::Player,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WeekBestTeam::Table)
                    .if_not_exists()
                    .col(pk_auto(WeekBestTeam::Id))
                    .col(integer(WeekBestTeam::WeekId))
                    .col(integer(WeekBestTeam::LeagueId))
                    .col(integer(WeekBestTeam::SeasonId))
                    .col(integer_null(WeekBestTeam::BestPlayerId))
                    .col(integer_null(WeekBestTeam::BestTeamId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_week_best_team_week_id")
                            .from(WeekBestTeam::Table, WeekBestTeam::WeekId)
                            .to(Week::Table, Week::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_week_best_team_league_id")
                            .from(WeekBestTeam::Table, WeekBestTeam::LeagueId)
                            .to(League::Table, League::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_week_best_team_season_id")
                            .from(WeekBestTeam::Table, WeekBestTeam::SeasonId)
                            .to(Season::Table, Season::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_week_best_team_best_player_id")
                            .from(WeekBestTeam::Table, WeekBestTeam::BestPlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_week_best_team_best_team_id")
                            .from(WeekBestTeam::Table, WeekBestTeam::BestTeamId)
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
                    .table(WeekBestTeamPlayer::Table)
                    .if_not_exists()
                    .col(pk_auto(WeekBestTeamPlayer::Id))
                    .col(integer(WeekBestTeamPlayer::WeekBestTeamId))
                    .col(integer(WeekBestTeamPlayer::PlayerId))
                    .col(integer(WeekBestTeamPlayer::OrderNumber))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_week_best_team_player_week_best_team_id")
                            .from(WeekBestTeamPlayer::Table, WeekBestTeamPlayer::WeekBestTeamId)
                            .to(WeekBestTeam::Table, WeekBestTeam::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_week_best_team_player_player_id")
                            .from(WeekBestTeamPlayer::Table, WeekBestTeamPlayer::PlayerId)
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
            .drop_table(Table::drop().table(WeekBestTeamPlayer::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(WeekBestTeam::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WeekBestTeam {
    Table,
    Id,
    WeekId,
    LeagueId,
    SeasonId,
    BestPlayerId,
    BestTeamId,
}

#[derive(DeriveIden)]
pub enum WeekBestTeamPlayer {
    Table,
    Id,
    WeekBestTeamId,
    PlayerId,
    OrderNumber,
}
