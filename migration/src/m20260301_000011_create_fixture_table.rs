use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000002_create_league_table::League,
    m20260301_000004_create_league_group_table::LeagueGroup,
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
                    .table(Fixture::Table)
                    .if_not_exists()
                    .col(pk_auto(Fixture::Id))
                    .col(integer(Fixture::LeagueId))
                    .col(integer(Fixture::WeekId))
                    .col(integer_null(Fixture::GroupId))
                    .col(integer(Fixture::HomeTeamId))
                    .col(integer(Fixture::AwayTeamId))
                    .col(timestamp_with_time_zone(Fixture::MatchDate))
                    .col(integer_null(Fixture::HomeScore))
                    .col(integer_null(Fixture::AwayScore))
                    .col(boolean(Fixture::IsPlayed).default(false))
                    .col(string_len(Fixture::Status, 16).default("scheduled"))
                    .col(string_null(Fixture::MatchUrl))
                    .col(integer_null(Fixture::ManOfTheMatchId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fixture_league_id")
                            .from(Fixture::Table, Fixture::LeagueId)
                            .to(League::Table, League::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fixture_week_id")
                            .from(Fixture::Table, Fixture::WeekId)
                            .to(Week::Table, Week::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fixture_group_id")
                            .from(Fixture::Table, Fixture::GroupId)
                            .to(LeagueGroup::Table, LeagueGroup::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fixture_home_team_id")
                            .from(Fixture::Table, Fixture::HomeTeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fixture_away_team_id")
                            .from(Fixture::Table, Fixture::AwayTeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fixture_man_of_the_match_id")
                            .from(Fixture::Table, Fixture::ManOfTheMatchId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_fixture_week_id")
                    .table(Fixture::Table)
                    .col(Fixture::WeekId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Fixture::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Fixture {
    Table,
    Id,
    LeagueId,
    WeekId,
    GroupId,
    HomeTeamId,
    AwayTeamId,
    MatchDate,
    HomeScore,
    AwayScore,
    IsPlayed,
    Status,
    MatchUrl,
    ManOfTheMatchId,
}
