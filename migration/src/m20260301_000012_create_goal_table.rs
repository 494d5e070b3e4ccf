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
                    .table(Goal::Table)
                    .if_not_exists()
                    .col(pk_auto(Goal::Id))
                    .col(integer(Goal::MatchId))
                    .col(integer(Goal::TeamId))
                    .col(integer(Goal::PlayerId))
                    .col(integer_null(Goal::AssistPlayerId))
                    .col(integer(Goal::Minute))
                    .col(boolean(Goal::IsPenalty).default(false))
                    .col(boolean(Goal::IsOwnGoal).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_goal_match_id")
                            .from(Goal::Table, Goal::MatchId)
                            .to(Fixture::Table, Fixture::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_goal_team_id")
                            .from(Goal::Table, Goal::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_goal_player_id")
                            .from(Goal::Table, Goal::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_goal_assist_player_id")
                            .from(Goal::Table, Goal::AssistPlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Goal::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Goal {
    Table,
    Id,
    MatchId,
    TeamId,
    PlayerId,
    AssistPlayerId,
    Minute,
    IsPenalty,
    IsOwnGoal,
}
