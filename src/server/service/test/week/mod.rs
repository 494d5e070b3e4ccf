use crate::server::{error::AppError, service::week::WeekService};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use test_utils::{
    builder::TestBuilder,
    factory::{self, player::PlayerFactory, week::WeekFactory},
};

mod last_week_best_eleven;
mod suspensions;

async fn insert_suspension(
    db: &DatabaseConnection,
    week_id: i32,
    player_id: i32,
    games: i32,
) -> Result<entity::player_suspension::Model, DbErr> {
    entity::player_suspension::ActiveModel {
        player_id: ActiveValue::Set(player_id),
        week_id: ActiveValue::Set(week_id),
        suspension_type: ActiveValue::Set("Red card".to_string()),
        games_suspended: ActiveValue::Set(games),
        notes: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}
