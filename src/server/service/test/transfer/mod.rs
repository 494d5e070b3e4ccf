use crate::{
    model::transfer::CreateTransferRequestDto,
    server::{
        error::AppError,
        integration::notifier::{
            fake::{RecordingNotifier, Sent},
            Notification,
        },
        model::transfer::notice,
        service::transfer::TransferService,
    },
};
use entity::{app_user::UserType, player_transfer_request::TransferStatus};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, app_user::AppUserFactory, player::PlayerFactory, team::TeamFactory},
};

const PLACEHOLDER: &str = "/images/placeholder.png";

/// Creates a user of `user_type` with a player row on `team_id`.
async fn member(
    db: &DatabaseConnection,
    team_id: i32,
    user_type: UserType,
) -> Result<(entity::app_user::Model, entity::player::Model), DbErr> {
    let user = AppUserFactory::new(db).user_type(user_type).build().await?;
    let player = PlayerFactory::new(db, Some(team_id))
        .user_id(user.id.clone())
        .build()
        .await?;
    Ok((user, player))
}

fn request(player: &entity::app_user::Model, captain: &entity::app_user::Model) -> CreateTransferRequestDto {
    CreateTransferRequestDto {
        player_user_id: player.id.clone(),
        requested_captain_user_id: captain.id.clone(),
    }
}

fn pushed_to(sent: &[Sent], user: &entity::app_user::Model) -> Vec<Notification> {
    let target = user.external_id.clone().unwrap_or_default();
    sent.iter()
        .filter_map(|s| match s {
            Sent::User(id, n) if *id == target => Some(n.clone()),
            _ => None,
        })
        .collect()
}

mod approve;
mod create;
mod list_for_user;
mod reject;
