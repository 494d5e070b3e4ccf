use crate::server::data::transfer::TransferRepository;
use entity::{app_user::UserType, player_transfer_request::TransferStatus};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, player::PlayerFactory},
};

mod get_for_user;
