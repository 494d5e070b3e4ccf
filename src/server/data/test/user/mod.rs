use crate::server::data::user::AppUserRepository;
use entity::app_user::UserType;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, player::PlayerFactory},
};

mod find_captain_of_team;
