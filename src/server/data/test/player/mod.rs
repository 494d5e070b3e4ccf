use crate::server::data::player::PlayerRepository;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, player::PlayerFactory},
};

mod get_active_by_team;
mod search;
mod top_valuable;
