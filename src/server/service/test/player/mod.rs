use crate::server::{error::AppError, service::player::PlayerService};
use chrono::NaiveDate;
use test_utils::{
    builder::TestBuilder,
    factory::{self, event::GoalFactory, player::PlayerFactory},
};

mod valuable;
