use crate::server::{
    error::AppError,
    model::fixture::RecordGoalParams,
    service::fixture::{MatchService, SubstitutionParams},
};
use chrono::NaiveDate;
use entity::card::CardType;
use sea_orm::{ActiveModelTrait, ActiveValue};
use test_utils::{
    builder::TestBuilder,
    factory::{self, event::GoalFactory, fixture::FixtureFactory, player::PlayerFactory},
};

mod details;
mod squads;
mod web_details;
