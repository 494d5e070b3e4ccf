use crate::server::{data::fixture::FixtureRepository, model::fixture::RecordGoalParams};
use chrono::{Duration, TimeZone, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, fixture::FixtureFactory},
};

mod get_by_team;
mod record_goal;
