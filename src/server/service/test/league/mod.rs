use crate::server::{error::AppError, service::league::LeagueService};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use test_utils::{
    builder::TestBuilder,
    factory::{self, fixture::FixtureFactory, league::LeagueFactory, week::WeekFactory},
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

mod actual_matches;
mod actual_week_matches;
mod seasons;
mod team_current_weeks;
mod weeks;
