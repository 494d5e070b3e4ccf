use crate::server::{
    error::AppError,
    service::content::{ContentService, StoryMedia},
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use test_utils::builder::TestBuilder;

mod app_settings;
mod stories;
