use crate::server::{
    data::news::{NewsFilter, NewsRepository},
    model::news::{CreateNewsParams, NewsText},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, news::NewsFactory},
};

mod create;
mod list;
mod upsert_content;

fn params(title: &str) -> CreateNewsParams {
    CreateNewsParams {
        text: NewsText {
            title: title.to_string(),
            subtitle: "Subtitle".to_string(),
            details_title: "Details".to_string(),
            details: "Body".to_string(),
        },
        main_photo: Some("main.png".to_string()),
        photo_urls: vec!["one.png".to_string(), "two.png".to_string()],
        city_id: None,
        team_id: None,
        match_id: None,
        is_main_news: false,
    }
}
