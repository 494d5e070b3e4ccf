//! News factory for creating test news entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating news items.
///
/// Defaults to a published, non-main item created now.
pub struct NewsFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::match_news::Model,
}

impl<'a> NewsFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            entity: entity::match_news::Model {
                id: 0,
                title: format!("News {}", id),
                subtitle: "Subtitle".to_string(),
                main_photo: None,
                details_title: "Details".to_string(),
                details: "Body".to_string(),
                match_id: None,
                city_id: None,
                team_id: None,
                is_main_news: false,
                published: true,
                created_date: Utc::now(),
            },
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.entity.title = title.into();
        self
    }

    pub fn city_id(mut self, city_id: i32) -> Self {
        self.entity.city_id = Some(city_id);
        self
    }

    pub fn published(mut self, published: bool) -> Self {
        self.entity.published = published;
        self
    }

    pub fn is_main_news(mut self, is_main_news: bool) -> Self {
        self.entity.is_main_news = is_main_news;
        self
    }

    pub fn created_date(mut self, created_date: DateTime<Utc>) -> Self {
        self.entity.created_date = created_date;
        self
    }

    pub async fn build(self) -> Result<entity::match_news::Model, DbErr> {
        let e = self.entity;
        entity::match_news::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(e.title),
            subtitle: ActiveValue::Set(e.subtitle),
            main_photo: ActiveValue::Set(e.main_photo),
            details_title: ActiveValue::Set(e.details_title),
            details: ActiveValue::Set(e.details),
            match_id: ActiveValue::Set(e.match_id),
            city_id: ActiveValue::Set(e.city_id),
            team_id: ActiveValue::Set(e.team_id),
            is_main_news: ActiveValue::Set(e.is_main_news),
            published: ActiveValue::Set(e.published),
            created_date: ActiveValue::Set(e.created_date),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a published news item.
pub async fn create_news(db: &DatabaseConnection) -> Result<entity::match_news::Model, DbErr> {
    NewsFactory::new(db).build().await
}

/// Adds a localised content row to a news item.
pub async fn create_news_content(
    db: &DatabaseConnection,
    news_id: i32,
    culture: &str,
    title: &str,
) -> Result<entity::match_news_content::Model, DbErr> {
    entity::match_news_content::ActiveModel {
        id: ActiveValue::NotSet,
        match_news_id: ActiveValue::Set(news_id),
        culture: ActiveValue::Set(culture.to_string()),
        title: ActiveValue::Set(title.to_string()),
        subtitle: ActiveValue::Set(format!("{} subtitle", title)),
        details_title: ActiveValue::Set(format!("{} details", title)),
        details: ActiveValue::Set(format!("{} body", title)),
    }
    .insert(db)
    .await
}
