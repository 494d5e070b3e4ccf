use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use std::collections::HashMap;

use crate::server::model::news::{CreateNewsParams, NewsText, NewsWithPhotos, DEFAULT_CULTURE};

/// Filters for listing news.
#[derive(Debug, Clone, Default)]
pub struct NewsFilter {
    pub city_id: Option<i32>,
    pub main_only: bool,
    pub only_published: bool,
}

pub struct NewsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NewsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a published news item with its photos and base-culture content row.
    pub async fn create(&self, params: CreateNewsParams) -> Result<NewsWithPhotos, DbErr> {
        let txn = self.db.begin().await?;

        let news = entity::match_news::ActiveModel {
            title: ActiveValue::Set(params.text.title.clone()),
            subtitle: ActiveValue::Set(params.text.subtitle.clone()),
            main_photo: ActiveValue::Set(params.main_photo),
            details_title: ActiveValue::Set(params.text.details_title.clone()),
            details: ActiveValue::Set(params.text.details.clone()),
            match_id: ActiveValue::Set(params.match_id),
            city_id: ActiveValue::Set(params.city_id),
            team_id: ActiveValue::Set(params.team_id),
            is_main_news: ActiveValue::Set(params.is_main_news),
            published: ActiveValue::Set(true),
            created_date: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let mut photos = Vec::with_capacity(params.photo_urls.len());
        for url in params.photo_urls {
            photos.push(insert_photo(&txn, news.id, url).await?);
        }

        upsert_content(&txn, news.id, DEFAULT_CULTURE, params.text).await?;

        txn.commit().await?;

        Ok(NewsWithPhotos { news, photos })
    }

    /// Replaces the text, links and flags of a news item and appends new photos.
    ///
    /// Returns `None` if the item does not exist.
    pub async fn update(
        &self,
        id: i32,
        params: CreateNewsParams,
    ) -> Result<Option<NewsWithPhotos>, DbErr> {
        let Some(existing) = entity::prelude::MatchNews::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let txn = self.db.begin().await?;

        let mut active: entity::match_news::ActiveModel = existing.into();
        active.title = ActiveValue::Set(params.text.title.clone());
        active.subtitle = ActiveValue::Set(params.text.subtitle.clone());
        active.details_title = ActiveValue::Set(params.text.details_title.clone());
        active.details = ActiveValue::Set(params.text.details.clone());
        active.match_id = ActiveValue::Set(params.match_id);
        active.city_id = ActiveValue::Set(params.city_id);
        active.team_id = ActiveValue::Set(params.team_id);
        active.is_main_news = ActiveValue::Set(params.is_main_news);
        if params.main_photo.is_some() {
            active.main_photo = ActiveValue::Set(params.main_photo);
        }
        active.update(&txn).await?;

        for url in params.photo_urls {
            insert_photo(&txn, id, url).await?;
        }

        upsert_content(&txn, id, DEFAULT_CULTURE, params.text).await?;

        txn.commit().await?;

        self.find_by_id(id).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<NewsWithPhotos>, DbErr> {
        let Some(news) = entity::prelude::MatchNews::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let photos = self.photos_for(&[id]).await?.remove(&id).unwrap_or_default();

        Ok(Some(NewsWithPhotos { news, photos }))
    }

    /// Lists news newest first with photos attached.
    pub async fn list(&self, filter: NewsFilter) -> Result<Vec<NewsWithPhotos>, DbErr> {
        let mut query = entity::prelude::MatchNews::find();

        if filter.only_published {
            query = query.filter(entity::match_news::Column::Published.eq(true));
        }
        if filter.main_only {
            query = query.filter(entity::match_news::Column::IsMainNews.eq(true));
        }
        if let Some(city_id) = filter.city_id {
            query = query.filter(entity::match_news::Column::CityId.eq(city_id));
        }

        let items = query
            .order_by_desc(entity::match_news::Column::CreatedDate)
            .order_by_desc(entity::match_news::Column::Id)
            .all(self.db)
            .await?;

        let ids: Vec<i32> = items.iter().map(|n| n.id).collect();
        let photos = self.photos_for(&ids).await?;

        Ok(NewsWithPhotos::join(items, photos))
    }

    /// Loads photos grouped by news id.
    pub async fn photos_for(
        &self,
        news_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<entity::match_news_photo::Model>>, DbErr> {
        if news_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let photos = entity::prelude::MatchNewsPhoto::find()
            .filter(entity::match_news_photo::Column::MatchNewsId.is_in(news_ids.to_vec()))
            .order_by_asc(entity::match_news_photo::Column::Id)
            .all(self.db)
            .await?;

        let mut grouped: HashMap<i32, Vec<entity::match_news_photo::Model>> = HashMap::new();
        for photo in photos {
            grouped.entry(photo.match_news_id).or_default().push(photo);
        }
        Ok(grouped)
    }

    pub async fn contents_for(
        &self,
        news_id: i32,
    ) -> Result<Vec<entity::match_news_content::Model>, DbErr> {
        entity::prelude::MatchNewsContent::find()
            .filter(entity::match_news_content::Column::MatchNewsId.eq(news_id))
            .order_by_asc(entity::match_news_content::Column::Culture)
            .all(self.db)
            .await
    }

    /// Loads the content rows of one culture keyed by news id.
    pub async fn contents_for_culture(
        &self,
        news_ids: &[i32],
        culture: &str,
    ) -> Result<HashMap<i32, entity::match_news_content::Model>, DbErr> {
        if news_ids.is_empty() {
            return Ok(HashMap::new());
        }

        Ok(entity::prelude::MatchNewsContent::find()
            .filter(entity::match_news_content::Column::MatchNewsId.is_in(news_ids.to_vec()))
            .filter(entity::match_news_content::Column::Culture.eq(culture))
            .all(self.db)
            .await?
            .into_iter()
            .map(|c| (c.match_news_id, c))
            .collect())
    }

    pub async fn upsert_content(
        &self,
        news_id: i32,
        culture: &str,
        text: NewsText,
    ) -> Result<entity::match_news_content::Model, DbErr> {
        upsert_content(self.db, news_id, culture, text).await
    }

    /// Flips the published flag; returns the new state, or `None` if missing.
    pub async fn toggle_published(&self, id: i32) -> Result<Option<bool>, DbErr> {
        let Some(news) = entity::prelude::MatchNews::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let published = !news.published;
        let mut active: entity::match_news::ActiveModel = news.into();
        active.published = ActiveValue::Set(published);
        active.update(self.db).await?;

        Ok(Some(published))
    }

    /// Deletes a photo; returns `false` if it did not exist.
    pub async fn delete_photo(&self, photo_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::MatchNewsPhoto::delete_by_id(photo_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

async fn insert_photo<C: ConnectionTrait>(
    conn: &C,
    news_id: i32,
    photo_url: String,
) -> Result<entity::match_news_photo::Model, DbErr> {
    entity::match_news_photo::ActiveModel {
        match_news_id: ActiveValue::Set(news_id),
        photo_url: ActiveValue::Set(photo_url),
        ..Default::default()
    }
    .insert(conn)
    .await
}

async fn upsert_content<C: ConnectionTrait>(
    conn: &C,
    news_id: i32,
    culture: &str,
    text: NewsText,
) -> Result<entity::match_news_content::Model, DbErr> {
    let existing = entity::prelude::MatchNewsContent::find()
        .filter(entity::match_news_content::Column::MatchNewsId.eq(news_id))
        .filter(entity::match_news_content::Column::Culture.eq(culture))
        .one(conn)
        .await?;

    match existing {
        Some(row) => {
            let mut active: entity::match_news_content::ActiveModel = row.into();
            active.title = ActiveValue::Set(text.title);
            active.subtitle = ActiveValue::Set(text.subtitle);
            active.details_title = ActiveValue::Set(text.details_title);
            active.details = ActiveValue::Set(text.details);
            active.update(conn).await
        }
        None => {
            entity::match_news_content::ActiveModel {
                match_news_id: ActiveValue::Set(news_id),
                culture: ActiveValue::Set(culture.to_string()),
                title: ActiveValue::Set(text.title),
                subtitle: ActiveValue::Set(text.subtitle),
                details_title: ActiveValue::Set(text.details_title),
                details: ActiveValue::Set(text.details),
                ..Default::default()
            }
            .insert(conn)
            .await
        }
    }
}
