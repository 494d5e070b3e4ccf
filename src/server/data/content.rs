use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

/// Filters for rich static content.
#[derive(Debug, Clone, Default)]
pub struct RichContentFilter {
    pub category: Option<String>,
    pub culture: Option<String>,
    pub published: bool,
}

/// App settings, key/value content, rich content, advertisements, the photo
/// gallery and stories.
pub struct ContentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the settings row with the latest `last_updated`.
    pub async fn latest_setting(&self) -> Result<Option<entity::app_setting::Model>, DbErr> {
        entity::prelude::AppSetting::find()
            .order_by_desc(entity::app_setting::Column::LastUpdated)
            .order_by_desc(entity::app_setting::Column::Id)
            .one(self.db)
            .await
    }

    pub async fn static_value(
        &self,
        key: &str,
    ) -> Result<Option<entity::static_key_value::Model>, DbErr> {
        entity::prelude::StaticKeyValue::find_by_id(key.to_string())
            .one(self.db)
            .await
    }

    /// Gets all key/value entries, most recently updated first.
    pub async fn static_values(&self) -> Result<Vec<entity::static_key_value::Model>, DbErr> {
        entity::prelude::StaticKeyValue::find()
            .order_by_desc(entity::static_key_value::Column::UpdatedAt)
            .all(self.db)
            .await
    }

    /// Inserts or replaces a key/value entry, stamping `updated_at`.
    pub async fn upsert_static_value(
        &self,
        key: &str,
        value: String,
    ) -> Result<entity::static_key_value::Model, DbErr> {
        let now = Utc::now();

        match self.static_value(key).await? {
            Some(existing) => {
                let mut active: entity::static_key_value::ActiveModel = existing.into();
                active.value = ActiveValue::Set(value);
                active.updated_at = ActiveValue::Set(now);
                active.update(self.db).await
            }
            None => {
                entity::static_key_value::ActiveModel {
                    key: ActiveValue::Set(key.to_string()),
                    value: ActiveValue::Set(value),
                    updated_at: ActiveValue::Set(now),
                }
                .insert(self.db)
                .await
            }
        }
    }

    /// Gets rich content matching the filter, newest first.
    pub async fn rich_content(
        &self,
        filter: RichContentFilter,
    ) -> Result<Vec<entity::rich_static_content::Model>, DbErr> {
        let mut query = entity::prelude::RichStaticContent::find()
            .filter(entity::rich_static_content::Column::Published.eq(filter.published));

        if let Some(category) = filter.category {
            query = query.filter(entity::rich_static_content::Column::CategoryCode.eq(category));
        }
        if let Some(culture) = filter.culture {
            query = query.filter(entity::rich_static_content::Column::Culture.eq(culture));
        }

        query
            .order_by_desc(entity::rich_static_content::Column::CreatedAt)
            .order_by_desc(entity::rich_static_content::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets active advertisements with their city, newest upload first.
    pub async fn active_advertisements(
        &self,
    ) -> Result<Vec<(entity::advertisement::Model, Option<entity::city::Model>)>, DbErr> {
        entity::prelude::Advertisement::find()
            .filter(entity::advertisement::Column::IsActive.eq(true))
            .find_also_related(entity::prelude::City)
            .order_by_desc(entity::advertisement::Column::UploadDate)
            .order_by_desc(entity::advertisement::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets gallery photos, optionally in one category, newest upload first.
    pub async fn photos(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<entity::photo_gallery::Model>, DbErr> {
        let mut query = entity::prelude::PhotoGallery::find();
        if let Some(category) = category {
            query = query.filter(entity::photo_gallery::Column::Category.eq(category));
        }

        query
            .order_by_desc(entity::photo_gallery::Column::UploadedAt)
            .order_by_desc(entity::photo_gallery::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets published stories updated at or after `since`, most recently
    /// updated first, each with its contents in display order.
    pub async fn published_stories_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<(entity::story::Model, Vec<entity::story_content::Model>)>, DbErr> {
        let stories = entity::prelude::Story::find()
            .filter(entity::story::Column::Published.eq(true))
            .filter(entity::story::Column::UpdatedAt.gte(since))
            .order_by_desc(entity::story::Column::UpdatedAt)
            .order_by_desc(entity::story::Column::Id)
            .all(self.db)
            .await?;
        if stories.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = stories.iter().map(|s| s.id).collect();
        let contents = entity::prelude::StoryContent::find()
            .filter(entity::story_content::Column::StoryId.is_in(ids))
            .order_by_asc(entity::story_content::Column::DisplayOrder)
            .order_by_asc(entity::story_content::Column::Id)
            .all(self.db)
            .await?;

        let mut grouped: HashMap<i32, Vec<entity::story_content::Model>> = HashMap::new();
        for content in contents {
            grouped.entry(content.story_id).or_default().push(content);
        }

        Ok(stories
            .into_iter()
            .map(|story| {
                let contents = grouped.remove(&story.id).unwrap_or_default();
                (story, contents)
            })
            .collect())
    }
}
