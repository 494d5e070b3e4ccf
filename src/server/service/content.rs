use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::content::{
        AdvertisementDto, AppSettingDto, PhotoDto, RichContentDto, StaticValueDto,
        StoryContentDto, StoryDto,
    },
    server::{
        data::content::{ContentRepository, RichContentFilter},
        error::AppError,
    },
};

fn static_value_dto(row: entity::static_key_value::Model) -> StaticValueDto {
    StaticValueDto {
        key: row.key,
        value: row.value,
        updated_at: row.updated_at,
    }
}

/// How long a story stays visible after its last update.
const STORY_LIFETIME_HOURS: i64 = 24;

/// Media kinds a story listing can be narrowed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryMedia {
    Image,
    Video,
}

impl StoryMedia {
    /// Parses a query value. Blank means no filter.
    pub fn parse(raw: Option<&str>) -> Result<Option<Self>, AppError> {
        let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
            return Ok(None);
        };

        match raw.to_lowercase().as_str() {
            "image" => Ok(Some(Self::Image)),
            "video" => Ok(Some(Self::Video)),
            _ => Err(AppError::BadRequest(
                "type must be 'image' or 'video'".to_string(),
            )),
        }
    }

    fn prefix(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
        }
    }

    fn matches(self, content_type: &str) -> bool {
        content_type.to_lowercase().starts_with(self.prefix())
    }
}

fn story_dto(
    story: entity::story::Model,
    contents: Vec<entity::story_content::Model>,
) -> StoryDto {
    let kind = if contents.iter().any(|c| StoryMedia::Video.matches(&c.content_type)) {
        StoryMedia::Video
    } else {
        StoryMedia::Image
    };

    StoryDto {
        id: story.id,
        title: story.title,
        story_image: story.story_image,
        published: story.published,
        updated_at: story.updated_at,
        kind: kind.prefix().to_string(),
        contents: contents
            .into_iter()
            .map(|c| StoryContentDto {
                id: c.id,
                media_url: c.media_url,
                content_type: c.content_type,
                display_order: c.display_order,
            })
            .collect(),
    }
}

pub struct ContentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn app_settings(&self) -> Result<AppSettingDto, AppError> {
        let setting = ContentRepository::new(self.db)
            .latest_setting()
            .await?
            .ok_or_else(|| AppError::NotFound("App settings not found".to_string()))?;

        Ok(AppSettingDto {
            ios_version: setting.ios_version,
            android_version: setting.android_version,
            force_update: setting.force_update,
            app_stop: setting.app_stop,
            app_stop_message: setting.app_stop_message,
            last_updated: setting.last_updated,
            tournament_start_date: setting.tournament_start_date,
        })
    }

    /// One entry when `key` is given, otherwise every entry newest first.
    pub async fn static_values(&self, key: Option<&str>) -> Result<Vec<StaticValueDto>, AppError> {
        let repo = ContentRepository::new(self.db);

        match key {
            Some(key) => {
                let row = repo
                    .static_value(key)
                    .await?
                    .ok_or_else(|| AppError::NotFound(format!("Static value '{}' not found", key)))?;
                Ok(vec![static_value_dto(row)])
            }
            None => Ok(repo
                .static_values()
                .await?
                .into_iter()
                .map(static_value_dto)
                .collect()),
        }
    }

    pub async fn upsert_static_value(
        &self,
        key: &str,
        value: String,
    ) -> Result<StaticValueDto, AppError> {
        if key.trim().is_empty() {
            return Err(AppError::BadRequest("key is required".to_string()));
        }

        let row = ContentRepository::new(self.db)
            .upsert_static_value(key, value)
            .await?;

        Ok(static_value_dto(row))
    }

    pub async fn rich_content(&self, filter: RichContentFilter) -> Result<Vec<RichContentDto>, AppError> {
        let rows = ContentRepository::new(self.db).rich_content(filter).await?;

        Ok(rows
            .into_iter()
            .map(|c| RichContentDto {
                id: c.id,
                category_code: c.category_code,
                culture: c.culture,
                image_url: c.image_url,
                video_url: c.video_url,
                text: c.text,
                alt_text: c.alt_text,
                published: c.published,
                created_at: c.created_at,
                updated_at: c.updated_at,
            })
            .collect())
    }

    pub async fn advertisements(&self) -> Result<Vec<AdvertisementDto>, AppError> {
        let rows = ContentRepository::new(self.db).active_advertisements().await?;

        Ok(rows
            .into_iter()
            .map(|(ad, city)| AdvertisementDto {
                id: ad.id,
                name: ad.name,
                link_url: ad.link_url,
                image_path: ad.image_path,
                alt_text: ad.alt_text,
                category: ad.category,
                city_id: ad.city_id,
                city_name: city.map(|c| c.name),
                upload_date: ad.upload_date,
            })
            .collect())
    }

    pub async fn photos(&self, category: Option<&str>) -> Result<Vec<PhotoDto>, AppError> {
        let category = category.map(str::trim).filter(|c| !c.is_empty());
        let rows = ContentRepository::new(self.db).photos(category).await?;

        Ok(rows
            .into_iter()
            .map(|p| PhotoDto {
                id: p.id,
                category: p.category,
                file_name: p.file_name,
                file_path: p.file_path,
                uploaded_at: p.uploaded_at,
            })
            .collect())
    }

    /// Published stories updated within the last day.
    ///
    /// With a media filter, stories without matching content are dropped and
    /// the rest keep only their matching contents.
    pub async fn stories(
        &self,
        media: Option<StoryMedia>,
        now: DateTime<Utc>,
    ) -> Result<Vec<StoryDto>, AppError> {
        let since = now - Duration::hours(STORY_LIFETIME_HOURS);
        let rows = ContentRepository::new(self.db)
            .published_stories_since(since)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(story, contents)| {
                let contents = match media {
                    Some(media) => {
                        let kept: Vec<_> = contents
                            .into_iter()
                            .filter(|c| media.matches(&c.content_type))
                            .collect();
                        if kept.is_empty() {
                            return None;
                        }
                        kept
                    }
                    None => contents,
                };
                Some(story_dto(story, contents))
            })
            .collect())
    }
}
