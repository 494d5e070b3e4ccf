//! News items with their photos and localized rows.

use std::collections::HashMap;

use crate::{
    model::news::{
        LocalizedNewsDto, NewsContentDto, NewsDetailDto, NewsDto, NewsPhotoDto, SaveNewsContentDto,
        SaveNewsDto,
    },
    server::error::AppError,
};

/// Culture whose content row mirrors the base text of a news item.
pub const DEFAULT_CULTURE: &str = "tr";

/// Text of a news item in one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsText {
    pub title: String,
    pub subtitle: String,
    pub details_title: String,
    pub details: String,
}

impl NewsText {
    /// Rejects text where any field is blank.
    pub fn validated(self) -> Result<Self, AppError> {
        let fields = [
            ("title", &self.title),
            ("subtitle", &self.subtitle),
            ("details_title", &self.details_title),
            ("details", &self.details),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(AppError::BadRequest(format!("{} is required", name)));
        }
        Ok(self)
    }
}

/// Parameters for creating or replacing a news item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateNewsParams {
    pub text: NewsText,
    pub main_photo: Option<String>,
    pub photo_urls: Vec<String>,
    pub city_id: Option<i32>,
    pub team_id: Option<i32>,
    pub match_id: Option<i32>,
    pub is_main_news: bool,
}

impl CreateNewsParams {
    pub fn from_dto(dto: SaveNewsDto) -> Result<Self, AppError> {
        let text = NewsText {
            title: dto.title,
            subtitle: dto.subtitle,
            details_title: dto.details_title,
            details: dto.details,
        }
        .validated()?;

        Ok(Self {
            text,
            main_photo: dto.main_photo.filter(|p| !p.trim().is_empty()),
            photo_urls: dto
                .photo_urls
                .into_iter()
                .filter(|p| !p.trim().is_empty())
                .collect(),
            city_id: dto.city_id,
            team_id: dto.team_id,
            match_id: dto.match_id,
            is_main_news: dto.is_main_news,
        })
    }
}

impl NewsText {
    pub fn from_content_dto(dto: SaveNewsContentDto) -> Result<Self, AppError> {
        Self {
            title: dto.title,
            subtitle: dto.subtitle,
            details_title: dto.details_title,
            details: dto.details,
        }
        .validated()
    }
}

/// A news row joined with its photos.
#[derive(Debug, Clone, PartialEq)]
pub struct NewsWithPhotos {
    pub news: entity::match_news::Model,
    pub photos: Vec<entity::match_news_photo::Model>,
}

impl NewsWithPhotos {
    /// Attaches photos from a map keyed by news id.
    pub fn join(
        items: Vec<entity::match_news::Model>,
        mut photos: HashMap<i32, Vec<entity::match_news_photo::Model>>,
    ) -> Vec<Self> {
        items
            .into_iter()
            .map(|news| {
                let photos = photos.remove(&news.id).unwrap_or_default();
                Self { news, photos }
            })
            .collect()
    }

    fn photo_dtos(photos: Vec<entity::match_news_photo::Model>) -> Vec<NewsPhotoDto> {
        photos
            .into_iter()
            .map(|p| NewsPhotoDto {
                id: p.id,
                photo_url: p.photo_url,
            })
            .collect()
    }

    pub fn into_dto(self) -> NewsDto {
        let n = self.news;
        NewsDto {
            id: n.id,
            title: n.title,
            subtitle: n.subtitle,
            main_photo: n.main_photo,
            details_title: n.details_title,
            details: n.details,
            match_id: n.match_id,
            city_id: n.city_id,
            team_id: n.team_id,
            is_main_news: n.is_main_news,
            published: n.published,
            created_date: n.created_date,
            photos: Self::photo_dtos(self.photos),
        }
    }

    /// Projects the item through the content row for `culture`, if any.
    pub fn into_localized_dto(
        self,
        culture: &str,
        content: Option<entity::match_news_content::Model>,
    ) -> LocalizedNewsDto {
        let n = self.news;
        let (title, subtitle, details_title, details) = match content {
            Some(c) => (
                Some(c.title),
                Some(c.subtitle),
                Some(c.details_title),
                Some(c.details),
            ),
            None => (None, None, None, None),
        };

        LocalizedNewsDto {
            id: n.id,
            culture: culture.to_string(),
            title,
            subtitle,
            details_title,
            details,
            main_photo: n.main_photo,
            match_id: n.match_id,
            city_id: n.city_id,
            team_id: n.team_id,
            is_main_news: n.is_main_news,
            created_date: n.created_date,
            photos: Self::photo_dtos(self.photos),
        }
    }

    pub fn into_detail_dto(self, contents: Vec<entity::match_news_content::Model>) -> NewsDetailDto {
        NewsDetailDto {
            news: self.into_dto(),
            contents: contents.into_iter().map(content_dto).collect(),
        }
    }
}

pub fn content_dto(c: entity::match_news_content::Model) -> NewsContentDto {
    NewsContentDto {
        id: c.id,
        culture: c.culture,
        title: c.title,
        subtitle: c.subtitle,
        details_title: c.details_title,
        details: c.details,
    }
}
