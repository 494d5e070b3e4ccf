use sea_orm::DatabaseConnection;

use crate::{
    model::news::{
        LocalizedNewsDto, NewsContentDto, NewsDetailDto, NewsDto, PublishStateDto,
        SaveNewsContentDto, SaveNewsDto, TranslateManyRequestDto, TranslateManyResponseDto,
        TranslateRequestDto, TranslateResponseDto,
    },
    server::{
        data::news::{NewsFilter, NewsRepository},
        error::AppError,
        integration::translator::{translate_many, Translator},
        model::news::{content_dto, CreateNewsParams, NewsText, DEFAULT_CULTURE},
    },
};

/// Source language assumed when a translate request names none.
pub const DEFAULT_SOURCE_LANGUAGE: &str = "Turkish";

fn required(value: &str, name: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", name)));
    }
    Ok(())
}

pub struct NewsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NewsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Published news, newest first.
    pub async fn actual(&self) -> Result<Vec<NewsDto>, AppError> {
        self.list(NewsFilter {
            only_published: true,
            ..Default::default()
        })
        .await
    }

    /// Published news with text taken from the content row of `culture`.
    pub async fn localized(&self, culture: Option<&str>) -> Result<Vec<LocalizedNewsDto>, AppError> {
        let culture = culture
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CULTURE);

        let repo = NewsRepository::new(self.db);
        let items = repo
            .list(NewsFilter {
                only_published: true,
                ..Default::default()
            })
            .await?;
        let ids: Vec<i32> = items.iter().map(|n| n.news.id).collect();
        let mut contents = repo.contents_for_culture(&ids, culture).await?;

        Ok(items
            .into_iter()
            .map(|item| {
                let content = contents.remove(&item.news.id);
                item.into_localized_dto(culture, content)
            })
            .collect())
    }

    pub async fn city(&self, city_id: i32, only_published: bool) -> Result<Vec<NewsDto>, AppError> {
        self.list(NewsFilter {
            city_id: Some(city_id),
            main_only: false,
            only_published,
        })
        .await
    }

    pub async fn main(&self, only_published: bool) -> Result<Vec<NewsDto>, AppError> {
        self.list(NewsFilter {
            city_id: None,
            main_only: true,
            only_published,
        })
        .await
    }

    pub async fn by_id(&self, id: i32) -> Result<NewsDto, AppError> {
        let item = NewsRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        Ok(item.into_dto())
    }

    /// Every item regardless of publish state.
    pub async fn admin_list(&self) -> Result<Vec<NewsDto>, AppError> {
        self.list(NewsFilter::default()).await
    }

    /// One item with all of its localized rows.
    pub async fn admin_get(&self, id: i32) -> Result<NewsDetailDto, AppError> {
        let repo = NewsRepository::new(self.db);
        let item = repo.find_by_id(id).await?.ok_or_else(|| not_found(id))?;
        let contents = repo.contents_for(id).await?;

        Ok(item.into_detail_dto(contents))
    }

    pub async fn create(&self, dto: SaveNewsDto) -> Result<NewsDto, AppError> {
        let params = CreateNewsParams::from_dto(dto)?;
        let item = NewsRepository::new(self.db).create(params).await?;

        tracing::info!(news_id = item.news.id, "News created");

        Ok(item.into_dto())
    }

    pub async fn update(&self, id: i32, dto: SaveNewsDto) -> Result<NewsDto, AppError> {
        let params = CreateNewsParams::from_dto(dto)?;
        let item = NewsRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| not_found(id))?;

        tracing::info!(news_id = id, "News updated");

        Ok(item.into_dto())
    }

    pub async fn upsert_content(
        &self,
        id: i32,
        culture: &str,
        dto: SaveNewsContentDto,
    ) -> Result<NewsContentDto, AppError> {
        required(culture, "culture")?;
        let text = NewsText::from_content_dto(dto)?;

        let repo = NewsRepository::new(self.db);
        if repo.find_by_id(id).await?.is_none() {
            return Err(not_found(id));
        }
        let content = repo.upsert_content(id, culture.trim(), text).await?;

        Ok(content_dto(content))
    }

    pub async fn toggle_published(&self, id: i32) -> Result<PublishStateDto, AppError> {
        let published = NewsRepository::new(self.db)
            .toggle_published(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        tracing::info!(news_id = id, published, "News publish state changed");

        Ok(PublishStateDto { id, published })
    }

    pub async fn delete_photo(&self, photo_id: i32) -> Result<(), AppError> {
        if !NewsRepository::new(self.db).delete_photo(photo_id).await? {
            return Err(AppError::NotFound(format!(
                "News photo {} not found",
                photo_id
            )));
        }
        Ok(())
    }

    async fn list(&self, filter: NewsFilter) -> Result<Vec<NewsDto>, AppError> {
        let items = NewsRepository::new(self.db).list(filter).await?;
        Ok(items.into_iter().map(|n| n.into_dto()).collect())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("News {} not found", id))
}

/// Machine translation of news text for editors.
pub struct TranslationService<'a> {
    translator: Option<&'a dyn Translator>,
}

impl<'a> TranslationService<'a> {
    pub fn new(translator: Option<&'a dyn Translator>) -> Self {
        Self { translator }
    }

    fn translator(&self) -> Result<&'a dyn Translator, AppError> {
        self.translator
            .ok_or_else(|| AppError::Unavailable("Translation is not configured".to_string()))
    }

    pub async fn translate(
        &self,
        request: TranslateRequestDto,
    ) -> Result<TranslateResponseDto, AppError> {
        required(&request.text, "text")?;
        required(&request.target_language, "target_language")?;
        let translator = self.translator()?;

        let source = source_language(request.source_language.as_deref());
        let translated_text = translator
            .translate(&request.text, request.target_language.trim(), source)
            .await?;

        Ok(TranslateResponseDto { translated_text })
    }

    pub async fn translate_many(
        &self,
        request: TranslateManyRequestDto,
    ) -> Result<TranslateManyResponseDto, AppError> {
        required(&request.text, "text")?;
        let targets: Vec<String> = request
            .target_languages
            .iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        if targets.is_empty() {
            return Err(AppError::BadRequest(
                "At least one target language is required".to_string(),
            ));
        }
        let translator = self.translator()?;

        let source = source_language(request.source_language.as_deref());
        let translations = translate_many(translator, &request.text, &targets, source).await?;

        Ok(TranslateManyResponseDto { translations })
    }
}

fn source_language(source: Option<&str>) -> &str {
    source
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_SOURCE_LANGUAGE)
}
