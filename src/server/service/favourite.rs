use sea_orm::DatabaseConnection;

use crate::{
    model::favourite::{
        FavouriteResultDto, FavouriteTeamRequestDto, IsFavouriteDto, PushSendDto, SubscribeAllDto,
    },
    server::{
        data::favourite::FavouriteRepository,
        error::AppError,
        integration::notifier::{
            all_users_topic, send_to_all_users, team_topic, Notification, Notifier,
        },
    },
};

fn result(already: bool, message: &str) -> FavouriteResultDto {
    FavouriteResultDto {
        success: true,
        already,
        message: message.to_string(),
    }
}

fn require_team(team_id: i32) -> Result<(), AppError> {
    if team_id <= 0 {
        return Err(AppError::BadRequest("team_id must be positive".to_string()));
    }
    Ok(())
}

fn require_text(value: &str, name: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", name)));
    }
    Ok(())
}

/// Favourite teams of a device and the push topics that follow them.
pub struct FavouriteService<'a> {
    db: &'a DatabaseConnection,
    notifier: &'a dyn Notifier,
}

impl<'a> FavouriteService<'a> {
    pub fn new(db: &'a DatabaseConnection, notifier: &'a dyn Notifier) -> Self {
        Self { db, notifier }
    }

    /// Subscribes a device to the broadcast topic of its language.
    pub async fn add_user_to_all(&self, dto: SubscribeAllDto) -> Result<FavouriteResultDto, AppError> {
        require_text(&dto.user_token, "user_token")?;

        let topic = all_users_topic(&dto.culture);
        self.notifier
            .subscribe(&[dto.user_token], &topic)
            .await
            .map_err(|e| AppError::Unavailable(format!("Subscription failed: {}", e)))?;

        Ok(result(false, "Subscribed to all users"))
    }

    /// Stores the favourite, then subscribes the device to the team topic.
    ///
    /// A failed subscription keeps the stored row.
    pub async fn add_team(&self, dto: FavouriteTeamRequestDto) -> Result<FavouriteResultDto, AppError> {
        require_team(dto.team_id)?;
        require_text(&dto.user_token, "user_token")?;

        let repo = FavouriteRepository::new(self.db);
        if repo
            .find_by_token(dto.team_id, &dto.user_token)
            .await?
            .is_some()
        {
            return Ok(result(true, "Team is already a favourite"));
        }

        repo.create(dto.team_id, &dto.user_token, &dto.mac_id).await?;

        self.notifier
            .subscribe(&[dto.user_token], &team_topic(dto.team_id, &dto.culture))
            .await
            .map_err(|e| AppError::Unavailable(format!("Subscription failed: {}", e)))?;

        Ok(result(false, "Team added to favourites"))
    }

    pub async fn remove_team(
        &self,
        dto: FavouriteTeamRequestDto,
    ) -> Result<FavouriteResultDto, AppError> {
        require_team(dto.team_id)?;
        require_text(&dto.user_token, "user_token")?;

        let repo = FavouriteRepository::new(self.db);
        let Some(row) = repo.find_by_mac(dto.team_id, &dto.mac_id).await? else {
            return Ok(result(true, "Team is not a favourite"));
        };

        repo.delete(row.id).await?;

        self.notifier
            .unsubscribe(&[dto.user_token], &team_topic(dto.team_id, &dto.culture))
            .await
            .map_err(|e| AppError::Unavailable(format!("Unsubscription failed: {}", e)))?;

        Ok(result(false, "Team removed from favourites"))
    }

    pub async fn is_favourite(&self, team_id: i32, mac_id: &str) -> Result<IsFavouriteDto, AppError> {
        require_team(team_id)?;
        require_text(mac_id, "mac_id")?;

        let is_favourite = FavouriteRepository::new(self.db)
            .is_favourite(team_id, mac_id)
            .await?;

        Ok(IsFavouriteDto { is_favourite })
    }

    /// Broadcasts a bilingual notification to every subscribed device.
    pub async fn push_send(&self, dto: PushSendDto) -> Result<(), AppError> {
        require_text(&dto.title_tr, "title_tr")?;
        require_text(&dto.message_tr, "message_tr")?;
        require_text(&dto.title_en, "title_en")?;
        require_text(&dto.message_en, "message_en")?;

        let notification =
            Notification::new(dto.title_tr, dto.message_tr, dto.title_en, dto.message_en);
        send_to_all_users(self.notifier, &notification)
            .await
            .map_err(|e| AppError::Unavailable(format!("Push send failed: {}", e)))?;

        tracing::info!("Broadcast notification sent");

        Ok(())
    }
}
