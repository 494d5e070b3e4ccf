use entity::player_transfer_request::TransferStatus;
use sea_orm::DatabaseConnection;

use crate::{
    model::transfer::{CreateTransferRequestDto, TransferListItemDto, TransferRequestDto},
    server::{
        data::{
            city::CityRepository, news::NewsRepository, player::PlayerRepository,
            team::TeamRepository, transfer::TransferRepository, user::AppUserRepository,
        },
        error::AppError,
        integration::notifier::{Notification, Notifier},
        model::transfer::{
            list_item, notice, request_dto, transfer_news, TransferListContext, TransferNewsKind,
        },
    },
};

/// Player transfer workflow: request, approve, reject, list.
///
/// Push and news side effects never fail a transition; their errors are logged.
pub struct TransferService<'a> {
    db: &'a DatabaseConnection,
    notifier: &'a dyn Notifier,
    placeholder_image: &'a str,
}

impl<'a> TransferService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        notifier: &'a dyn Notifier,
        placeholder_image: &'a str,
    ) -> Self {
        Self {
            db,
            notifier,
            placeholder_image,
        }
    }

    /// Opens a pending request for a player to join the requested captain's team.
    ///
    /// The checks run in a fixed order and the first failure wins:
    /// same team, pending request, unknown player or team, city ban, missing captain.
    pub async fn create(
        &self,
        dto: CreateTransferRequestDto,
    ) -> Result<TransferRequestDto, AppError> {
        let players = PlayerRepository::new(self.db);
        let player = players.find_by_user_id(&dto.player_user_id).await?;
        let requested = players
            .find_by_user_id(&dto.requested_captain_user_id)
            .await?;

        let player_team_id = player.as_ref().and_then(|p| p.team_id);
        let requested_team_id = requested.as_ref().and_then(|p| p.team_id);
        if player_team_id == requested_team_id {
            return Err(AppError::BadRequest(
                "Player is already in the requested team".to_string(),
            ));
        }

        let transfers = TransferRepository::new(self.db);
        if transfers
            .has_pending_for_player(&dto.player_user_id)
            .await?
        {
            return Err(already_pending());
        }

        let (Some(player), Some(team_id)) = (player, player_team_id) else {
            return Err(AppError::BadRequest("Player has no team".to_string()));
        };
        let team = TeamRepository::new(self.db)
            .find_by_id(team_id)
            .await?
            .ok_or_else(|| AppError::BadRequest("Player has no team".to_string()))?;

        if !team.is_free
            && CityRepository::new(self.db)
                .is_transfer_banned(team.city_id)
                .await?
        {
            return Err(AppError::BadRequest(
                "Transfers are closed in this city".to_string(),
            ));
        }

        let captain = AppUserRepository::new(self.db)
            .find_captain_of_team(team.id)
            .await?;
        let approval_user_id = match (&captain, team.is_free) {
            (Some(captain), _) => captain.id.clone(),
            (None, true) => dto.player_user_id.clone(),
            (None, false) => {
                return Err(AppError::BadRequest(
                    "The player's team has no captain".to_string(),
                ))
            }
        };

        let request = transfers
            .create(
                &dto.player_user_id,
                &dto.requested_captain_user_id,
                &approval_user_id,
            )
            .await?
            .ok_or_else(already_pending)?;

        tracing::info!(
            request_id = request.id,
            player = %dto.player_user_id,
            approver = %approval_user_id,
            "Transfer request created"
        );

        match captain {
            Some(captain) => {
                self.notify(&captain.id, &notice::offer_to_captain()).await?;
                self.notify(&dto.player_user_id, &notice::offer_to_player())
                    .await?;
            }
            None => {
                self.notify(&dto.player_user_id, &notice::free_team_offer())
                    .await?;
            }
        }

        // Talks are announced for the team the player is leaving.
        self.publish(TransferNewsKind::Talks, &player, &team).await;

        Ok(request_dto(request))
    }

    /// Approves a pending request and moves the player to the requested captain's team.
    pub async fn approve(&self, request_id: i32) -> Result<TransferRequestDto, AppError> {
        let transfers = TransferRepository::new(self.db);
        let request = self.pending(&transfers, request_id).await?;

        let players = PlayerRepository::new(self.db);
        let player = players.find_by_user_id(&request.player_user_id).await?;
        let requested = players
            .find_by_user_id(&request.requested_captain_user_id)
            .await?;
        let new_team_id = requested.as_ref().and_then(|p| p.team_id);
        let player_move = match (&player, &requested) {
            (Some(player), Some(_)) => Some((player.id, new_team_id)),
            _ => None,
        };

        let player_user_id = request.player_user_id.clone();
        let captain_user_id = request.requested_captain_user_id.clone();
        let approved = transfers
            .approve(&request, player_move)
            .await?
            .ok_or_else(|| not_pending(request_id))?;

        tracing::info!(request_id = approved.id, "Transfer request approved");

        self.notify(&player_user_id, &notice::approved_to_player())
            .await?;
        let player_name = player
            .as_ref()
            .map(|p| p.full_name())
            .unwrap_or_default();
        self.notify(
            &captain_user_id,
            &notice::completed_to_captain(&player_name),
        )
        .await?;

        if let (Some(player), Some(team_id)) = (player, new_team_id) {
            if let Some(team) = TeamRepository::new(self.db).find_by_id(team_id).await? {
                self.publish(TransferNewsKind::Completed, &player, &team)
                    .await;
            }
        }

        Ok(request_dto(approved))
    }

    pub async fn reject(&self, request_id: i32) -> Result<TransferRequestDto, AppError> {
        let transfers = TransferRepository::new(self.db);
        let request = self.pending(&transfers, request_id).await?;

        let player_user_id = request.player_user_id.clone();
        let rejected = transfers
            .reject(request.id)
            .await?
            .ok_or_else(|| not_pending(request_id))?;

        tracing::info!(request_id = rejected.id, "Transfer request rejected");

        self.notify(&player_user_id, &notice::rejected_to_player())
            .await?;

        Ok(request_dto(rejected))
    }

    /// Requests involving a user, newest first, described from their point of view.
    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<TransferListItemDto>, AppError> {
        let users = AppUserRepository::new(self.db);
        let viewer = users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

        let requests = TransferRepository::new(self.db).get_for_user(user_id).await?;
        if requests.is_empty() {
            return Ok(Vec::new());
        }

        let user_ids: Vec<String> = requests
            .iter()
            .flat_map(|r| {
                [
                    Some(r.player_user_id.clone()),
                    Some(r.requested_captain_user_id.clone()),
                    r.approval_captain_user_id.clone(),
                ]
            })
            .flatten()
            .collect();

        let players_by_user = PlayerRepository::new(self.db)
            .get_by_user_ids(user_ids.iter().cloned())
            .await?;
        let teams = TeamRepository::new(self.db)
            .get_by_ids(players_by_user.values().filter_map(|p| p.team_id))
            .await?;
        let ctx = TransferListContext {
            users: users.get_by_ids(user_ids).await?,
            players_by_user,
            teams,
        };

        Ok(requests
            .into_iter()
            .map(|r| list_item(&viewer, r, &ctx))
            .collect())
    }

    async fn pending(
        &self,
        transfers: &TransferRepository<'_>,
        request_id: i32,
    ) -> Result<entity::player_transfer_request::Model, AppError> {
        let request = transfers.find_by_id(request_id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Transfer request {} not found", request_id))
        })?;

        if request.status != TransferStatus::Pending {
            return Err(not_pending(request_id));
        }

        Ok(request)
    }

    /// Pushes to a user's device. Users without a push target are skipped.
    async fn notify(&self, user_id: &str, notification: &Notification) -> Result<(), AppError> {
        let Some(user) = AppUserRepository::new(self.db).find_by_id(user_id).await? else {
            return Ok(());
        };
        let Some(external_id) = user.external_id.filter(|id| !id.is_empty()) else {
            return Ok(());
        };

        if let Err(e) = self.notifier.send_to_user(&external_id, notification).await {
            tracing::warn!(user = %user_id, "Failed to send transfer notification: {}", e);
        }

        Ok(())
    }

    async fn publish(
        &self,
        kind: TransferNewsKind,
        player: &entity::player::Model,
        team: &entity::team::Model,
    ) {
        let params = transfer_news(kind, player, team, self.placeholder_image);
        if let Err(e) = NewsRepository::new(self.db).create(params).await {
            tracing::warn!(team_id = team.id, "Failed to publish transfer news: {}", e);
        }
    }
}

fn already_pending() -> AppError {
    AppError::BadRequest("Player already has a pending transfer request".to_string())
}

/// The request was decided already, possibly by a concurrent call.
fn not_pending(request_id: i32) -> AppError {
    AppError::BadRequest(format!(
        "Transfer request {} is no longer pending",
        request_id
    ))
}
