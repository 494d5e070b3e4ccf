//! Transfer request texts and the per-user list projection.

use entity::{
    app_user::UserType,
    player_transfer_request::{self, TransferStatus},
};
use std::collections::HashMap;

use crate::{
    model::transfer::{TransferListItemDto, TransferRequestDto},
    server::{
        integration::notifier::Notification,
        model::news::{CreateNewsParams, NewsText},
    },
};

pub fn status_label(status: &TransferStatus) -> &'static str {
    match status {
        TransferStatus::Pending => "pending",
        TransferStatus::Approved => "approved",
        TransferStatus::Rejected => "rejected",
    }
}

pub fn request_dto(request: player_transfer_request::Model) -> TransferRequestDto {
    TransferRequestDto {
        id: request.id,
        player_user_id: request.player_user_id,
        requested_captain_user_id: request.requested_captain_user_id,
        approval_captain_user_id: request.approval_captain_user_id,
        status: status_label(&request.status).to_string(),
        request_date: request.request_date,
        approval_date: request.approval_date,
        rejection_date: request.rejection_date,
    }
}

pub mod notice {
    //! Push texts sent along the workflow.

    use super::Notification;

    /// To a player whose team is free and has no captain to approve.
    pub fn free_team_offer() -> Notification {
        Notification::new(
            "Transfer Teklifi (Serbest Takım)",
            "Serbest takıma transfer teklifiniz var. Onaylamak için uygulamadan kontrol edebilirsiniz.",
            "Transfer Offer (Free Team)",
            "You have a transfer offer to a free team. Please check the app to approve.",
        )
    }

    pub fn offer_to_captain() -> Notification {
        Notification::new(
            "Yeni Transfer Teklifi",
            "Bir oyuncunuz için yeni bir transfer teklifi aldınız.",
            "New Transfer Offer",
            "You have received a new transfer offer for one of your players.",
        )
    }

    pub fn offer_to_player() -> Notification {
        Notification::new(
            "Transfer Teklifi",
            "Sizin için yeni bir transfer teklifi yapıldı.",
            "Transfer Offer",
            "A new transfer offer has been made for you.",
        )
    }

    pub fn approved_to_player() -> Notification {
        Notification::new(
            "Transfer Teklifiniz Onaylandı",
            "Bir takıma transfer teklifiniz onaylandı.",
            "Your Transfer Offer Approved",
            "Your transfer offer to a team has been approved.",
        )
    }

    pub fn completed_to_captain(player_name: &str) -> Notification {
        Notification::new(
            "Transfer Tamamlandı",
            format!("{} takımınıza transfer oldu.", player_name),
            "Transfer Completed",
            format!("{} has been transferred to your team.", player_name),
        )
    }

    pub fn rejected_to_player() -> Notification {
        Notification::new(
            "Transfer Teklifiniz Reddedildi",
            "Bir takıma transfer teklifiniz reddedildi.",
            "Your Transfer Offer Rejected",
            "Your transfer offer to a team has been rejected.",
        )
    }
}

/// What a transfer news item is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferNewsKind {
    Talks,
    Completed,
}

/// Builds the news item published when talks start or a transfer completes.
///
/// The team logo and the player icon become the item's photos.
pub fn transfer_news(
    kind: TransferNewsKind,
    player: &entity::player::Model,
    team: &entity::team::Model,
    placeholder_image: &str,
) -> CreateNewsParams {
    let player_name = player.full_name();
    let text = match kind {
        TransferNewsKind::Talks => NewsText {
            title: "Transfer talks".to_string(),
            subtitle: format!("{} in talks with {}", player_name, team.name),
            details_title: "Transfer negotiations".to_string(),
            details: format!(
                "Transfer talks between {} and {} have started.",
                player_name, team.name
            ),
        },
        TransferNewsKind::Completed => NewsText {
            title: "Transfer completed".to_string(),
            subtitle: format!("{} signed with {}", player_name, team.name),
            details_title: "Official transfer".to_string(),
            details: format!(
                "{} has officially signed with {}.",
                player_name, team.name
            ),
        },
    };

    let photo_urls = [team.logo_url.clone(), player.icon.clone()]
        .into_iter()
        .flatten()
        .filter(|url| !url.is_empty())
        .collect();

    CreateNewsParams {
        text,
        main_photo: Some(placeholder_image.to_string()),
        photo_urls,
        city_id: Some(team.city_id),
        team_id: Some(team.id),
        match_id: None,
        is_main_news: false,
    }
}

/// Lookups needed to describe requests to a user.
#[derive(Debug, Default)]
pub struct TransferListContext {
    /// App users by id.
    pub users: HashMap<String, entity::app_user::Model>,
    /// Player rows by linked user id.
    pub players_by_user: HashMap<String, entity::player::Model>,
    pub teams: HashMap<i32, entity::team::Model>,
}

impl TransferListContext {
    fn user_name(&self, user_id: &str) -> Option<String> {
        self.users
            .get(user_id)
            .map(|u| format!("{} {}", u.first_name, u.last_name))
    }

    fn team_of(&self, user_id: &str) -> (Option<i32>, Option<String>) {
        let team_id = self.players_by_user.get(user_id).and_then(|p| p.team_id);
        let team_name = team_id.and_then(|id| self.teams.get(&id)).map(|t| t.name.clone());
        (team_id, team_name)
    }
}

/// Line shown next to a request in `viewer`'s list.
pub fn list_message(
    viewer: &entity::app_user::Model,
    request: &player_transfer_request::Model,
) -> &'static str {
    if viewer.user_type == UserType::Player || request.player_user_id == viewer.id {
        "Transfer offer received"
    } else if request.requested_captain_user_id == viewer.id {
        "Transfer offer you made"
    } else {
        "Transfer offer for a player in your team"
    }
}

/// Whether `viewer` can act on the request.
pub fn can_decide(viewer_id: &str, request: &player_transfer_request::Model) -> bool {
    request.status == TransferStatus::Pending
        && request.approval_captain_user_id.as_deref() == Some(viewer_id)
}

pub fn list_item(
    viewer: &entity::app_user::Model,
    request: player_transfer_request::Model,
    ctx: &TransferListContext,
) -> TransferListItemDto {
    let message = list_message(viewer, &request).to_string();
    let button_show = can_decide(&viewer.id, &request);
    let player_name = ctx
        .players_by_user
        .get(&request.player_user_id)
        .map(|p| p.full_name())
        .unwrap_or_else(|| "Unknown".to_string());
    let (requested_team_id, requested_team_name) = ctx.team_of(&request.requested_captain_user_id);
    let (approval_team_id, approval_team_name) = match &request.approval_captain_user_id {
        Some(id) => ctx.team_of(id),
        None => (None, None),
    };

    TransferListItemDto {
        id: request.id,
        player_name,
        requested_captain_name: ctx.user_name(&request.requested_captain_user_id),
        approval_captain_name: request
            .approval_captain_user_id
            .as_deref()
            .and_then(|id| ctx.user_name(id)),
        requested_team_id,
        requested_team_name,
        approval_team_id,
        approval_team_name,
        status: status_label(&request.status).to_string(),
        player_user_id: request.player_user_id,
        requested_captain_user_id: request.requested_captain_user_id,
        approval_captain_user_id: request.approval_captain_user_id,
        request_date: request.request_date,
        approval_date: request.approval_date,
        rejection_date: request.rejection_date,
        message,
        button_show,
    }
}
