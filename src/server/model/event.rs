//! Projections of goals, cards and squad rows for match pages.

use entity::card::CardType;
use std::collections::HashMap;

use crate::model::fixture::{CardEventDto, GoalEventDto, ManOfTheMatchDto, SquadPlayerDto};

pub fn card_label(card_type: &CardType) -> &'static str {
    match card_type {
        CardType::Yellow => "yellow",
        CardType::Red => "red",
    }
}

/// Players and teams referenced by the events of one or more matches.
#[derive(Debug, Default)]
pub struct EventLookup {
    pub players: HashMap<i32, entity::player::Model>,
    pub teams: HashMap<i32, entity::team::Model>,
}

impl EventLookup {
    fn player_name(&self, player_id: i32) -> String {
        self.players
            .get(&player_id)
            .map(|p| p.full_name())
            .unwrap_or_default()
    }

    fn team_name_of_player(&self, player_id: i32) -> Option<String> {
        self.players
            .get(&player_id)
            .and_then(|p| p.team_id)
            .and_then(|id| self.teams.get(&id))
            .map(|t| t.name.clone())
    }

    pub fn goal(&self, goal: &entity::goal::Model) -> GoalEventDto {
        let scorer = self.players.get(&goal.player_id);
        GoalEventDto {
            id: goal.id,
            minute: goal.minute,
            player_id: goal.player_id,
            player_name: self.player_name(goal.player_id),
            player_icon: scorer.and_then(|p| p.icon.clone()),
            assist_player_id: goal.assist_player_id,
            assist_player_name: goal.assist_player_id.map(|id| self.player_name(id)),
            team_id: goal.team_id,
            team_name: self
                .teams
                .get(&goal.team_id)
                .map(|t| t.name.clone())
                .unwrap_or_default(),
            is_penalty: goal.is_penalty,
            is_own_goal: goal.is_own_goal,
        }
    }

    pub fn card(&self, card: &entity::card::Model) -> CardEventDto {
        CardEventDto {
            id: card.id,
            minute: card.minute,
            player_id: card.player_id,
            player_name: self.player_name(card.player_id),
            team_name: self.team_name_of_player(card.player_id),
            card_type: card_label(&card.card_type).to_string(),
        }
    }

    /// A squad row; a shirt number of 0 falls back to the player's own number.
    pub fn squad_player(&self, squad: &entity::match_squad::Model) -> SquadPlayerDto {
        let player = self.players.get(&squad.player_id);
        let number = if squad.shirt_number == 0 {
            player.and_then(|p| p.number)
        } else {
            Some(squad.shirt_number)
        };

        SquadPlayerDto {
            player_id: squad.player_id,
            name: self.player_name(squad.player_id),
            number,
            position: player.and_then(|p| p.position.clone()),
            icon: player.and_then(|p| p.icon.clone()),
            top_position: squad.top_position,
            left_position: squad.left_position,
        }
    }

    /// The awarded player with what they did in this match.
    ///
    /// Own goals do not count towards `goals`.
    pub fn man_of_the_match(
        &self,
        player_id: i32,
        goals: &[entity::goal::Model],
    ) -> ManOfTheMatchDto {
        ManOfTheMatchDto {
            player_id,
            player_name: self.player_name(player_id),
            icon: self.players.get(&player_id).and_then(|p| p.icon.clone()),
            team_name: self.team_name_of_player(player_id),
            goals: goals
                .iter()
                .filter(|g| g.player_id == player_id && !g.is_own_goal)
                .count() as i32,
            assists: goals
                .iter()
                .filter(|g| g.assist_player_id == Some(player_id))
                .count() as i32,
        }
    }
}
