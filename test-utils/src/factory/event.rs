//! Factories for in-match events: goals, cards and squad entries.

use entity::card::CardType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating goals.
pub struct GoalFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::goal::Model,
}

impl<'a> GoalFactory<'a> {
    /// Creates a regular goal in the 10th minute.
    pub fn new(db: &'a DatabaseConnection, match_id: i32, team_id: i32, player_id: i32) -> Self {
        Self {
            db,
            entity: entity::goal::Model {
                id: 0,
                match_id,
                team_id,
                player_id,
                assist_player_id: None,
                minute: 10,
                is_penalty: false,
                is_own_goal: false,
            },
        }
    }

    pub fn assist(mut self, player_id: i32) -> Self {
        self.entity.assist_player_id = Some(player_id);
        self
    }

    pub fn minute(mut self, minute: i32) -> Self {
        self.entity.minute = minute;
        self
    }

    pub fn penalty(mut self) -> Self {
        self.entity.is_penalty = true;
        self
    }

    pub fn own_goal(mut self) -> Self {
        self.entity.is_own_goal = true;
        self
    }

    pub async fn build(self) -> Result<entity::goal::Model, DbErr> {
        let e = self.entity;
        entity::goal::ActiveModel {
            id: ActiveValue::NotSet,
            match_id: ActiveValue::Set(e.match_id),
            team_id: ActiveValue::Set(e.team_id),
            player_id: ActiveValue::Set(e.player_id),
            assist_player_id: ActiveValue::Set(e.assist_player_id),
            minute: ActiveValue::Set(e.minute),
            is_penalty: ActiveValue::Set(e.is_penalty),
            is_own_goal: ActiveValue::Set(e.is_own_goal),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a plain goal without assist.
pub async fn create_goal(
    db: &DatabaseConnection,
    match_id: i32,
    team_id: i32,
    player_id: i32,
) -> Result<entity::goal::Model, DbErr> {
    GoalFactory::new(db, match_id, team_id, player_id)
        .build()
        .await
}

/// Creates a card.
pub async fn create_card(
    db: &DatabaseConnection,
    match_id: i32,
    player_id: i32,
    card_type: CardType,
    minute: i32,
) -> Result<entity::card::Model, DbErr> {
    entity::card::ActiveModel {
        id: ActiveValue::NotSet,
        match_id: ActiveValue::Set(match_id),
        player_id: ActiveValue::Set(player_id),
        card_type: ActiveValue::Set(card_type),
        minute: ActiveValue::Set(minute),
    }
    .insert(db)
    .await
}

/// Creates a squad entry.
///
/// `starting` puts the player in the first eleven; otherwise the entry is a
/// substitute. `shirt_number` of 0 falls back to the player's own number.
pub async fn create_squad_entry(
    db: &DatabaseConnection,
    match_id: i32,
    player_id: i32,
    team_id: i32,
    starting: bool,
    shirt_number: i32,
) -> Result<entity::match_squad::Model, DbErr> {
    entity::match_squad::ActiveModel {
        id: ActiveValue::NotSet,
        match_id: ActiveValue::Set(match_id),
        player_id: ActiveValue::Set(player_id),
        team_id: ActiveValue::Set(team_id),
        is_starting11: ActiveValue::Set(starting),
        is_substitute: ActiveValue::Set(!starting),
        shirt_number: ActiveValue::Set(shirt_number),
        top_position: ActiveValue::Set(None),
        left_position: ActiveValue::Set(None),
    }
    .insert(db)
    .await
}
