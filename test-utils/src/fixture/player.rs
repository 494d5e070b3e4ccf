//! Player fixtures for creating in-memory test data.

use chrono::NaiveDate;
use entity::player;

/// Default first name for test players.
pub const DEFAULT_FIRST_NAME: &str = "Test";

/// Default last name for test players.
pub const DEFAULT_LAST_NAME: &str = "Player";

/// Creates a player entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - team_id, user_id: `None`
/// - first_name / last_name: `"Test"` / `"Player"`
/// - all optional profile fields: `None`
/// - licensed, is_archived: `false`
pub fn entity() -> player::Model {
    entity_builder().build()
}

/// Creates a player entity builder for customization.
pub fn entity_builder() -> PlayerEntityBuilder {
    PlayerEntityBuilder::default()
}

/// Builder for customized player entity models.
pub struct PlayerEntityBuilder {
    model: player::Model,
}

impl Default for PlayerEntityBuilder {
    fn default() -> Self {
        Self {
            model: player::Model {
                id: 1,
                team_id: None,
                user_id: None,
                first_name: DEFAULT_FIRST_NAME.to_string(),
                last_name: DEFAULT_LAST_NAME.to_string(),
                position: None,
                number: None,
                icon: None,
                date_of_birth: None,
                nationality: None,
                height: None,
                weight: None,
                preferred_foot: None,
                player_type: None,
                player_value: None,
                licensed: false,
                is_archived: false,
            },
        }
    }
}

impl PlayerEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.model.id = id;
        self
    }

    pub fn team_id(mut self, team_id: Option<i32>) -> Self {
        self.model.team_id = team_id;
        self
    }

    pub fn user_id(mut self, user_id: Option<String>) -> Self {
        self.model.user_id = user_id;
        self
    }

    /// Sets first and last name together.
    pub fn name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.model.first_name = first.into();
        self.model.last_name = last.into();
        self
    }

    pub fn number(mut self, number: Option<i32>) -> Self {
        self.model.number = number;
        self
    }

    pub fn icon(mut self, icon: Option<String>) -> Self {
        self.model.icon = icon;
        self
    }

    pub fn date_of_birth(mut self, date_of_birth: Option<NaiveDate>) -> Self {
        self.model.date_of_birth = date_of_birth;
        self
    }

    pub fn player_value(mut self, player_value: Option<f64>) -> Self {
        self.model.player_value = player_value;
        self
    }

    pub fn is_archived(mut self, is_archived: bool) -> Self {
        self.model.is_archived = is_archived;
        self
    }

    /// Builds and returns the player entity model.
    pub fn build(self) -> player::Model {
        self.model
    }
}
