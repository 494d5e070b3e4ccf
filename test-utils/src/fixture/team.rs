//! Team fixtures for creating in-memory test data.

use entity::team;

/// Default test team name.
pub const DEFAULT_NAME: &str = "Test Team";

/// Default city ID for teams.
pub const DEFAULT_CITY_ID: i32 = 1;

/// Creates a team entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - city_id: `1`
/// - name: `"Test Team"`
/// - logo_url, manager: `None`
/// - is_free: `false`
pub fn entity() -> team::Model {
    entity_builder().build()
}

/// Creates a team entity builder for customization.
pub fn entity_builder() -> TeamEntityBuilder {
    TeamEntityBuilder::default()
}

/// Builder for customized team entity models.
pub struct TeamEntityBuilder {
    id: i32,
    city_id: i32,
    name: String,
    logo_url: Option<String>,
    manager: Option<String>,
    is_free: bool,
}

impl Default for TeamEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            city_id: DEFAULT_CITY_ID,
            name: DEFAULT_NAME.to_string(),
            logo_url: None,
            manager: None,
            is_free: false,
        }
    }
}

impl TeamEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn city_id(mut self, city_id: i32) -> Self {
        self.city_id = city_id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn logo_url(mut self, logo_url: Option<String>) -> Self {
        self.logo_url = logo_url;
        self
    }

    pub fn manager(mut self, manager: Option<String>) -> Self {
        self.manager = manager;
        self
    }

    pub fn is_free(mut self, is_free: bool) -> Self {
        self.is_free = is_free;
        self
    }

    /// Builds and returns the team entity model.
    pub fn build(self) -> team::Model {
        team::Model {
            id: self.id,
            city_id: self.city_id,
            name: self.name,
            logo_url: self.logo_url,
            manager: self.manager,
            is_free: self.is_free,
        }
    }
}
