use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{City, Team};
///
/// let test = TestBuilder::new()
///     .with_table(City)
///     .with_table(Team)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using
    /// SQLite syntax. Tables with foreign keys must be added after the tables
    /// they reference, since SQLite enforces the constraints.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the scheduling tables: cities, leagues, seasons, groups, weeks and teams.
    ///
    /// Includes ranking statuses and penalties since standings need them.
    pub fn with_league_tables(self) -> Self {
        self.with_table(City)
            .with_table(CityRestriction)
            .with_table(League)
            .with_table(Season)
            .with_table(LeagueGroup)
            .with_table(Week)
            .with_table(LeagueRankingStatus)
            .with_table(Team)
            .with_table(TeamPenalty)
    }

    /// Adds everything needed for match data on top of `with_league_tables()`.
    ///
    /// - AppUser, Player
    /// - Fixture, Goal, Card
    /// - MatchSquad, MatchSquadFormation, MatchSubstitution
    /// - PlayerSuspension, WeekBestTeam, WeekBestTeamPlayer
    pub fn with_match_tables(self) -> Self {
        self.with_league_tables()
            .with_table(AppUser)
            .with_table(Player)
            .with_table(Fixture)
            .with_table(Goal)
            .with_table(Card)
            .with_table(MatchSquad)
            .with_table(MatchSquadFormation)
            .with_table(MatchSubstitution)
            .with_table(PlayerSuspension)
            .with_table(WeekBestTeam)
            .with_table(WeekBestTeamPlayer)
    }

    /// Adds the news tables on top of `with_match_tables()`.
    pub fn with_news_tables(self) -> Self {
        self.with_match_tables()
            .with_table(MatchNews)
            .with_table(MatchNewsPhoto)
            .with_table(MatchNewsContent)
    }

    /// Adds transfer requests and favourites on top of `with_news_tables()`.
    ///
    /// Transfers publish news, so the news tables are always present.
    pub fn with_transfer_tables(self) -> Self {
        self.with_news_tables()
            .with_table(PlayerTransferRequest)
            .with_table(FavouriteTeam)
    }

    /// Adds app settings, static content and advertisements.
    ///
    /// Requires the city table, which is added here as well.
    pub fn with_content_tables(self) -> Self {
        self.with_table(City)
            .with_table(AppSetting)
            .with_table(StaticKeyValue)
            .with_table(RichStaticContent)
            .with_table(Advertisement)
            .with_table(PhotoGallery)
            .with_table(Story)
            .with_table(StoryContent)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
