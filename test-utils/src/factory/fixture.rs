//! Match factory for creating test match entities.

use crate::fixture;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test matches.
///
/// ```rust,ignore
/// let played = FixtureFactory::new(&db, league.id, week.id, home.id, away.id)
///     .score(2, 1)
///     .build()
///     .await?;
/// ```
pub struct FixtureFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::fixture::Model,
}

impl<'a> FixtureFactory<'a> {
    /// Creates an unplayed match at the fixture kick-off time.
    pub fn new(
        db: &'a DatabaseConnection,
        league_id: i32,
        week_id: i32,
        home_team_id: i32,
        away_team_id: i32,
    ) -> Self {
        let entity = fixture::fixture::entity_builder()
            .league_id(league_id)
            .week_id(week_id)
            .teams(home_team_id, away_team_id)
            .build();

        Self { db, entity }
    }

    pub fn group_id(mut self, group_id: i32) -> Self {
        self.entity.group_id = Some(group_id);
        self
    }

    pub fn match_date(mut self, match_date: DateTime<Utc>) -> Self {
        self.entity.match_date = match_date;
        self
    }

    /// Records a final score and marks the match as played.
    pub fn score(mut self, home: i32, away: i32) -> Self {
        self.entity.home_score = Some(home);
        self.entity.away_score = Some(away);
        self.entity.is_played = true;
        self.entity.status = entity::fixture::MatchStatus::Finished;
        self
    }

    pub fn man_of_the_match(mut self, player_id: i32) -> Self {
        self.entity.man_of_the_match_id = Some(player_id);
        self
    }

    pub async fn build(self) -> Result<entity::fixture::Model, DbErr> {
        let e = self.entity;
        entity::fixture::ActiveModel {
            id: ActiveValue::NotSet,
            league_id: ActiveValue::Set(e.league_id),
            week_id: ActiveValue::Set(e.week_id),
            group_id: ActiveValue::Set(e.group_id),
            home_team_id: ActiveValue::Set(e.home_team_id),
            away_team_id: ActiveValue::Set(e.away_team_id),
            match_date: ActiveValue::Set(e.match_date),
            home_score: ActiveValue::Set(e.home_score),
            away_score: ActiveValue::Set(e.away_score),
            is_played: ActiveValue::Set(e.is_played),
            status: ActiveValue::Set(e.status),
            match_url: ActiveValue::Set(e.match_url),
            man_of_the_match_id: ActiveValue::Set(e.man_of_the_match_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unplayed match.
pub async fn create_fixture(
    db: &DatabaseConnection,
    league_id: i32,
    week_id: i32,
    home_team_id: i32,
    away_team_id: i32,
) -> Result<entity::fixture::Model, DbErr> {
    FixtureFactory::new(db, league_id, week_id, home_team_id, away_team_id)
        .build()
        .await
}
