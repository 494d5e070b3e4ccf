//! Shared helper utilities for factory methods.
//!
//! Provides unique id generation plus shortcuts for the league hierarchy most
//! tests start from.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a city, a league in it, one season and the first week of that season.
///
/// All entities use factory defaults; use the individual factories when a test
/// needs specific dates or names.
///
/// # Returns
/// - `Ok((city, league, season, week))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_league_with_week(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::city::Model,
        entity::league::Model,
        entity::season::Model,
        entity::week::Model,
    ),
    DbErr,
> {
    let city = crate::factory::city::create_city(db).await?;
    let league = crate::factory::league::create_league(db, city.id).await?;
    let season = crate::factory::season::create_season(db, league.id).await?;
    let week = crate::factory::week::create_week(db, league.id, season.id).await?;

    Ok((city, league, season, week))
}

/// Creates two teams in a city and a played match between them.
///
/// # Arguments
/// - `db` - Database connection
/// - `week` - Week the match belongs to (league is taken from it)
/// - `city_id` - City for both teams
/// - `home_score` / `away_score` - Final score
///
/// # Returns
/// - `Ok((home, away, match))` - Created entities
pub async fn create_played_match(
    db: &DatabaseConnection,
    week: &entity::week::Model,
    city_id: i32,
    home_score: i32,
    away_score: i32,
) -> Result<
    (
        entity::team::Model,
        entity::team::Model,
        entity::fixture::Model,
    ),
    DbErr,
> {
    let home = crate::factory::team::create_team(db, city_id).await?;
    let away = crate::factory::team::create_team(db, city_id).await?;
    let fixture = crate::factory::fixture::FixtureFactory::new(
        db,
        week.league_id,
        week.id,
        home.id,
        away.id,
    )
    .score(home_score, away_score)
    .build()
    .await?;

    Ok((home, away, fixture))
}
