//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` struct for customization and a `create_*`
//! shorthand for defaults. Factories insert into the database, so parents
//! must exist first (SQLite enforces foreign keys).
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let (city, league, season, week) = factory::create_league_with_week(&db).await?;
//! let team = factory::team::TeamFactory::new(&db, city.id).is_free(true).build().await?;
//! let player = factory::create_player(&db, team.id).await?;
//! ```

pub mod app_user;
pub mod city;
pub mod event;
pub mod fixture;
pub mod helpers;
pub mod league;
pub mod news;
pub mod player;
pub mod season;
pub mod team;
pub mod transfer;
pub mod week;

pub use app_user::create_user;
pub use city::{create_city, create_city_restriction};
pub use event::{create_card, create_goal, create_squad_entry};
pub use fixture::create_fixture;
pub use helpers::{create_league_with_week, create_played_match};
pub use league::create_league;
pub use news::{create_news, create_news_content};
pub use player::create_player;
pub use season::{create_group, create_season};
pub use team::create_team;
pub use transfer::create_transfer_request;
pub use week::create_week;
