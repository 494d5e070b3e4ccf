//! Test fixtures providing reusable entity models without database insertion.
//!
//! Fixtures back the factory defaults and are handy for unit tests of pure
//! logic (standings, statistics) that only need in-memory models.
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let played = fixture::fixture::entity_builder()
//!     .teams(1, 2)
//!     .score(3, 1)
//!     .build();
//! ```

pub mod city;
pub mod fixture;
pub mod player;
pub mod team;
pub mod week;

pub use city::entity as city_entity;
pub use fixture::{entity as fixture_entity, entity_builder as fixture_entity_builder};
pub use player::{entity as player_entity, entity_builder as player_entity_builder};
pub use team::{entity as team_entity, entity_builder as team_entity_builder};
pub use week::{entity as week_entity, entity_builder as week_entity_builder};
