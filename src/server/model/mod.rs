//! Server-side domain models and pure computations.
//!
//! Repositories hand entity models to services; the types here join those rows
//! into richer shapes (a match with its teams, a news item with its photos),
//! run the in-memory aggregations (standings, player tallies) and convert the
//! results to DTOs at the controller boundary.

pub mod event;
pub mod fixture;
pub mod news;
pub mod schedule;
pub mod standings;
pub mod stats;
pub mod transfer;
