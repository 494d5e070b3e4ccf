//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They validate
//! input, combine repository reads into the projections the apps consume, and
//! drive the side effects of the transfer, news and favourite workflows
//! through the notifier and translator ports.
//!
//! Read projections are returned as DTOs directly since every caller
//! serializes them unchanged.

pub mod city;
pub mod content;
pub mod favourite;
pub mod fixture;
pub mod league;
pub mod news;
pub mod player;
pub mod search;
pub mod standings;
pub mod statistics;
pub mod team;
pub mod transfer;
pub mod week;
