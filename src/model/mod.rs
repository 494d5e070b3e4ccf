//! Data transfer objects shared by the HTTP surface.
//!
//! Every type here is what a client sees on the wire. Server-side domain
//! models convert into these through `into_dto()`.

pub mod api;
pub mod city;
pub mod content;
pub mod favourite;
pub mod fixture;
pub mod league;
pub mod news;
pub mod search;
pub mod standings;
pub mod statistics;
pub mod team;
pub mod transfer;
pub mod week;
