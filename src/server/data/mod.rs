//! Database repository layer for all domain entities.
//!
//! Each repository borrows the connection pool and wraps the SeaORM queries for
//! one area. Repositories return entity models (or small joined shapes from
//! `server::model`) and never see DTOs. Multi-row writes that must succeed
//! together run inside a transaction here rather than in the service.

pub mod city;
pub mod content;
pub mod event;
pub mod favourite;
pub mod fixture;
pub mod league;
pub mod news;
pub mod player;
pub mod ranking;
pub mod season;
pub mod team;
pub mod transfer;
pub mod user;
pub mod week;
pub mod week_detail;
