//! HTTP handlers for the client, website and admin surfaces.
//!
//! Handlers extract path, query and body values, call one service, and wrap
//! read-heavy results in the response cache. Each handler carries an
//! `#[utoipa::path]` entry collected by `router::ApiDoc`.

pub mod city;
pub mod content;
pub mod favourite;
pub mod fixture;
pub mod health;
pub mod league;
pub mod news;
pub mod player;
pub mod search;
pub mod standings;
pub mod statistics;
pub mod team;
pub mod transfer;
pub mod web;
pub mod week;

use serde::Deserialize;

/// `?top=` limit shared by ranking endpoints.
#[derive(Debug, Deserialize)]
pub struct TopParams {
    #[serde(default = "default_top")]
    pub top: usize,
}

fn default_top() -> usize {
    10
}

/// `?mac_id=` device identifier used to mark favourites.
#[derive(Debug, Default, Deserialize)]
pub struct MacParams {
    pub mac_id: Option<String>,
}

impl MacParams {
    /// The identifier, or `None` when absent or blank.
    pub fn mac(&self) -> Option<&str> {
        self.mac_id.as_deref().map(str::trim).filter(|m| !m.is_empty())
    }
}
