use sea_orm::DatabaseConnection;

use crate::{
    model::search::{SearchResultDto, SearchResultType},
    server::{
        data::{league::LeagueRepository, player::PlayerRepository, team::TeamRepository},
        error::AppError,
    },
};

/// Shortest query accepted, counted in characters after trimming.
pub const MIN_QUERY_LEN: usize = 3;

/// Trims a query and rejects ones that are too short.
pub fn normalize_query(query: &str) -> Result<String, AppError> {
    let query = query.trim();
    if query.chars().count() < MIN_QUERY_LEN {
        return Err(AppError::BadRequest(format!(
            "Search query must be at least {} characters",
            MIN_QUERY_LEN
        )));
    }
    Ok(query.to_string())
}

pub struct SearchService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SearchService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Players, then teams, then leagues whose name contains `query`.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResultDto>, AppError> {
        let query = normalize_query(query)?;

        let players = PlayerRepository::new(self.db).search(&query).await?;
        let teams = TeamRepository::new(self.db).search(&query).await?;
        let leagues = LeagueRepository::new(self.db).search(&query).await?;

        let players = players.into_iter().map(|p| SearchResultDto {
            id: p.id,
            name: p.full_name(),
            logo: p.icon,
            result_type: SearchResultType::Player,
        });
        let teams = teams.into_iter().map(|t| SearchResultDto {
            id: t.id,
            name: t.name,
            logo: t.logo_url,
            result_type: SearchResultType::Team,
        });
        let leagues = leagues.into_iter().map(|l| SearchResultDto {
            id: l.id,
            name: l.name,
            logo: l.logo_path,
            result_type: SearchResultType::League,
        });

        Ok(players.chain(teams).chain(leagues).collect())
    }
}
