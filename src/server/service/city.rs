use sea_orm::DatabaseConnection;

use crate::{
    model::{
        city::{CityDto, MenuLeagueDto, MenuTeamDto},
        fixture::TeamBriefDto,
        league::LeagueDto,
    },
    server::{
        data::{
            city::CityRepository, favourite::FavouriteRepository, league::LeagueRepository,
            team::TeamRepository,
        },
        error::AppError,
        model::fixture::team_brief,
    },
};

pub fn league_dto(league: entity::league::Model) -> LeagueDto {
    LeagueDto {
        id: league.id,
        name: league.name,
        logo_path: league.logo_path,
        league_type: league.league_type,
        start_date: league.start_date,
        end_date: league.end_date,
    }
}

pub struct CityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// All cities ordered by their display order, then name.
    pub async fn list_cities(&self) -> Result<Vec<CityDto>, AppError> {
        let repo = CityRepository::new(self.db);

        let cities = repo.get_all().await?;

        Ok(cities
            .into_iter()
            .map(|c| CityDto {
                id: c.id,
                name: c.name,
            })
            .collect())
    }

    pub async fn menu_leagues(&self, city_id: i32) -> Result<Vec<MenuLeagueDto>, AppError> {
        let repo = LeagueRepository::new(self.db);

        let leagues = repo.get_by_city(city_id).await?;

        Ok(leagues
            .into_iter()
            .map(|l| MenuLeagueDto {
                id: l.id,
                name: l.name,
                icon: l.logo_path,
            })
            .collect())
    }

    /// Teams of a city by name, flagged with the device's favourites when `mac_id` is given.
    pub async fn menu_teams(
        &self,
        city_id: i32,
        mac_id: Option<&str>,
    ) -> Result<Vec<MenuTeamDto>, AppError> {
        let team_repo = TeamRepository::new(self.db);
        let favourite_repo = FavouriteRepository::new(self.db);

        let teams = team_repo.get_by_city(city_id).await?;
        let favourites = match mac_id.filter(|m| !m.trim().is_empty()) {
            Some(mac_id) => favourite_repo.team_ids_for_mac(mac_id).await?,
            None => Default::default(),
        };

        Ok(teams
            .into_iter()
            .map(|t| MenuTeamDto {
                is_favourite: favourites.contains(&t.id),
                id: t.id,
                name: t.name,
                logo_url: t.logo_url,
            })
            .collect())
    }

    pub async fn city_teams(&self, city_id: i32) -> Result<Vec<TeamBriefDto>, AppError> {
        let repo = TeamRepository::new(self.db);

        let teams = repo.get_by_city(city_id).await?;

        Ok(teams.iter().map(team_brief).collect())
    }

    /// Leagues of a city, newest start date first.
    pub async fn city_leagues(&self, city_id: i32) -> Result<Vec<LeagueDto>, AppError> {
        let repo = LeagueRepository::new(self.db);

        let leagues = repo.get_by_city(city_id).await?;

        Ok(leagues.into_iter().map(league_dto).collect())
    }
}
