use sea_orm::DatabaseConnection;
use std::collections::HashSet;

use crate::{
    model::standings::{GroupTableDto, StandingRowDto},
    server::{
        data::{
            fixture::FixtureRepository, league::LeagueRepository, ranking::RankingRepository,
            season::SeasonRepository, team::TeamRepository, week::WeekRepository,
        },
        error::AppError,
        model::standings::{compute_group_tables, sum_penalties, GroupTable, StandingsContext},
    },
};

pub struct StandingsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StandingsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Computes group tables over the given played matches of a league season.
    async fn tables(
        &self,
        league: &entity::league::Model,
        season: &entity::season::Model,
        played: Vec<entity::fixture::Model>,
    ) -> Result<(Vec<GroupTable>, StandingsContext), AppError> {
        let ranking = RankingRepository::new(self.db);
        let statuses = ranking.statuses_for_league(league.id).await?;
        let penalties = sum_penalties(&ranking.penalties(league.id, season.id).await?);
        let groups = SeasonRepository::new(self.db)
            .get_groups_by_ids(played.iter().filter_map(|f| f.group_id))
            .await?;
        let teams = TeamRepository::new(self.db)
            .get_by_ids(played.iter().flat_map(|f| [f.home_team_id, f.away_team_id]))
            .await?;

        let tables = compute_group_tables(&played, &groups, &teams, &penalties);

        Ok((tables, StandingsContext::new(league, season, statuses)))
    }

    async fn league_and_season(
        &self,
        league_id: i32,
        season_id: i32,
    ) -> Result<(entity::league::Model, entity::season::Model), AppError> {
        let league = LeagueRepository::new(self.db)
            .find_by_id(league_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("League {} not found", league_id)))?;
        let season = SeasonRepository::new(self.db)
            .find_by_id(season_id)
            .await?
            .filter(|s| s.league_id == league_id)
            .ok_or_else(|| {
                AppError::NotFound(format!("Season {} not found for league {}", season_id, league_id))
            })?;

        Ok((league, season))
    }

    /// Standings of a league season as flat rows, one table per group.
    ///
    /// With `group_id` only that group's matches count.
    pub async fn league(
        &self,
        league_id: i32,
        season_id: i32,
        group_id: Option<i32>,
    ) -> Result<Vec<StandingRowDto>, AppError> {
        let (league, season) = self.league_and_season(league_id, season_id).await?;
        let weeks = WeekRepository::new(self.db)
            .get_by_league_season(league_id, season_id)
            .await?;
        let played = FixtureRepository::new(self.db)
            .get_played_by_weeks(weeks.iter().map(|w| w.id), group_id)
            .await?;

        let (tables, ctx) = self.tables(&league, &season, played).await?;

        Ok(tables
            .into_iter()
            .flat_map(|t| t.into_rows(&ctx, None))
            .collect())
    }

    /// Tables of every group a team played in during a season, the team's rows marked.
    pub async fn team(&self, team_id: i32, season_id: i32) -> Result<Vec<GroupTableDto>, AppError> {
        let not_found = || {
            AppError::NotFound(format!(
                "No standings for team {} in season {}",
                team_id, season_id
            ))
        };

        let season = SeasonRepository::new(self.db)
            .find_by_id(season_id)
            .await?
            .ok_or_else(not_found)?;
        let (league, season) = self.league_and_season(season.league_id, season.id).await?;

        let weeks = WeekRepository::new(self.db)
            .get_by_league_season(league.id, season.id)
            .await?;
        let week_ids: HashSet<i32> = weeks.iter().map(|w| w.id).collect();

        let team_groups: HashSet<Option<i32>> = FixtureRepository::new(self.db)
            .get_by_team(team_id)
            .await?
            .into_iter()
            .filter(|f| week_ids.contains(&f.week_id))
            .map(|f| f.group_id)
            .collect();
        if team_groups.is_empty() {
            return Err(not_found());
        }

        let played: Vec<entity::fixture::Model> = FixtureRepository::new(self.db)
            .get_played_by_weeks(week_ids, None)
            .await?
            .into_iter()
            .filter(|f| team_groups.contains(&f.group_id))
            .collect();

        let (tables, ctx) = self.tables(&league, &season, played).await?;
        if tables.is_empty() {
            return Err(not_found());
        }

        Ok(tables
            .into_iter()
            .map(|t| t.into_dto(&ctx, Some(team_id)))
            .collect())
    }

    /// Standings of a city's newest league in its newest season.
    pub async fn latest_for_city(&self, city_id: i32) -> Result<Vec<StandingRowDto>, AppError> {
        let league = LeagueRepository::new(self.db)
            .latest_for_city(city_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No league in city {}", city_id)))?;
        let season = SeasonRepository::new(self.db)
            .latest_for_league(league.id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No season in league {}", league.id)))?;

        self.league(league.id, season.id, None).await
    }
}
