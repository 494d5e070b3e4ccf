use sea_orm::DatabaseConnection;
use std::collections::HashMap;

use crate::{
    model::week::{BestPlayerDto, SuspensionDto, WeekBestTeamDto},
    server::{
        data::{
            league::LeagueRepository, player::PlayerRepository, team::TeamRepository,
            week::WeekRepository, week_detail::WeekDetailRepository,
        },
        error::AppError,
        model::fixture::team_brief,
    },
};

pub struct WeekService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WeekService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Suspended players of a week, by last name.
    pub async fn suspensions(&self, week_id: i32) -> Result<Vec<SuspensionDto>, AppError> {
        let suspensions = WeekDetailRepository::new(self.db)
            .suspensions_for_week(week_id)
            .await?;
        let players = PlayerRepository::new(self.db)
            .get_by_ids(suspensions.iter().map(|s| s.player_id))
            .await?;
        let teams = TeamRepository::new(self.db)
            .get_by_ids(players.values().filter_map(|p| p.team_id))
            .await?;

        let mut rows: Vec<(String, SuspensionDto)> = suspensions
            .into_iter()
            .map(|s| {
                let player = players.get(&s.player_id);
                let team_id = player.and_then(|p| p.team_id);
                let last_name = player.map(|p| p.last_name.clone()).unwrap_or_default();
                let dto = SuspensionDto {
                    id: s.id,
                    player_id: s.player_id,
                    player_name: player.map(|p| p.full_name()).unwrap_or_default(),
                    icon: player.and_then(|p| p.icon.clone()),
                    team_id,
                    team_name: team_id.and_then(|id| teams.get(&id)).map(|t| t.name.clone()),
                    suspension_type: s.suspension_type,
                    games_suspended: s.games_suspended,
                    notes: s.notes,
                };
                (last_name, dto)
            })
            .collect();
        rows.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.id.cmp(&b.1.id)));

        Ok(rows.into_iter().map(|(_, dto)| dto).collect())
    }

    /// Team of the week with the best player and best team.
    pub async fn best_team(&self, week_id: i32) -> Result<WeekBestTeamDto, AppError> {
        let week = WeekRepository::new(self.db)
            .find_by_id(week_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Week {} not found", week_id)))?;

        self.best_team_of(week).await
    }

    /// Team of the week for the newest week across a city's leagues.
    pub async fn last_week_best_eleven(&self, city_id: i32) -> Result<WeekBestTeamDto, AppError> {
        let leagues = LeagueRepository::new(self.db).get_by_city(city_id).await?;
        let week = WeekRepository::new(self.db)
            .latest_in_leagues(leagues.iter().map(|l| l.id))
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No week in city {}", city_id)))?;

        self.best_team_of(week).await
    }

    async fn best_team_of(&self, week: entity::week::Model) -> Result<WeekBestTeamDto, AppError> {
        let detail = WeekDetailRepository::new(self.db);
        let best = detail
            .best_team_for_week(week.id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No best team for week {}", week.id)))?;
        let selected = detail.best_team_players(best.id).await?;

        let players = PlayerRepository::new(self.db)
            .get_by_ids(selected.iter().map(|p| p.player_id).chain(best.best_player_id))
            .await?;
        let teams = TeamRepository::new(self.db)
            .get_by_ids(
                players
                    .values()
                    .filter_map(|p| p.team_id)
                    .chain(best.best_team_id),
            )
            .await?;

        let best_player = best
            .best_player_id
            .and_then(|id| players.get(&id))
            .map(|p| best_player_dto(p, 0, &teams));

        Ok(WeekBestTeamDto {
            week_id: week.id,
            week_number: week.week_number,
            week_name: week.week_name,
            league_id: best.league_id,
            season_id: best.season_id,
            best_player,
            best_team: best.best_team_id.and_then(|id| teams.get(&id)).map(team_brief),
            players: selected
                .iter()
                .filter_map(|s| {
                    players
                        .get(&s.player_id)
                        .map(|p| best_player_dto(p, s.order_number, &teams))
                })
                .collect(),
        })
    }
}

fn best_player_dto(
    player: &entity::player::Model,
    order_number: i32,
    teams: &HashMap<i32, entity::team::Model>,
) -> BestPlayerDto {
    BestPlayerDto {
        player_id: player.id,
        name: player.full_name(),
        position: player.position.clone(),
        icon: player.icon.clone(),
        team_id: player.team_id,
        team_name: player
            .team_id
            .and_then(|id| teams.get(&id))
            .map(|t| t.name.clone()),
        order_number,
    }
}
