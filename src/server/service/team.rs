use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::{
    model::{
        league::{SeasonBriefDto, TeamLeagueDto, TeamLeaguesDto, WeekBlockDto},
        team::{
            TeamPlayerDto, TeamSeasonMatchDto, TeamSeasonPlayerDto, TeamSeasonStatsDto,
            TeamSquadDto, WebTeamDto,
        },
    },
    server::{
        data::{
            event::MatchEventRepository, favourite::FavouriteRepository,
            fixture::FixtureRepository, league::LeagueRepository, player::PlayerRepository,
            season::SeasonRepository, team::TeamRepository, week::WeekRepository,
        },
        error::AppError,
        model::{
            fixture::{MatchRow, Outcome},
            stats::{tally_players, MatchEvents},
        },
        util::time::{age_on, kickoff_label},
    },
};

const UNKNOWN_SEASON: &str = "Unknown season";

pub fn team_player_dto(player: entity::player::Model, today: NaiveDate) -> TeamPlayerDto {
    TeamPlayerDto {
        full_name: player.full_name(),
        age: age_on(player.date_of_birth, today),
        id: player.id,
        first_name: player.first_name,
        last_name: player.last_name,
        position: player.position,
        number: player.number,
        icon: player.icon,
        nationality: player.nationality,
        player_value: player.player_value,
    }
}

pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    async fn team_or_not_found(&self, team_id: i32) -> Result<entity::team::Model, AppError> {
        TeamRepository::new(self.db)
            .find_by_id(team_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Team {} not found", team_id)))
    }

    /// Matches of a team whose week belongs to `season_id`, with those weeks.
    async fn season_fixtures(
        &self,
        team_id: i32,
        season_id: i32,
    ) -> Result<(Vec<entity::fixture::Model>, HashMap<i32, entity::week::Model>), AppError> {
        let fixtures = FixtureRepository::new(self.db).get_by_team(team_id).await?;
        let weeks = WeekRepository::new(self.db)
            .get_by_ids(fixtures.iter().map(|f| f.week_id))
            .await?;

        let fixtures = fixtures
            .into_iter()
            .filter(|f| weeks.get(&f.week_id).is_some_and(|w| w.season_id == season_id))
            .collect();

        Ok((fixtures, weeks))
    }

    /// Active players of a team with their age on `today`.
    pub async fn squad(&self, team_id: i32, today: NaiveDate) -> Result<TeamSquadDto, AppError> {
        let team = self.team_or_not_found(team_id).await?;
        let players = PlayerRepository::new(self.db).get_active_by_team(team_id).await?;

        Ok(TeamSquadDto {
            team_id: team.id,
            team_name: team.name,
            logo_url: team.logo_url,
            players: players
                .into_iter()
                .map(|p| team_player_dto(p, today))
                .collect(),
        })
    }

    /// Leagues a team has matches in, each with the seasons involved.
    pub async fn leagues(&self, team_id: i32) -> Result<TeamLeaguesDto, AppError> {
        let team = self.team_or_not_found(team_id).await?;
        let fixtures = FixtureRepository::new(self.db).get_by_team(team_id).await?;
        if fixtures.is_empty() {
            return Err(AppError::NotFound(format!("Team {} has no matches", team_id)));
        }

        let weeks = WeekRepository::new(self.db)
            .get_by_ids(fixtures.iter().map(|f| f.week_id))
            .await?;
        let leagues = LeagueRepository::new(self.db)
            .get_by_ids(fixtures.iter().map(|f| f.league_id))
            .await?;
        let seasons = SeasonRepository::new(self.db)
            .get_by_ids(weeks.values().map(|w| w.season_id))
            .await?;

        let mut seasons_by_league: BTreeMap<i32, BTreeSet<i32>> = BTreeMap::new();
        for fixture in &fixtures {
            if let Some(week) = weeks.get(&fixture.week_id) {
                seasons_by_league
                    .entry(fixture.league_id)
                    .or_default()
                    .insert(week.season_id);
            }
        }

        let mut result: Vec<TeamLeagueDto> = seasons_by_league
            .into_iter()
            .filter_map(|(league_id, season_ids)| {
                let league = leagues.get(&league_id)?;
                let mut seasons: Vec<SeasonBriefDto> = season_ids
                    .into_iter()
                    .filter_map(|id| seasons.get(&id))
                    .map(|s| SeasonBriefDto {
                        season_id: s.id,
                        name: s.name.clone(),
                    })
                    .collect();
                seasons.sort_by(|a, b| b.name.cmp(&a.name));
                Some(TeamLeagueDto {
                    league_id,
                    league_name: league.name.clone(),
                    logo_path: league.logo_path.clone(),
                    seasons,
                })
            })
            .collect();
        result.sort_by(|a, b| a.league_name.cmp(&b.league_name));

        Ok(TeamLeaguesDto {
            team_id: team.id,
            team_name: team.name,
            logo_url: team.logo_url,
            leagues: result,
        })
    }

    /// A team's matches in one season, by week number.
    ///
    /// `score` is the final score once played, otherwise the kick-off time.
    pub async fn season_matches(
        &self,
        team_id: i32,
        season_id: i32,
    ) -> Result<Vec<TeamSeasonMatchDto>, AppError> {
        let (fixtures, weeks) = self.season_fixtures(team_id, season_id).await?;
        if fixtures.is_empty() {
            return Err(AppError::NotFound(format!(
                "No matches for team {} in season {}",
                team_id, season_id
            )));
        }

        let teams = TeamRepository::new(self.db)
            .get_by_ids(fixtures.iter().flat_map(|f| [f.home_team_id, f.away_team_id]))
            .await?;

        let mut rows: Vec<(i32, TeamSeasonMatchDto)> = fixtures
            .into_iter()
            .map(|f| {
                let week = weeks.get(&f.week_id);
                let row = MatchRow::from_parts(f, &teams);
                let result = row.outcome_for(team_id).map(|o| o.letter().to_string());
                let f = &row.fixture;
                let score = if f.is_played {
                    format!("{}-{}", f.home_score.unwrap_or(0), f.away_score.unwrap_or(0))
                } else {
                    kickoff_label(f.match_date)
                };
                let week_number = week.map(|w| w.week_number).unwrap_or_default();
                let dto = TeamSeasonMatchDto {
                    match_id: f.id,
                    week_number,
                    week_name: week.and_then(|w| w.week_name.clone()),
                    match_date: f.match_date,
                    home_team_id: f.home_team_id,
                    home_team_name: row.home.as_ref().map(|t| t.name.clone()).unwrap_or_default(),
                    home_team_logo: row.home.as_ref().and_then(|t| t.logo_url.clone()),
                    away_team_id: f.away_team_id,
                    away_team_name: row.away.as_ref().map(|t| t.name.clone()).unwrap_or_default(),
                    away_team_logo: row.away.as_ref().and_then(|t| t.logo_url.clone()),
                    score,
                    is_played: f.is_played,
                    result,
                };
                (week_number, dto)
            })
            .collect();
        rows.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.match_date.cmp(&b.1.match_date)));

        Ok(rows.into_iter().map(|(_, dto)| dto).collect())
    }

    /// Active players of a team with what they did in the season's matches.
    pub async fn season_players(
        &self,
        team_id: i32,
        season_id: i32,
    ) -> Result<Vec<TeamSeasonPlayerDto>, AppError> {
        let players = PlayerRepository::new(self.db).get_active_by_team(team_id).await?;
        if players.is_empty() {
            return Err(AppError::NotFound(format!("Team {} has no players", team_id)));
        }

        let (fixtures, _) = self.season_fixtures(team_id, season_id).await?;
        let match_ids: Vec<i32> = fixtures.iter().map(|f| f.id).collect();
        let events = MatchEventRepository::new(self.db);
        let squads: Vec<entity::match_squad::Model> = events
            .squads_for_matches(&match_ids)
            .await?
            .into_iter()
            .filter(|s| s.team_id == team_id)
            .collect();
        let goals = events.goals_for_matches(&match_ids).await?;
        let cards = events.cards_for_matches(&match_ids).await?;

        let tallies = tally_players(&MatchEvents {
            squads: &squads,
            goals: &goals,
            cards: &cards,
            fixtures: &[],
        });

        Ok(players
            .into_iter()
            .map(|p| {
                let tally = tallies.get(&p.id).cloned().unwrap_or_default();
                TeamSeasonPlayerDto {
                    player_id: p.id,
                    name: p.full_name(),
                    number: p.number,
                    position: p.position,
                    icon: p.icon,
                    appearances: tally.appearances,
                    started: tally.started,
                    substitute: tally.substitute,
                    goals: tally.goals,
                    penalties: tally.penalties,
                    own_goals: tally.own_goals,
                    assists: tally.assists,
                    yellow_cards: tally.yellow_cards,
                    red_cards: tally.red_cards,
                }
            })
            .collect())
    }

    /// Record of a team over the played matches of a season.
    pub async fn season_stats(
        &self,
        team_id: i32,
        season_id: i32,
        mac_id: Option<&str>,
    ) -> Result<TeamSeasonStatsDto, AppError> {
        let team = self.team_or_not_found(team_id).await?;
        let season = SeasonRepository::new(self.db).find_by_id(season_id).await?;
        let (fixtures, _) = self.season_fixtures(team_id, season_id).await?;
        let is_favorite = match mac_id.filter(|m| !m.trim().is_empty()) {
            Some(mac_id) => {
                FavouriteRepository::new(self.db)
                    .is_favourite(team_id, mac_id)
                    .await?
            }
            None => false,
        };

        let mut stats = TeamSeasonStatsDto {
            team_id: team.id,
            team_name: team.name.clone(),
            logo_url: team.logo_url.clone(),
            manager: team.manager.clone(),
            season_id,
            season_name: season
                .map(|s| s.name)
                .unwrap_or_else(|| UNKNOWN_SEASON.to_string()),
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            points: 0,
            is_favorite,
        };

        let teams = HashMap::new();
        for fixture in fixtures.into_iter().filter(|f| f.is_played) {
            let (own, other) = if fixture.home_team_id == team_id {
                (fixture.home_score, fixture.away_score)
            } else {
                (fixture.away_score, fixture.home_score)
            };
            stats.goals_for += own.unwrap_or(0);
            stats.goals_against += other.unwrap_or(0);
            stats.played += 1;
            match MatchRow::from_parts(fixture, &teams).outcome_for(team_id) {
                Some(Outcome::Win) => stats.won += 1,
                Some(Outcome::Draw) => stats.drawn += 1,
                Some(Outcome::Loss) => stats.lost += 1,
                None => {}
            }
        }
        stats.points = stats.won * 3 + stats.drawn;

        Ok(stats)
    }

    pub async fn web_team(&self, team_id: i32) -> Result<WebTeamDto, AppError> {
        let team = self.team_or_not_found(team_id).await?;

        Ok(WebTeamDto {
            id: team.id,
            name: team.name,
            logo_url: team.logo_url,
            manager: team.manager,
            city_id: team.city_id,
        })
    }

    pub async fn roster(&self, team_id: i32, today: NaiveDate) -> Result<Vec<TeamPlayerDto>, AppError> {
        let players = PlayerRepository::new(self.db).get_active_by_team(team_id).await?;

        Ok(players
            .into_iter()
            .map(|p| team_player_dto(p, today))
            .collect())
    }

    /// Every match of a team, one block per league week.
    ///
    /// Blocks are ordered by league name, then week id.
    pub async fn match_blocks(&self, team_id: i32) -> Result<Vec<WeekBlockDto>, AppError> {
        let fixtures = FixtureRepository::new(self.db).get_by_team(team_id).await?;
        let leagues = LeagueRepository::new(self.db)
            .get_by_ids(fixtures.iter().map(|f| f.league_id))
            .await?;
        let weeks = WeekRepository::new(self.db)
            .get_by_ids(fixtures.iter().map(|f| f.week_id))
            .await?;
        let teams = TeamRepository::new(self.db)
            .get_by_ids(fixtures.iter().flat_map(|f| [f.home_team_id, f.away_team_id]))
            .await?;

        let mut blocks: BTreeMap<(String, i32, i32), WeekBlockDto> = BTreeMap::new();
        for fixture in fixtures {
            let league_name = leagues
                .get(&fixture.league_id)
                .map(|l| l.name.clone())
                .unwrap_or_default();
            let key = (league_name.clone(), fixture.league_id, fixture.week_id);
            let block = blocks.entry(key).or_insert_with(|| WeekBlockDto {
                league_id: fixture.league_id,
                league_name,
                week_id: Some(fixture.week_id),
                week_name: weeks.get(&fixture.week_id).and_then(|w| w.week_name.clone()),
                matches: Vec::new(),
            });
            block
                .matches
                .push(MatchRow::from_parts(fixture, &teams).into_dto_for(Some(team_id)));
        }

        Ok(blocks.into_values().collect())
    }
}
