use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use std::collections::{HashMap, HashSet};

use crate::{
    model::team::{PlayerDetailsDto, PlayerSeasonStatsDto, ValuablePlayerDto},
    server::{
        data::{
            event::MatchEventRepository, fixture::FixtureRepository, league::LeagueRepository,
            player::PlayerRepository, season::SeasonRepository, team::TeamRepository,
            week::WeekRepository,
        },
        error::AppError,
        model::stats::{tally_players, MatchEvents, PlayerTally},
        util::time::age_on,
    },
};

/// (league, season, team) a player's activity is attributed to.
type StatKey = (i32, i32, i32);

pub struct PlayerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Profile of a player with activity per league, season and team.
    pub async fn details(&self, player_id: i32, today: NaiveDate) -> Result<PlayerDetailsDto, AppError> {
        let player = PlayerRepository::new(self.db)
            .find_by_id(player_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Player {} not found", player_id)))?;

        let events = MatchEventRepository::new(self.db);
        let squads = events.squads_for_player(player_id).await?;
        let goals = events.goals_involving_player(player_id).await?;
        let cards = events.cards_for_player(player_id).await?;
        let awards = FixtureRepository::new(self.db)
            .get_by_man_of_the_match(player_id)
            .await?;

        let match_ids: HashSet<i32> = squads
            .iter()
            .map(|s| s.match_id)
            .chain(goals.iter().map(|g| g.match_id))
            .chain(cards.iter().map(|c| c.match_id))
            .chain(awards.iter().map(|f| f.id))
            .collect();
        let fixtures: HashMap<i32, entity::fixture::Model> = FixtureRepository::new(self.db)
            .get_by_ids(match_ids)
            .await?
            .into_iter()
            .map(|f| (f.id, f))
            .collect();
        let weeks = WeekRepository::new(self.db)
            .get_by_ids(fixtures.values().map(|f| f.week_id))
            .await?;

        // Team per match: the squad row, then a goal scored for a side, then the current team.
        let mut match_team: HashMap<i32, i32> = HashMap::new();
        for squad in &squads {
            match_team.insert(squad.match_id, squad.team_id);
        }
        for goal in goals.iter().filter(|g| g.player_id == player_id && !g.is_own_goal) {
            match_team.entry(goal.match_id).or_insert(goal.team_id);
        }
        let key_of = |match_id: i32| -> Option<StatKey> {
            let fixture = fixtures.get(&match_id)?;
            let week = weeks.get(&fixture.week_id)?;
            let team_id = match_team
                .get(&match_id)
                .copied()
                .or(player.team_id)
                .unwrap_or_default();
            Some((fixture.league_id, week.season_id, team_id))
        };

        let mut squads_by: HashMap<StatKey, Vec<entity::match_squad::Model>> = HashMap::new();
        for squad in squads.iter().cloned() {
            if let Some(key) = key_of(squad.match_id) {
                squads_by.entry(key).or_default().push(squad);
            }
        }
        let mut goals_by: HashMap<StatKey, Vec<entity::goal::Model>> = HashMap::new();
        for goal in goals.iter().cloned() {
            if let Some(key) = key_of(goal.match_id) {
                goals_by.entry(key).or_default().push(goal);
            }
        }
        let mut cards_by: HashMap<StatKey, Vec<entity::card::Model>> = HashMap::new();
        for card in cards.iter().cloned() {
            if let Some(key) = key_of(card.match_id) {
                cards_by.entry(key).or_default().push(card);
            }
        }
        let mut awards_by: HashMap<StatKey, Vec<entity::fixture::Model>> = HashMap::new();
        for award in awards.iter().cloned() {
            if let Some(key) = key_of(award.id) {
                awards_by.entry(key).or_default().push(award);
            }
        }

        let keys: HashSet<StatKey> = squads_by
            .keys()
            .chain(goals_by.keys())
            .chain(cards_by.keys())
            .chain(awards_by.keys())
            .copied()
            .collect();

        let leagues = LeagueRepository::new(self.db)
            .get_by_ids(keys.iter().map(|k| k.0))
            .await?;
        let seasons = SeasonRepository::new(self.db)
            .get_by_ids(keys.iter().map(|k| k.1))
            .await?;
        let mut team_ids: HashSet<i32> = keys.iter().map(|k| k.2).collect();
        team_ids.extend(player.team_id);
        let teams = TeamRepository::new(self.db).get_by_ids(team_ids).await?;

        let mut stats: Vec<PlayerSeasonStatsDto> = keys
            .into_iter()
            .filter_map(|key| {
                let tally = tally_players(&MatchEvents {
                    squads: squads_by.get(&key).map(Vec::as_slice).unwrap_or_default(),
                    goals: goals_by.get(&key).map(Vec::as_slice).unwrap_or_default(),
                    cards: cards_by.get(&key).map(Vec::as_slice).unwrap_or_default(),
                    fixtures: awards_by.get(&key).map(Vec::as_slice).unwrap_or_default(),
                })
                .remove(&player_id)
                .unwrap_or_default();
                if !tally.has_activity() {
                    return None;
                }
                let (league_id, season_id, team_id) = key;
                Some(season_stats_dto(
                    key,
                    tally,
                    leagues.get(&league_id).map(|l| l.name.clone()),
                    seasons.get(&season_id).map(|s| s.name.clone()),
                    teams.get(&team_id).map(|t| t.name.clone()),
                ))
            })
            .collect();
        stats.sort_by(|a, b| {
            b.season_id
                .cmp(&a.season_id)
                .then_with(|| a.team_name.cmp(&b.team_name))
                .then_with(|| a.league_id.cmp(&b.league_id))
        });

        let team = player.team_id.and_then(|id| teams.get(&id));

        Ok(PlayerDetailsDto {
            id: player.id,
            age: age_on(player.date_of_birth, today),
            team_id: player.team_id,
            team_name: team.map(|t| t.name.clone()),
            team_logo: team.and_then(|t| t.logo_url.clone()),
            first_name: player.first_name,
            last_name: player.last_name,
            position: player.position,
            number: player.number,
            icon: player.icon,
            date_of_birth: player.date_of_birth,
            nationality: player.nationality,
            height: player.height,
            weight: player.weight,
            preferred_foot: player.preferred_foot,
            player_type: player.player_type,
            player_value: player.player_value,
            licensed: player.licensed,
            stats,
        })
    }

    /// Most valuable active players of a city's teams.
    pub async fn valuable(&self, city_id: i32, top: u64) -> Result<Vec<ValuablePlayerDto>, AppError> {
        let teams: HashMap<i32, entity::team::Model> = TeamRepository::new(self.db)
            .get_by_city(city_id)
            .await?
            .into_iter()
            .map(|t| (t.id, t))
            .collect();
        let players = PlayerRepository::new(self.db)
            .top_valuable(teams.keys().copied(), top)
            .await?;

        Ok(players
            .into_iter()
            .map(|p| {
                let team = p.team_id.and_then(|id| teams.get(&id));
                ValuablePlayerDto {
                    player_id: p.id,
                    full_name: p.full_name(),
                    team_name: team.map(|t| t.name.clone()),
                    team_logo: team.and_then(|t| t.logo_url.clone()),
                    position: p.position,
                    icon: p.icon,
                    preferred_foot: p.preferred_foot,
                    team_id: p.team_id,
                    player_value: p.player_value.unwrap_or_default(),
                }
            })
            .collect())
    }
}

fn season_stats_dto(
    (league_id, season_id, team_id): StatKey,
    tally: PlayerTally,
    league_name: Option<String>,
    season_name: Option<String>,
    team_name: Option<String>,
) -> PlayerSeasonStatsDto {
    PlayerSeasonStatsDto {
        league_id,
        league_name: league_name.unwrap_or_default(),
        season_id,
        season_name: season_name.unwrap_or_default(),
        team_id,
        team_name: team_name.unwrap_or_default(),
        appearances: tally.appearances,
        goals: tally.goals,
        assists: tally.assists,
        penalties: tally.penalties,
        own_goals: tally.own_goals,
        yellow_cards: tally.yellow_cards,
        red_cards: tally.red_cards,
        man_of_the_match: tally.man_of_the_match,
    }
}
