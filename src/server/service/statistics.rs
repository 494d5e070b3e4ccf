use entity::card::CardType;
use sea_orm::DatabaseConnection;
use std::collections::{HashMap, HashSet};

use crate::{
    model::statistics::{
        LeaguePlayerStatDto, LeagueStatisticsDto, PlayerCountDto, TeamCountDto, TopPlayersDto,
        TopTeamsDto,
    },
    server::{
        data::{
            event::MatchEventRepository, fixture::FixtureRepository, player::PlayerRepository,
            team::TeamRepository, week::WeekRepository,
        },
        error::AppError,
        model::stats::{summarize_goals, tally_players, team_goal_stats, top_counts, MatchEvents},
    },
};

/// Matches and events of one league season.
struct SeasonEvents {
    weeks: Vec<entity::week::Model>,
    fixtures: Vec<entity::fixture::Model>,
    goals: Vec<entity::goal::Model>,
    cards: Vec<entity::card::Model>,
}

pub struct StatisticsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatisticsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    async fn season_events(&self, league_id: i32, season_id: i32) -> Result<SeasonEvents, AppError> {
        let weeks = WeekRepository::new(self.db)
            .get_by_league_season(league_id, season_id)
            .await?;
        let fixtures = FixtureRepository::new(self.db)
            .get_by_weeks(weeks.iter().map(|w| w.id))
            .await?;
        let match_ids: Vec<i32> = fixtures.iter().map(|f| f.id).collect();
        let events = MatchEventRepository::new(self.db);
        let goals = events.goals_for_matches(&match_ids).await?;
        let cards = events.cards_for_matches(&match_ids).await?;

        Ok(SeasonEvents {
            weeks,
            fixtures,
            goals,
            cards,
        })
    }

    /// Players referenced by goals (scorer and assister) and cards, with their teams.
    async fn people(
        &self,
        events: &SeasonEvents,
        extra_teams: impl IntoIterator<Item = i32>,
    ) -> Result<(HashMap<i32, entity::player::Model>, HashMap<i32, entity::team::Model>), AppError>
    {
        let player_ids: HashSet<i32> = events
            .goals
            .iter()
            .flat_map(|g| std::iter::once(g.player_id).chain(g.assist_player_id))
            .chain(events.cards.iter().map(|c| c.player_id))
            .collect();
        let players = PlayerRepository::new(self.db).get_by_ids(player_ids).await?;
        let team_ids: HashSet<i32> = players
            .values()
            .filter_map(|p| p.team_id)
            .chain(extra_teams)
            .collect();
        let teams = TeamRepository::new(self.db).get_by_ids(team_ids).await?;

        Ok((players, teams))
    }

    /// Scorers, assisters and per-team goal figures of a league season.
    pub async fn league(
        &self,
        league_id: i32,
        season_id: i32,
        top: usize,
    ) -> Result<LeagueStatisticsDto, AppError> {
        let events = self.season_events(league_id, season_id).await?;
        if events.goals.is_empty() {
            return Err(AppError::NotFound(format!(
                "No goals in league {} season {}",
                league_id, season_id
            )));
        }

        let extra_teams: Vec<i32> = events
            .fixtures
            .iter()
            .flat_map(|f| [f.home_team_id, f.away_team_id])
            .chain(events.goals.iter().map(|g| g.team_id))
            .collect();
        let (players, teams) = self.people(&events, extra_teams).await?;

        let summary = summarize_goals(&events.goals);
        let team_stats = team_goal_stats(&events.fixtures, &events.goals, &events.cards, &players, &teams);

        Ok(LeagueStatisticsDto {
            league_id,
            season_id,
            total_goals: summary.total_goals,
            total_assists: summary.total_assists,
            total_penalty_goals: summary.total_penalty_goals,
            total_own_goals: summary.total_own_goals,
            average_goals_per_match: summary.average_goals_per_match,
            top_scorers: summary
                .scorers
                .into_iter()
                .take(top)
                .map(|l| l.into_dto(&players, &teams))
                .collect(),
            top_assists: summary
                .assisters
                .into_iter()
                .take(top)
                .map(|l| l.into_dto(&players, &teams))
                .collect(),
            team_stats,
        })
    }

    /// Active players of the teams in a league season, ranked by goals, assists and awards.
    pub async fn league_players(
        &self,
        league_id: i32,
        season_id: i32,
        top: usize,
    ) -> Result<Vec<LeaguePlayerStatDto>, AppError> {
        let events = self.season_events(league_id, season_id).await?;
        if events.weeks.is_empty() {
            return Err(AppError::NotFound(format!(
                "No weeks in league {} season {}",
                league_id, season_id
            )));
        }

        let team_ids: HashSet<i32> = events
            .fixtures
            .iter()
            .flat_map(|f| [f.home_team_id, f.away_team_id])
            .collect();
        let teams = TeamRepository::new(self.db).get_by_ids(team_ids.iter().copied()).await?;
        let players = PlayerRepository::new(self.db).get_active_by_teams(team_ids).await?;
        let match_ids: Vec<i32> = events.fixtures.iter().map(|f| f.id).collect();
        let squads = MatchEventRepository::new(self.db)
            .squads_for_matches(&match_ids)
            .await?;

        let tallies = tally_players(&MatchEvents {
            squads: &squads,
            goals: &events.goals,
            cards: &events.cards,
            fixtures: &events.fixtures,
        });

        let mut rows: Vec<LeaguePlayerStatDto> = players
            .into_iter()
            .filter_map(|p| {
                let tally = tallies.get(&p.id).filter(|t| t.has_activity())?;
                let team = p.team_id.and_then(|id| teams.get(&id));
                Some(LeaguePlayerStatDto {
                    player_id: p.id,
                    player_name: p.full_name(),
                    icon: p.icon,
                    team_id: p.team_id,
                    team_name: team.map(|t| t.name.clone()),
                    appearances: tally.appearances,
                    goals: tally.goals,
                    assists: tally.assists,
                    penalties: tally.penalties,
                    own_goals: tally.own_goals,
                    yellow_cards: tally.yellow_cards,
                    red_cards: tally.red_cards,
                    man_of_the_match: tally.man_of_the_match,
                })
            })
            .collect();
        rows.sort_by(|a, b| {
            b.goals
                .cmp(&a.goals)
                .then_with(|| b.assists.cmp(&a.assists))
                .then_with(|| b.man_of_the_match.cmp(&a.man_of_the_match))
                .then_with(|| a.player_id.cmp(&b.player_id))
        });
        rows.truncate(top);

        Ok(rows)
    }

    /// Leaderboards of active players for goals, assists, both, and cards.
    pub async fn top_players(
        &self,
        league_id: i32,
        season_id: i32,
        top: usize,
    ) -> Result<TopPlayersDto, AppError> {
        let events = self.season_events(league_id, season_id).await?;
        let (players, teams) = self.people(&events, []).await?;
        let active = |id: &i32| players.get(id).is_some_and(|p| !p.is_archived);

        let scorer_ids = || {
            events
                .goals
                .iter()
                .filter(|g| !g.is_own_goal)
                .map(|g| g.player_id)
                .filter(active)
        };
        let assist_ids = || events.goals.iter().filter_map(|g| g.assist_player_id).filter(active);
        let card_ids = |card_type: CardType| {
            events
                .cards
                .iter()
                .filter(move |c| c.card_type == card_type)
                .map(|c| c.player_id)
                .filter(active)
        };

        let to_dtos = |counts: Vec<(i32, i32)>| -> Vec<PlayerCountDto> {
            counts
                .into_iter()
                .map(|(player_id, count)| {
                    let player = players.get(&player_id);
                    let team_id = player.and_then(|p| p.team_id);
                    let team = team_id.and_then(|id| teams.get(&id));
                    PlayerCountDto {
                        player_id,
                        player_name: player.map(|p| p.full_name()).unwrap_or_default(),
                        icon: player.and_then(|p| p.icon.clone()),
                        team_id,
                        team_name: team.map(|t| t.name.clone()),
                        team_logo: team.and_then(|t| t.logo_url.clone()),
                        count,
                    }
                })
                .collect()
        };

        Ok(TopPlayersDto {
            top_scorers: to_dtos(top_counts(scorer_ids(), top)),
            top_assists: to_dtos(top_counts(assist_ids(), top)),
            top_goal_assists: to_dtos(top_counts(scorer_ids().chain(assist_ids()), top)),
            top_yellows: to_dtos(top_counts(card_ids(CardType::Yellow), top)),
            top_reds: to_dtos(top_counts(card_ids(CardType::Red), top)),
        })
    }

    /// Team leaderboards for goals, assists and cards.
    ///
    /// Assists and cards count for the team the player belongs to.
    pub async fn top_teams(
        &self,
        league_id: i32,
        season_id: i32,
        top: usize,
    ) -> Result<TopTeamsDto, AppError> {
        let events = self.season_events(league_id, season_id).await?;
        let goal_teams: Vec<i32> = events.goals.iter().map(|g| g.team_id).collect();
        let (players, teams) = self.people(&events, goal_teams).await?;
        let team_of = |player_id: i32| players.get(&player_id).and_then(|p| p.team_id);

        let scoring = events
            .goals
            .iter()
            .filter(|g| !g.is_own_goal)
            .map(|g| g.team_id);
        let assisting = events
            .goals
            .iter()
            .filter_map(|g| g.assist_player_id)
            .filter_map(team_of);
        let carded = |card_type: CardType| {
            events
                .cards
                .iter()
                .filter(move |c| c.card_type == card_type)
                .filter_map(move |c| team_of(c.player_id))
        };

        let to_dtos = |counts: Vec<(i32, i32)>| -> Vec<TeamCountDto> {
            counts
                .into_iter()
                .map(|(team_id, count)| {
                    let team = teams.get(&team_id);
                    TeamCountDto {
                        team_id,
                        team_name: team.map(|t| t.name.clone()).unwrap_or_default(),
                        logo_url: team.and_then(|t| t.logo_url.clone()),
                        count,
                    }
                })
                .collect()
        };

        Ok(TopTeamsDto {
            top_scoring: to_dtos(top_counts(scoring, top)),
            top_assisting: to_dtos(top_counts(assisting, top)),
            top_yellow_cards: to_dtos(top_counts(carded(CardType::Yellow), top)),
            top_red_cards: to_dtos(top_counts(carded(CardType::Red), top)),
        })
    }
}
