use chrono::{Duration, NaiveDate, NaiveTime};
use sea_orm::DatabaseConnection;
use std::collections::HashSet;

use crate::{
    model::fixture::{
        FormationDto, MatchDetailsDto, MatchSquadsDto, MatchSummaryDto, SquadSideDto,
        WebMatchDetailsDto,
    },
    server::{
        data::{
            event::MatchEventRepository, fixture::FixtureRepository, league::LeagueRepository,
            player::PlayerRepository, team::TeamRepository,
        },
        error::AppError,
        model::{
            event::EventLookup,
            fixture::{status_label, team_brief, MatchRow, RecordGoalParams},
        },
    },
};

/// Number of matches on the website's "last matches" strip.
const LAST_MATCHES: u64 = 4;

/// Substitution entered from the announcer screen.
#[derive(Debug, Clone)]
pub struct SubstitutionParams {
    pub match_id: i32,
    pub player_in_id: i32,
    pub player_out_id: i32,
    pub minute: i32,
}

fn require_positive(value: i32, name: &str) -> Result<(), AppError> {
    if value <= 0 {
        return Err(AppError::BadRequest(format!("{} must be positive", name)));
    }
    Ok(())
}

fn require_minute(minute: i32) -> Result<(), AppError> {
    if minute < 0 {
        return Err(AppError::BadRequest("minute must not be negative".to_string()));
    }
    Ok(())
}

pub struct MatchService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MatchService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    async fn match_or_not_found(&self, match_id: i32) -> Result<entity::fixture::Model, AppError> {
        FixtureRepository::new(self.db)
            .find_by_id(match_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Match {} not found", match_id)))
    }

    /// Loads every player and team referenced by the given rows.
    async fn lookup(
        &self,
        player_ids: HashSet<i32>,
        mut team_ids: HashSet<i32>,
    ) -> Result<EventLookup, AppError> {
        let players = PlayerRepository::new(self.db).get_by_ids(player_ids).await?;
        team_ids.extend(players.values().filter_map(|p| p.team_id));
        let teams = TeamRepository::new(self.db).get_by_ids(team_ids).await?;

        Ok(EventLookup { players, teams })
    }

    /// Score, events and man of the match of one match.
    pub async fn details(&self, match_id: i32) -> Result<MatchDetailsDto, AppError> {
        let fixture = self.match_or_not_found(match_id).await?;
        let events = MatchEventRepository::new(self.db);
        let goals = events.goals_for_matches(&[match_id]).await?;
        let cards = events.cards_for_matches(&[match_id]).await?;
        let league = LeagueRepository::new(self.db).find_by_id(fixture.league_id).await?;

        let mut player_ids: HashSet<i32> = goals
            .iter()
            .flat_map(|g| std::iter::once(g.player_id).chain(g.assist_player_id))
            .chain(cards.iter().map(|c| c.player_id))
            .collect();
        player_ids.extend(fixture.man_of_the_match_id);
        let team_ids: HashSet<i32> = goals
            .iter()
            .map(|g| g.team_id)
            .chain([fixture.home_team_id, fixture.away_team_id])
            .collect();
        let lookup = self.lookup(player_ids, team_ids).await?;

        let side = |team_id: i32| {
            lookup
                .teams
                .get(&team_id)
                .map(team_brief)
                .ok_or_else(|| AppError::NotFound(format!("Team {} not found", team_id)))
        };
        let home_team = side(fixture.home_team_id)?;
        let away_team = side(fixture.away_team_id)?;

        Ok(MatchDetailsDto {
            id: fixture.id,
            league_id: fixture.league_id,
            league_name: league.as_ref().map(|l| l.name.clone()).unwrap_or_default(),
            league_icon: league.and_then(|l| l.logo_path),
            home_team,
            away_team,
            home_score: fixture.home_score,
            away_score: fixture.away_score,
            is_played: fixture.is_played,
            status: status_label(&fixture.status).to_string(),
            match_date: fixture.match_date,
            match_url: fixture.match_url,
            goals: goals.iter().map(|g| lookup.goal(g)).collect(),
            cards: cards.iter().map(|c| lookup.card(c)).collect(),
            man_of_the_match: fixture
                .man_of_the_match_id
                .map(|id| lookup.man_of_the_match(id, &goals)),
        })
    }

    /// Starting eleven and substitutes of both sides.
    pub async fn squads(&self, match_id: i32) -> Result<MatchSquadsDto, AppError> {
        let fixture = self.match_or_not_found(match_id).await?;
        let events = MatchEventRepository::new(self.db);
        let squads = events.squads_for_matches(&[match_id]).await?;
        let formations = events.formations_for_match(match_id).await?;

        let lookup = self
            .lookup(
                squads.iter().map(|s| s.player_id).collect(),
                [fixture.home_team_id, fixture.away_team_id].into_iter().collect(),
            )
            .await?;

        let side = |team_id: i32| {
            let team = lookup.teams.get(&team_id);
            let (starting, substitutes): (Vec<_>, Vec<_>) = squads
                .iter()
                .filter(|s| s.team_id == team_id)
                .partition(|s| s.is_starting11 && !s.is_substitute);
            SquadSideDto {
                team_id,
                team_name: team.map(|t| t.name.clone()).unwrap_or_default(),
                team_logo: team.and_then(|t| t.logo_url.clone()),
                formation_image: formations
                    .iter()
                    .find(|f| f.team_id == team_id)
                    .map(|f| f.formation_image.clone()),
                starting: starting.into_iter().map(|s| lookup.squad_player(s)).collect(),
                substitutes: substitutes.into_iter().map(|s| lookup.squad_player(s)).collect(),
            }
        };

        Ok(MatchSquadsDto {
            match_id,
            home: side(fixture.home_team_id),
            away: side(fixture.away_team_id),
        })
    }

    /// Matches kicking off on `today` (UTC) in the leagues of a city.
    pub async fn announcer_today(
        &self,
        city_id: i32,
        today: NaiveDate,
    ) -> Result<Vec<MatchSummaryDto>, AppError> {
        let leagues = LeagueRepository::new(self.db).get_by_city(city_id).await?;
        let from = today.and_time(NaiveTime::MIN).and_utc();
        let to = from + Duration::days(1);

        let fixtures = FixtureRepository::new(self.db)
            .get_by_leagues_between(leagues.iter().map(|l| l.id), from, to)
            .await?;

        self.summaries(fixtures).await
    }

    async fn summaries(
        &self,
        fixtures: Vec<entity::fixture::Model>,
    ) -> Result<Vec<MatchSummaryDto>, AppError> {
        let teams = TeamRepository::new(self.db)
            .get_by_ids(fixtures.iter().flat_map(|f| [f.home_team_id, f.away_team_id]))
            .await?;

        Ok(fixtures
            .into_iter()
            .map(|f| MatchRow::from_parts(f, &teams).into_dto())
            .collect())
    }

    pub async fn add_substitution(
        &self,
        params: SubstitutionParams,
    ) -> Result<entity::match_substitution::Model, AppError> {
        require_positive(params.match_id, "match_id")?;
        require_positive(params.player_in_id, "player_in_id")?;
        require_positive(params.player_out_id, "player_out_id")?;
        require_minute(params.minute)?;

        self.match_or_not_found(params.match_id).await?;
        let players = PlayerRepository::new(self.db)
            .get_by_ids([params.player_in_id, params.player_out_id])
            .await?;
        for id in [params.player_in_id, params.player_out_id] {
            if !players.contains_key(&id) {
                return Err(AppError::NotFound(format!("Player {} not found", id)));
            }
        }

        let substitution = FixtureRepository::new(self.db)
            .create_substitution(
                params.match_id,
                params.player_in_id,
                params.player_out_id,
                params.minute,
            )
            .await?;

        tracing::info!(
            match_id = params.match_id,
            player_in = params.player_in_id,
            player_out = params.player_out_id,
            "Recorded substitution"
        );

        Ok(substitution)
    }

    /// Records a goal and, when given, overwrites either score.
    pub async fn update_score(
        &self,
        params: RecordGoalParams,
    ) -> Result<entity::goal::Model, AppError> {
        require_positive(params.match_id, "match_id")?;
        require_positive(params.team_id, "team_id")?;
        require_positive(params.player_id, "player_id")?;
        require_minute(params.minute)?;

        self.match_or_not_found(params.match_id).await?;

        let goal = FixtureRepository::new(self.db).record_goal(params).await?;

        tracing::info!(match_id = goal.match_id, goal_id = goal.id, "Recorded goal");

        Ok(goal)
    }

    /// The match with every goal, card, formation and squad row.
    pub async fn web_details(&self, match_id: i32) -> Result<WebMatchDetailsDto, AppError> {
        let fixture = self.match_or_not_found(match_id).await?;
        let events = MatchEventRepository::new(self.db);
        let goals = events.goals_for_matches(&[match_id]).await?;
        let cards = events.cards_for_matches(&[match_id]).await?;
        let squads = events.squads_for_matches(&[match_id]).await?;
        let formations = events.formations_for_match(match_id).await?;

        let player_ids: HashSet<i32> = goals
            .iter()
            .flat_map(|g| std::iter::once(g.player_id).chain(g.assist_player_id))
            .chain(cards.iter().map(|c| c.player_id))
            .chain(squads.iter().map(|s| s.player_id))
            .collect();
        let team_ids: HashSet<i32> = goals
            .iter()
            .map(|g| g.team_id)
            .chain([fixture.home_team_id, fixture.away_team_id])
            .collect();
        let lookup = self.lookup(player_ids, team_ids).await?;

        let squad_of = |team_id: i32| {
            squads
                .iter()
                .filter(|s| s.team_id == team_id)
                .map(|s| lookup.squad_player(s))
                .collect()
        };
        let home_squad = squad_of(fixture.home_team_id);
        let away_squad = squad_of(fixture.away_team_id);

        Ok(WebMatchDetailsDto {
            goals: goals.iter().map(|g| lookup.goal(g)).collect(),
            cards: cards.iter().map(|c| lookup.card(c)).collect(),
            formations: formations
                .into_iter()
                .map(|f| FormationDto {
                    team_id: f.team_id,
                    formation_image: f.formation_image,
                })
                .collect(),
            home_squad,
            away_squad,
            summary: MatchRow::from_parts(fixture, &lookup.teams).into_dto(),
        })
    }

    /// Most recent matches across a city's leagues.
    pub async fn last_matches(&self, city_id: i32) -> Result<Vec<MatchSummaryDto>, AppError> {
        let leagues = LeagueRepository::new(self.db).get_by_city(city_id).await?;
        let fixtures = FixtureRepository::new(self.db)
            .latest_in_leagues(leagues.iter().map(|l| l.id), LAST_MATCHES)
            .await?;

        self.summaries(fixtures).await
    }
}
