//! League table computation.
//!
//! Standings are derived entirely in memory from played matches and manual
//! penalties. A win is worth 3 points, a draw 1. Penalty points are subtracted
//! from the total. Rows are ordered by points, goal difference and goals for,
//! all descending, with the team name as the final tie-break.

use std::collections::{BTreeMap, HashMap};

use crate::model::standings::{GroupTableDto, RankingStatusDto, StandingRowDto};

/// Name of the table for matches that belong to no group.
pub const LEAGUE_TABLE_NAME: &str = "League";

/// Accumulated record of one team inside one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingRow {
    pub team_id: i32,
    pub team_name: String,
    pub team_logo: Option<String>,
    pub played: i32,
    pub won: i32,
    pub drawn: i32,
    pub lost: i32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub penalty_points: i32,
    pub penalty_description: Option<String>,
}

impl StandingRow {
    fn new(team_id: i32, team: Option<&entity::team::Model>) -> Self {
        Self {
            team_id,
            team_name: team.map(|t| t.name.clone()).unwrap_or_default(),
            team_logo: team.and_then(|t| t.logo_url.clone()),
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            penalty_points: 0,
            penalty_description: None,
        }
    }

    fn record(&mut self, scored: i32, conceded: i32) {
        self.played += 1;
        self.goals_for += scored;
        self.goals_against += conceded;
        match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => self.won += 1,
            std::cmp::Ordering::Equal => self.drawn += 1,
            std::cmp::Ordering::Less => self.lost += 1,
        }
    }

    pub fn goal_difference(&self) -> i32 {
        self.goals_for - self.goals_against
    }

    pub fn points(&self) -> i32 {
        3 * self.won + self.drawn - self.penalty_points
    }
}

/// Summed penalty for one team.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Penalty {
    pub points: i32,
    pub description: Option<String>,
}

/// Sums penalty rows per team, joining descriptions with `"; "`.
pub fn sum_penalties(rows: &[entity::team_penalty::Model]) -> HashMap<i32, Penalty> {
    let mut penalties: HashMap<i32, (i32, Vec<String>)> = HashMap::new();

    for row in rows {
        let entry = penalties.entry(row.team_id).or_default();
        entry.0 += row.penalty_points;
        if let Some(description) = row.description.as_ref().filter(|d| !d.trim().is_empty()) {
            entry.1.push(description.clone());
        }
    }

    penalties
        .into_iter()
        .map(|(team_id, (points, descriptions))| {
            let description = (!descriptions.is_empty()).then(|| descriptions.join("; "));
            (team_id, Penalty { points, description })
        })
        .collect()
}

/// Builds one sorted table from the given played matches.
///
/// Unplayed matches are ignored. A missing score counts as 0.
pub fn compute_table(
    matches: &[&entity::fixture::Model],
    teams: &HashMap<i32, entity::team::Model>,
    penalties: &HashMap<i32, Penalty>,
) -> Vec<StandingRow> {
    let mut rows: HashMap<i32, StandingRow> = HashMap::new();

    for m in matches.iter().filter(|m| m.is_played) {
        let home = m.home_score.unwrap_or(0);
        let away = m.away_score.unwrap_or(0);

        rows.entry(m.home_team_id)
            .or_insert_with(|| StandingRow::new(m.home_team_id, teams.get(&m.home_team_id)))
            .record(home, away);
        rows.entry(m.away_team_id)
            .or_insert_with(|| StandingRow::new(m.away_team_id, teams.get(&m.away_team_id)))
            .record(away, home);
    }

    let mut rows: Vec<StandingRow> = rows
        .into_values()
        .map(|mut row| {
            if let Some(penalty) = penalties.get(&row.team_id) {
                row.penalty_points = penalty.points;
                row.penalty_description = penalty.description.clone();
            }
            row
        })
        .collect();

    rows.sort_by(|a, b| {
        b.points()
            .cmp(&a.points())
            .then_with(|| b.goal_difference().cmp(&a.goal_difference()))
            .then_with(|| b.goals_for.cmp(&a.goals_for))
            .then_with(|| a.team_name.cmp(&b.team_name))
    });

    rows
}

/// A computed table for one group, or for the whole league when `group_id` is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupTable {
    pub group_id: Option<i32>,
    pub group_name: String,
    pub rows: Vec<StandingRow>,
}

/// Partitions matches by group and computes one table per group.
///
/// Group tables come first ordered by name; the ungrouped "League" table is last.
pub fn compute_group_tables(
    matches: &[entity::fixture::Model],
    groups: &HashMap<i32, entity::league_group::Model>,
    teams: &HashMap<i32, entity::team::Model>,
    penalties: &HashMap<i32, Penalty>,
) -> Vec<GroupTable> {
    let mut partitions: BTreeMap<Option<i32>, Vec<&entity::fixture::Model>> = BTreeMap::new();
    for m in matches.iter().filter(|m| m.is_played) {
        partitions.entry(m.group_id).or_default().push(m);
    }

    let mut tables: Vec<GroupTable> = partitions
        .into_iter()
        .map(|(group_id, matches)| GroupTable {
            group_id,
            group_name: group_id
                .and_then(|id| groups.get(&id))
                .map(|g| g.name.clone())
                .unwrap_or_else(|| LEAGUE_TABLE_NAME.to_string()),
            rows: compute_table(&matches, teams, penalties),
        })
        .collect();

    tables.sort_by(|a, b| {
        a.group_id
            .is_none()
            .cmp(&b.group_id.is_none())
            .then_with(|| a.group_name.cmp(&b.group_name))
    });

    tables
}

/// League and season fields repeated on every row.
#[derive(Debug, Clone)]
pub struct StandingsContext {
    pub league_id: i32,
    pub league_name: String,
    pub season_id: i32,
    pub season_name: String,
    pub ranking_statuses: Vec<RankingStatusDto>,
}

impl StandingsContext {
    pub fn new(
        league: &entity::league::Model,
        season: &entity::season::Model,
        statuses: Vec<entity::league_ranking_status::Model>,
    ) -> Self {
        let mut statuses = statuses;
        statuses.sort_by_key(|s| s.order_no);

        Self {
            league_id: league.id,
            league_name: league.name.clone(),
            season_id: season.id,
            season_name: season.name.clone(),
            ranking_statuses: statuses
                .into_iter()
                .map(|s| RankingStatusDto {
                    order_no: s.order_no,
                    color_code: s.color_code,
                    description: s.description,
                })
                .collect(),
        }
    }
}

impl GroupTable {
    /// Converts to flat rows with 1-based positions.
    pub fn into_rows(self, ctx: &StandingsContext, current_team: Option<i32>) -> Vec<StandingRowDto> {
        let group_id = self.group_id;
        let group_name = self.group_name;

        self.rows
            .into_iter()
            .enumerate()
            .map(|(index, row)| StandingRowDto {
                group_id,
                group_name: group_name.clone(),
                league_id: ctx.league_id,
                league_name: ctx.league_name.clone(),
                season_id: ctx.season_id,
                season_name: ctx.season_name.clone(),
                position: index as i32 + 1,
                goal_difference: row.goal_difference(),
                points: row.points(),
                is_current_team: current_team == Some(row.team_id),
                team_id: row.team_id,
                team_name: row.team_name,
                team_logo: row.team_logo,
                played: row.played,
                won: row.won,
                drawn: row.drawn,
                lost: row.lost,
                goals_for: row.goals_for,
                goals_against: row.goals_against,
                penalty_points: row.penalty_points,
                penalty_description: row.penalty_description,
                ranking_statuses: ctx.ranking_statuses.clone(),
            })
            .collect()
    }

    pub fn into_dto(self, ctx: &StandingsContext, current_team: Option<i32>) -> GroupTableDto {
        let group_id = self.group_id;
        let group_name = self.group_name.clone();
        GroupTableDto {
            group_id,
            group_name,
            rows: self.into_rows(ctx, current_team),
        }
    }
}
