//! Per-player and per-team counters built from match events.

use entity::card::CardType;
use std::collections::{HashMap, HashSet};

use crate::model::statistics::{ScorerDto, TeamGoalStatsDto};

/// Everything a player did across a set of matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerTally {
    pub appearances: i32,
    pub started: i32,
    pub substitute: i32,
    /// Goals excluding own goals.
    pub goals: i32,
    pub penalties: i32,
    pub own_goals: i32,
    pub assists: i32,
    pub yellow_cards: i32,
    pub red_cards: i32,
    pub man_of_the_match: i32,
}

impl PlayerTally {
    pub fn has_activity(&self) -> bool {
        *self != Self::default()
    }
}

/// Events a tally is built from, all already scoped to the matches of interest.
#[derive(Debug, Default)]
pub struct MatchEvents<'a> {
    pub squads: &'a [entity::match_squad::Model],
    pub goals: &'a [entity::goal::Model],
    pub cards: &'a [entity::card::Model],
    pub fixtures: &'a [entity::fixture::Model],
}

/// Builds a tally per player id.
pub fn tally_players(events: &MatchEvents<'_>) -> HashMap<i32, PlayerTally> {
    let mut tallies: HashMap<i32, PlayerTally> = HashMap::new();

    for squad in events.squads {
        let tally = tallies.entry(squad.player_id).or_default();
        tally.appearances += 1;
        if squad.is_starting11 && !squad.is_substitute {
            tally.started += 1;
        } else {
            tally.substitute += 1;
        }
    }

    for goal in events.goals {
        let tally = tallies.entry(goal.player_id).or_default();
        if goal.is_own_goal {
            tally.own_goals += 1;
        } else {
            tally.goals += 1;
            if goal.is_penalty {
                tally.penalties += 1;
            }
        }

        if let Some(assist) = goal.assist_player_id {
            tallies.entry(assist).or_default().assists += 1;
        }
    }

    for card in events.cards {
        let tally = tallies.entry(card.player_id).or_default();
        match card.card_type {
            CardType::Yellow => tally.yellow_cards += 1,
            CardType::Red => tally.red_cards += 1,
        }
    }

    for fixture in events.fixtures {
        if let Some(player_id) = fixture.man_of_the_match_id {
            tallies.entry(player_id).or_default().man_of_the_match += 1;
        }
    }

    tallies
}

/// Goal and assist totals for one player in a league season.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScorerLine {
    pub player_id: i32,
    pub goals: i32,
    pub penalty_goals: i32,
    pub assists: i32,
    pub matches: HashSet<i32>,
}

impl ScorerLine {
    pub fn into_dto(
        self,
        players: &HashMap<i32, entity::player::Model>,
        teams: &HashMap<i32, entity::team::Model>,
    ) -> ScorerDto {
        let player = players.get(&self.player_id);
        let team_id = player.and_then(|p| p.team_id);
        ScorerDto {
            player_id: self.player_id,
            player_name: player.map(|p| p.full_name()).unwrap_or_default(),
            icon: player.and_then(|p| p.icon.clone()),
            team_id,
            team_name: team_id.and_then(|id| teams.get(&id)).map(|t| t.name.clone()),
            goals: self.goals,
            penalty_goals: self.penalty_goals,
            assists: self.assists,
            matches: self.matches.len() as i32,
        }
    }
}

/// League-wide goal figures.
#[derive(Debug, Clone, PartialEq)]
pub struct LeagueGoalSummary {
    pub scorers: Vec<ScorerLine>,
    pub assisters: Vec<ScorerLine>,
    pub total_goals: i32,
    pub total_assists: i32,
    pub total_penalty_goals: i32,
    pub total_own_goals: i32,
    pub average_goals_per_match: f64,
}

/// Ranks scorers and assisters from every goal of a league season.
///
/// Own goals never count for the scorer but still count in the totals.
/// Scorers are ordered by goals, then assists, descending, then fewer matches;
/// assisters by assists, then goals, then fewer matches.
pub fn summarize_goals(goals: &[entity::goal::Model]) -> LeagueGoalSummary {
    let mut lines: HashMap<i32, ScorerLine> = HashMap::new();
    let mut matches_with_goals: HashSet<i32> = HashSet::new();
    let mut total_assists = 0;
    let mut total_penalty_goals = 0;
    let mut total_own_goals = 0;

    for goal in goals {
        matches_with_goals.insert(goal.match_id);

        if goal.is_own_goal {
            total_own_goals += 1;
        } else {
            let line = lines.entry(goal.player_id).or_insert_with(|| ScorerLine {
                player_id: goal.player_id,
                ..Default::default()
            });
            line.goals += 1;
            line.matches.insert(goal.match_id);
            if goal.is_penalty {
                line.penalty_goals += 1;
                total_penalty_goals += 1;
            }
        }

        if let Some(assist) = goal.assist_player_id {
            total_assists += 1;
            let line = lines.entry(assist).or_insert_with(|| ScorerLine {
                player_id: assist,
                ..Default::default()
            });
            line.assists += 1;
            line.matches.insert(goal.match_id);
        }
    }

    let mut scorers: Vec<ScorerLine> = lines.values().filter(|l| l.goals > 0).cloned().collect();
    scorers.sort_by(|a, b| {
        b.goals
            .cmp(&a.goals)
            .then_with(|| b.assists.cmp(&a.assists))
            .then_with(|| a.matches.len().cmp(&b.matches.len()))
            .then_with(|| a.player_id.cmp(&b.player_id))
    });

    let mut assisters: Vec<ScorerLine> = lines.into_values().filter(|l| l.assists > 0).collect();
    assisters.sort_by(|a, b| {
        b.assists
            .cmp(&a.assists)
            .then_with(|| b.goals.cmp(&a.goals))
            .then_with(|| a.matches.len().cmp(&b.matches.len()))
            .then_with(|| a.player_id.cmp(&b.player_id))
    });

    let total_goals = goals.len() as i32;
    let average_goals_per_match = if matches_with_goals.is_empty() {
        0.0
    } else {
        total_goals as f64 / matches_with_goals.len() as f64
    };

    LeagueGoalSummary {
        scorers,
        assisters,
        total_goals,
        total_assists,
        total_penalty_goals,
        total_own_goals,
        average_goals_per_match,
    }
}

/// Builds one row per team that played in the given matches, ordered by total goals.
///
/// `players` maps player id to player row and is used to attribute cards and
/// assists to the player's team.
pub fn team_goal_stats(
    fixtures: &[entity::fixture::Model],
    goals: &[entity::goal::Model],
    cards: &[entity::card::Model],
    players: &HashMap<i32, entity::player::Model>,
    teams: &HashMap<i32, entity::team::Model>,
) -> Vec<TeamGoalStatsDto> {
    let mut rows: HashMap<i32, TeamGoalStatsDto> = HashMap::new();
    let row_for = |team_id: i32, rows: &mut HashMap<i32, TeamGoalStatsDto>| {
        rows.entry(team_id).or_insert_with(|| {
            let team = teams.get(&team_id);
            TeamGoalStatsDto {
                team_id,
                team_name: team.map(|t| t.name.clone()).unwrap_or_default(),
                logo_url: team.and_then(|t| t.logo_url.clone()),
                goals: 0,
                penalty_goals: 0,
                own_goals: 0,
                assisted_goals: 0,
                yellow_cards: 0,
                red_cards: 0,
                played: 0,
            }
        });
    };

    for fixture in fixtures.iter().filter(|f| f.is_played) {
        for team_id in [fixture.home_team_id, fixture.away_team_id] {
            row_for(team_id, &mut rows);
            if let Some(row) = rows.get_mut(&team_id) {
                row.played += 1;
            }
        }
    }

    for goal in goals {
        row_for(goal.team_id, &mut rows);
        if let Some(row) = rows.get_mut(&goal.team_id) {
            if goal.is_own_goal {
                row.own_goals += 1;
            } else {
                row.goals += 1;
                if goal.is_penalty {
                    row.penalty_goals += 1;
                }
                if goal.assist_player_id.is_some() {
                    row.assisted_goals += 1;
                }
            }
        }
    }

    for card in cards {
        let Some(team_id) = players.get(&card.player_id).and_then(|p| p.team_id) else {
            continue;
        };
        row_for(team_id, &mut rows);
        if let Some(row) = rows.get_mut(&team_id) {
            match card.card_type {
                CardType::Yellow => row.yellow_cards += 1,
                CardType::Red => row.red_cards += 1,
            }
        }
    }

    let mut rows: Vec<TeamGoalStatsDto> = rows.into_values().collect();
    rows.sort_by(|a, b| {
        b.goals
            .cmp(&a.goals)
            .then_with(|| a.team_name.cmp(&b.team_name))
    });
    rows
}

/// Counts occurrences per id and keeps the `top` highest, ties by lower id.
pub fn top_counts(ids: impl IntoIterator<Item = i32>, top: usize) -> Vec<(i32, i32)> {
    let mut counts: HashMap<i32, i32> = HashMap::new();
    for id in ids {
        *counts.entry(id).or_default() += 1;
    }

    let mut counts: Vec<(i32, i32)> = counts.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    counts.truncate(top);
    counts
}
