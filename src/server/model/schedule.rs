//! Week selection and match grouping for league calendars.

use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

use crate::{
    model::{
        fixture::MatchSummaryDto,
        league::{GroupMatchesDto, WeekDayDto, WeekDto},
    },
    server::{
        model::fixture::{group_by_day, MatchRow},
        util::time::{day_distance, day_label},
    },
};

pub fn spans(week: &entity::week::Model, today: NaiveDate) -> bool {
    week.start_date <= today && today <= week.end_date
}

/// The week a league is "in" on `today`.
///
/// The lowest-numbered week spanning today, otherwise the highest-numbered
/// week that already started.
pub fn current_week(weeks: &[entity::week::Model], today: NaiveDate) -> Option<&entity::week::Model> {
    weeks
        .iter()
        .filter(|w| spans(w, today))
        .min_by_key(|w| w.week_number)
        .or_else(|| {
            weeks
                .iter()
                .filter(|w| w.start_date < today)
                .max_by_key(|w| w.week_number)
        })
}

/// The week whose start is the fewest days away from `today`, in either direction.
///
/// Ties go to the earlier week in `weeks`.
pub fn nearest_week(weeks: &[entity::week::Model], today: NaiveDate) -> Option<&entity::week::Model> {
    weeks
        .iter()
        .enumerate()
        .min_by_key(|(index, w)| (day_distance(w.start_date, today), *index))
        .map(|(_, w)| w)
}

/// Id of the single week with the smallest end date still after `today`.
pub fn upcoming_week_id(weeks: &[entity::week::Model], today: NaiveDate) -> Option<i32> {
    weeks
        .iter()
        .filter(|w| w.end_date > today)
        .min_by_key(|w| (w.end_date, w.week_number))
        .map(|w| w.id)
}

/// Splits rows into one block per group, ordered by group name, plus the ungrouped rest.
pub fn split_by_group(
    rows: Vec<MatchRow>,
    groups: &HashMap<i32, entity::league_group::Model>,
) -> (Vec<GroupMatchesDto>, Vec<MatchSummaryDto>) {
    let mut grouped: BTreeMap<i32, Vec<MatchSummaryDto>> = BTreeMap::new();
    let mut ungrouped = Vec::new();

    for row in rows {
        match row.fixture.group_id {
            Some(group_id) => grouped.entry(group_id).or_default().push(row.into_dto()),
            None => ungrouped.push(row.into_dto()),
        }
    }

    let mut blocks: Vec<GroupMatchesDto> = grouped
        .into_iter()
        .map(|(group_id, matches)| GroupMatchesDto {
            group_id,
            group_name: groups
                .get(&group_id)
                .map(|g| g.name.clone())
                .unwrap_or_default(),
            matches,
        })
        .collect();
    blocks.sort_by(|a, b| a.group_name.cmp(&b.group_name).then(a.group_id.cmp(&b.group_id)));

    (blocks, ungrouped)
}

/// Match days of one league week.
///
/// `grouped_matches` holds a block for `group_id` only; matches of other
/// groups appear in neither list.
pub fn week_days(
    rows: Vec<MatchRow>,
    group_id: Option<i32>,
    groups: &HashMap<i32, entity::league_group::Model>,
) -> Vec<WeekDayDto> {
    group_by_day(rows)
        .into_iter()
        .map(|(day, rows)| {
            let shown: Vec<MatchRow> = rows
                .into_iter()
                .filter(|row| row.fixture.group_id.is_none() || row.fixture.group_id == group_id)
                .collect();
            let (grouped_matches, ungrouped_matches) = split_by_group(shown, groups);
            WeekDayDto {
                date: day_label(day),
                full_date: day,
                grouped_matches,
                ungrouped_matches,
            }
        })
        .collect()
}

pub fn week_dto(week: &entity::week::Model) -> WeekDto {
    WeekDto {
        week_id: week.id,
        season_id: week.season_id,
        week_number: week.week_number,
        week_name: week.week_name.clone(),
        start_date: week.start_date,
        end_date: week.end_date,
    }
}
