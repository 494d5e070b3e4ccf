use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use std::collections::{HashMap, HashSet};

use crate::{
    model::{
        fixture::MatchSummaryDto,
        league::{
            ActualLeagueMatchesDto, CityLeagueDto, GroupDto, LeagueWeekDto, SeasonDto,
            TeamLeagueWeekDto, WeekBlockDto, WeekDto, WeekMatchesDto,
        },
    },
    server::{
        data::{
            fixture::FixtureRepository, league::LeagueRepository, season::SeasonRepository,
            team::TeamRepository, week::WeekRepository,
        },
        error::AppError,
        model::{
            fixture::{into_day_dtos, MatchRow},
            schedule::{current_week, nearest_week, spans, split_by_group, upcoming_week_id, week_days, week_dto},
        },
    },
};

pub struct LeagueService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LeagueService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads the teams of `fixtures` and joins them into rows.
    async fn match_rows(
        &self,
        fixtures: Vec<entity::fixture::Model>,
    ) -> Result<Vec<MatchRow>, AppError> {
        let team_ids: HashSet<i32> = fixtures
            .iter()
            .flat_map(|f| [f.home_team_id, f.away_team_id])
            .collect();
        let teams = TeamRepository::new(self.db).get_by_ids(team_ids).await?;

        Ok(fixtures
            .into_iter()
            .map(|f| MatchRow::from_parts(f, &teams))
            .collect())
    }

    async fn league_or_not_found(&self, league_id: i32) -> Result<entity::league::Model, AppError> {
        LeagueRepository::new(self.db)
            .find_by_id(league_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("League {} not found", league_id)))
    }

    /// Leagues of a city, each with the week it is currently in.
    ///
    /// Leagues that have not started a week yet are left out.
    pub async fn leagues_with_current_week(
        &self,
        city_id: i32,
        today: NaiveDate,
    ) -> Result<Vec<CityLeagueDto>, AppError> {
        let leagues = LeagueRepository::new(self.db).get_by_city(city_id).await?;
        let weeks = WeekRepository::new(self.db)
            .get_by_leagues(leagues.iter().map(|l| l.id))
            .await?;

        let selected: Vec<(entity::league::Model, entity::week::Model)> = leagues
            .into_iter()
            .filter_map(|league| {
                let league_weeks: Vec<entity::week::Model> = weeks
                    .iter()
                    .filter(|w| w.league_id == league.id)
                    .cloned()
                    .collect();
                let week = current_week(&league_weeks, today)?.clone();
                Some((league, week))
            })
            .collect();

        let fixtures = FixtureRepository::new(self.db)
            .get_by_weeks(selected.iter().map(|(_, w)| w.id))
            .await?;
        let group_ids: HashSet<i32> = fixtures.iter().filter_map(|f| f.group_id).collect();
        let groups = SeasonRepository::new(self.db).get_groups_by_ids(group_ids).await?;
        let seasons = SeasonRepository::new(self.db)
            .get_by_ids(selected.iter().map(|(_, w)| w.season_id))
            .await?;
        let mut rows_by_week: HashMap<i32, Vec<MatchRow>> = HashMap::new();
        for row in self.match_rows(fixtures).await? {
            rows_by_week.entry(row.fixture.week_id).or_default().push(row);
        }

        Ok(selected
            .into_iter()
            .map(|(league, week)| {
                let rows = rows_by_week.remove(&week.id).unwrap_or_default();
                let (grouped_matches, ungrouped_matches) = split_by_group(rows, &groups);
                CityLeagueDto {
                    league_id: league.id,
                    logo_path: league.logo_path,
                    current_week: WeekMatchesDto {
                        week_id: week.id,
                        week_number: week.week_number,
                        week_name: week.week_name,
                        start_date: week.start_date,
                        end_date: week.end_date,
                        season_id: week.season_id,
                        season_name: seasons
                            .get(&week.season_id)
                            .map(|s| s.name.clone())
                            .unwrap_or_default(),
                        league_name: league.name.clone(),
                        grouped_matches,
                        ungrouped_matches,
                    },
                    league_name: league.name,
                }
            })
            .collect())
    }

    /// Per league of a city, the matches of the week starting nearest to today, by day.
    pub async fn actual_matches(
        &self,
        city_id: i32,
        today: NaiveDate,
    ) -> Result<Vec<ActualLeagueMatchesDto>, AppError> {
        let leagues = LeagueRepository::new(self.db).get_by_city(city_id).await?;
        let weeks = WeekRepository::new(self.db)
            .get_by_leagues(leagues.iter().map(|l| l.id))
            .await?;

        let selected: Vec<(entity::league::Model, entity::week::Model)> = leagues
            .into_iter()
            .filter_map(|league| {
                let league_weeks: Vec<entity::week::Model> = weeks
                    .iter()
                    .filter(|w| w.league_id == league.id)
                    .cloned()
                    .collect();
                let week = nearest_week(&league_weeks, today)?.clone();
                Some((league, week))
            })
            .collect();

        let fixtures = FixtureRepository::new(self.db)
            .get_by_weeks(selected.iter().map(|(_, w)| w.id))
            .await?;
        let mut rows_by_week: HashMap<i32, Vec<MatchRow>> = HashMap::new();
        for row in self.match_rows(fixtures).await? {
            rows_by_week.entry(row.fixture.week_id).or_default().push(row);
        }

        Ok(selected
            .into_iter()
            .filter_map(|(league, week)| {
                let rows = rows_by_week.remove(&week.id)?;
                Some(ActualLeagueMatchesDto {
                    league_id: league.id,
                    league_name: league.name,
                    logo_path: league.logo_path,
                    week_id: week.id,
                    week_number: week.week_number,
                    week_name: week.week_name,
                    days: into_day_dtos(rows),
                })
            })
            .collect())
    }

    /// Seasons of a league that have weeks, spanning their first to last week.
    pub async fn seasons(&self, league_id: i32) -> Result<Vec<SeasonDto>, AppError> {
        self.league_or_not_found(league_id).await?;

        let seasons = SeasonRepository::new(self.db).get_by_league(league_id).await?;
        let weeks = WeekRepository::new(self.db).get_by_league(league_id).await?;

        let mut result: Vec<SeasonDto> = seasons
            .into_iter()
            .filter_map(|season| {
                let season_weeks = weeks.iter().filter(|w| w.season_id == season.id);
                let start = season_weeks.clone().map(|w| w.start_date).min()?;
                let end = season_weeks.map(|w| w.end_date).max()?;
                Some(SeasonDto {
                    season_id: season.id,
                    name: season.name,
                    is_active: season.is_active,
                    start,
                    end,
                })
            })
            .collect();
        result.sort_by(|a, b| b.start.cmp(&a.start));

        Ok(result)
    }

    pub async fn groups(&self, league_id: i32, season_id: i32) -> Result<Vec<GroupDto>, AppError> {
        let groups = SeasonRepository::new(self.db)
            .get_groups(league_id, season_id)
            .await?;

        if groups.is_empty() {
            return Err(AppError::NotFound(format!(
                "No groups for league {} season {}",
                league_id, season_id
            )));
        }

        Ok(groups
            .into_iter()
            .map(|g| GroupDto {
                group_id: g.id,
                name: g.name,
                description: g.description,
            })
            .collect())
    }

    /// Weeks of a league season with their matches by day.
    ///
    /// With `group_id`, each day also lists that group's matches.
    pub async fn weeks(
        &self,
        league_id: i32,
        season_id: i32,
        group_id: Option<i32>,
        today: NaiveDate,
    ) -> Result<Vec<LeagueWeekDto>, AppError> {
        self.league_or_not_found(league_id).await?;
        SeasonRepository::new(self.db)
            .find_by_id(season_id)
            .await?
            .filter(|s| s.league_id == league_id)
            .ok_or_else(|| {
                AppError::NotFound(format!("Season {} not found for league {}", season_id, league_id))
            })?;

        let weeks = WeekRepository::new(self.db)
            .get_by_league_season(league_id, season_id)
            .await?;
        let fixtures = FixtureRepository::new(self.db)
            .get_by_weeks(weeks.iter().map(|w| w.id))
            .await?;
        let upcoming = upcoming_week_id(&weeks, today);
        let groups = SeasonRepository::new(self.db)
            .get_groups_by_ids(group_id)
            .await?;

        let mut rows_by_week: HashMap<i32, Vec<MatchRow>> = HashMap::new();
        for row in self.match_rows(fixtures).await? {
            rows_by_week.entry(row.fixture.week_id).or_default().push(row);
        }

        Ok(weeks
            .into_iter()
            .map(|week| LeagueWeekDto {
                is_current_week: upcoming == Some(week.id),
                days: week_days(
                    rows_by_week.remove(&week.id).unwrap_or_default(),
                    group_id,
                    &groups,
                ),
                week_id: week.id,
                week_number: week.week_number,
                week_name: week.week_name,
                start_date: week.start_date,
                end_date: week.end_date,
            })
            .collect())
    }

    /// Per league a team plays in, the week of its matches that matters now.
    ///
    /// That is the week spanning today, or else the team's earliest week,
    /// flagged with `is_next_week`.
    pub async fn team_current_weeks(
        &self,
        team_id: i32,
        today: NaiveDate,
    ) -> Result<Vec<TeamLeagueWeekDto>, AppError> {
        let fixtures = FixtureRepository::new(self.db).get_by_team(team_id).await?;
        let leagues = LeagueRepository::new(self.db)
            .get_by_ids(fixtures.iter().map(|f| f.league_id))
            .await?;
        let weeks = WeekRepository::new(self.db)
            .get_by_ids(fixtures.iter().map(|f| f.week_id))
            .await?;
        let rows = self.match_rows(fixtures).await?;

        let mut leagues: Vec<entity::league::Model> = leagues.into_values().collect();
        leagues.sort_by(|a, b| b.start_date.cmp(&a.start_date).then(b.id.cmp(&a.id)));

        let mut result = Vec::new();
        for league in leagues {
            let mut league_weeks: Vec<&entity::week::Model> =
                weeks.values().filter(|w| w.league_id == league.id).collect();
            league_weeks.sort_by_key(|w| w.week_number);

            let (week, is_current_week) = match league_weeks.iter().find(|w| spans(w, today)) {
                Some(week) => (*week, true),
                None => match league_weeks.iter().min_by_key(|w| (w.start_date, w.week_number)) {
                    Some(week) => (*week, false),
                    None => continue,
                },
            };

            let matches: Vec<MatchSummaryDto> = rows
                .iter()
                .filter(|r| r.fixture.week_id == week.id)
                .cloned()
                .map(|r| r.into_dto_for(Some(team_id)))
                .collect();

            result.push(TeamLeagueWeekDto {
                league_id: league.id,
                league_name: league.name,
                logo_path: league.logo_path,
                week_id: week.id,
                week_number: week.week_number,
                week_name: week.week_name.clone(),
                start_date: week.start_date,
                end_date: week.end_date,
                is_current_week,
                is_next_week: !is_current_week,
                matches,
            });
        }

        Ok(result)
    }

    /// Every week of a league by week number.
    pub async fn league_weeks(&self, league_id: i32) -> Result<Vec<WeekDto>, AppError> {
        self.league_or_not_found(league_id).await?;

        let weeks = WeekRepository::new(self.db).get_by_league(league_id).await?;

        Ok(weeks.iter().map(week_dto).collect())
    }

    /// Matches of one week of a league, by kick-off.
    pub async fn week_matches(
        &self,
        league_id: i32,
        week_id: i32,
    ) -> Result<Vec<MatchSummaryDto>, AppError> {
        let fixtures = FixtureRepository::new(self.db).get_by_weeks([week_id]).await?;
        let fixtures = fixtures.into_iter().filter(|f| f.league_id == league_id).collect();

        Ok(self
            .match_rows(fixtures)
            .await?
            .into_iter()
            .map(MatchRow::into_dto)
            .collect())
    }

    /// The league week starting nearest to today, with its matches.
    ///
    /// A league without weeks yields a block with no week and no matches.
    pub async fn actual_week_matches(
        &self,
        league_id: i32,
        today: NaiveDate,
    ) -> Result<WeekBlockDto, AppError> {
        let league = self.league_or_not_found(league_id).await?;
        let weeks = WeekRepository::new(self.db).get_by_league(league_id).await?;

        let Some(week) = nearest_week(&weeks, today) else {
            return Ok(WeekBlockDto {
                league_id: league.id,
                league_name: league.name,
                week_id: None,
                week_name: None,
                matches: Vec::new(),
            });
        };

        let matches = self.week_matches(league_id, week.id).await?;

        Ok(WeekBlockDto {
            league_id: league.id,
            league_name: league.name,
            week_id: Some(week.id),
            week_name: week.week_name.clone(),
            matches,
        })
    }
}
