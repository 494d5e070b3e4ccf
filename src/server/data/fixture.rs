use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::model::fixture::RecordGoalParams;

pub struct FixtureRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FixtureRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::fixture::Model>, DbErr> {
        entity::prelude::Fixture::find_by_id(id).one(self.db).await
    }

    pub async fn get_by_ids(
        &self,
        ids: impl IntoIterator<Item = i32>,
    ) -> Result<Vec<entity::fixture::Model>, DbErr> {
        let ids: Vec<i32> = ids.into_iter().collect();
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Fixture::find()
            .filter(entity::fixture::Column::Id.is_in(ids))
            .all(self.db)
            .await
    }

    /// Gets matches of the given weeks ordered by kick-off.
    pub async fn get_by_weeks(
        &self,
        week_ids: impl IntoIterator<Item = i32>,
    ) -> Result<Vec<entity::fixture::Model>, DbErr> {
        let week_ids: Vec<i32> = week_ids.into_iter().collect();
        if week_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Fixture::find()
            .filter(entity::fixture::Column::WeekId.is_in(week_ids))
            .order_by_asc(entity::fixture::Column::MatchDate)
            .order_by_asc(entity::fixture::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets played matches of the given weeks, optionally restricted to one group.
    pub async fn get_played_by_weeks(
        &self,
        week_ids: impl IntoIterator<Item = i32>,
        group_id: Option<i32>,
    ) -> Result<Vec<entity::fixture::Model>, DbErr> {
        let week_ids: Vec<i32> = week_ids.into_iter().collect();
        if week_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut query = entity::prelude::Fixture::find()
            .filter(entity::fixture::Column::WeekId.is_in(week_ids))
            .filter(entity::fixture::Column::IsPlayed.eq(true));

        if let Some(group_id) = group_id {
            query = query.filter(entity::fixture::Column::GroupId.eq(group_id));
        }

        query
            .order_by_asc(entity::fixture::Column::MatchDate)
            .all(self.db)
            .await
    }

    /// Gets every match a team took part in, ordered by kick-off.
    pub async fn get_by_team(&self, team_id: i32) -> Result<Vec<entity::fixture::Model>, DbErr> {
        entity::prelude::Fixture::find()
            .filter(
                Condition::any()
                    .add(entity::fixture::Column::HomeTeamId.eq(team_id))
                    .add(entity::fixture::Column::AwayTeamId.eq(team_id)),
            )
            .order_by_asc(entity::fixture::Column::MatchDate)
            .order_by_asc(entity::fixture::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the matches of several leagues kicking off in `[from, to)`.
    pub async fn get_by_leagues_between(
        &self,
        league_ids: impl IntoIterator<Item = i32>,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<entity::fixture::Model>, DbErr> {
        let league_ids: Vec<i32> = league_ids.into_iter().collect();
        if league_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Fixture::find()
            .filter(entity::fixture::Column::LeagueId.is_in(league_ids))
            .filter(entity::fixture::Column::MatchDate.gte(from))
            .filter(entity::fixture::Column::MatchDate.lt(to))
            .order_by_asc(entity::fixture::Column::MatchDate)
            .all(self.db)
            .await
    }

    /// Gets the most recent matches of several leagues, newest first.
    pub async fn latest_in_leagues(
        &self,
        league_ids: impl IntoIterator<Item = i32>,
        limit: u64,
    ) -> Result<Vec<entity::fixture::Model>, DbErr> {
        let league_ids: Vec<i32> = league_ids.into_iter().collect();
        if league_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Fixture::find()
            .filter(entity::fixture::Column::LeagueId.is_in(league_ids))
            .order_by_desc(entity::fixture::Column::MatchDate)
            .order_by_desc(entity::fixture::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Gets matches in which a player was named man of the match.
    pub async fn get_by_man_of_the_match(
        &self,
        player_id: i32,
    ) -> Result<Vec<entity::fixture::Model>, DbErr> {
        entity::prelude::Fixture::find()
            .filter(entity::fixture::Column::ManOfTheMatchId.eq(player_id))
            .all(self.db)
            .await
    }

    pub async fn create_substitution(
        &self,
        match_id: i32,
        player_in_id: i32,
        player_out_id: i32,
        minute: i32,
    ) -> Result<entity::match_substitution::Model, DbErr> {
        entity::match_substitution::ActiveModel {
            match_id: ActiveValue::Set(match_id),
            player_in_id: ActiveValue::Set(player_in_id),
            player_out_id: ActiveValue::Set(player_out_id),
            minute: ActiveValue::Set(minute),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Inserts a goal and overwrites whichever score sides are given, in one transaction.
    pub async fn record_goal(&self, params: RecordGoalParams) -> Result<entity::goal::Model, DbErr> {
        let txn = self.db.begin().await?;

        if params.home_score.is_some() || params.away_score.is_some() {
            let fixture = entity::prelude::Fixture::find_by_id(params.match_id)
                .one(&txn)
                .await?
                .ok_or_else(|| {
                    DbErr::RecordNotFound(format!("Match {} not found", params.match_id))
                })?;

            let mut active: entity::fixture::ActiveModel = fixture.into();
            if let Some(home) = params.home_score {
                active.home_score = ActiveValue::Set(Some(home));
            }
            if let Some(away) = params.away_score {
                active.away_score = ActiveValue::Set(Some(away));
            }
            active.update(&txn).await?;
        }

        let goal = entity::goal::ActiveModel {
            match_id: ActiveValue::Set(params.match_id),
            team_id: ActiveValue::Set(params.team_id),
            player_id: ActiveValue::Set(params.player_id),
            assist_player_id: ActiveValue::Set(params.assist_player_id),
            minute: ActiveValue::Set(params.minute),
            is_penalty: ActiveValue::Set(params.is_penalty),
            is_own_goal: ActiveValue::Set(params.is_own_goal),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(goal)
    }
}
