use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

/// Ranking colour bands and manual point penalties.
pub struct RankingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RankingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the ranking statuses of a league ordered by `order_no`.
    pub async fn statuses_for_league(
        &self,
        league_id: i32,
    ) -> Result<Vec<entity::league_ranking_status::Model>, DbErr> {
        entity::prelude::LeagueRankingStatus::find()
            .filter(entity::league_ranking_status::Column::LeagueId.eq(league_id))
            .order_by_asc(entity::league_ranking_status::Column::OrderNo)
            .all(self.db)
            .await
    }

    pub async fn penalties(
        &self,
        league_id: i32,
        season_id: i32,
    ) -> Result<Vec<entity::team_penalty::Model>, DbErr> {
        entity::prelude::TeamPenalty::find()
            .filter(entity::team_penalty::Column::LeagueId.eq(league_id))
            .filter(entity::team_penalty::Column::SeasonId.eq(season_id))
            .order_by_asc(entity::team_penalty::Column::Id)
            .all(self.db)
            .await
    }
}
