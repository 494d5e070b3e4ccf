use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

/// Per-week editorial data: suspensions and the team of the week.
pub struct WeekDetailRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WeekDetailRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn suspensions_for_week(
        &self,
        week_id: i32,
    ) -> Result<Vec<entity::player_suspension::Model>, DbErr> {
        entity::prelude::PlayerSuspension::find()
            .filter(entity::player_suspension::Column::WeekId.eq(week_id))
            .all(self.db)
            .await
    }

    pub async fn best_team_for_week(
        &self,
        week_id: i32,
    ) -> Result<Option<entity::week_best_team::Model>, DbErr> {
        entity::prelude::WeekBestTeam::find()
            .filter(entity::week_best_team::Column::WeekId.eq(week_id))
            .order_by_desc(entity::week_best_team::Column::Id)
            .one(self.db)
            .await
    }

    /// Gets the selected players of a best team ordered by `order_number`.
    pub async fn best_team_players(
        &self,
        week_best_team_id: i32,
    ) -> Result<Vec<entity::week_best_team_player::Model>, DbErr> {
        entity::prelude::WeekBestTeamPlayer::find()
            .filter(entity::week_best_team_player::Column::WeekBestTeamId.eq(week_best_team_id))
            .order_by_asc(entity::week_best_team_player::Column::OrderNumber)
            .all(self.db)
            .await
    }
}
