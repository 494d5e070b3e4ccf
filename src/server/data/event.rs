use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

/// Goals, cards, squads and formations recorded against matches.
pub struct MatchEventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MatchEventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the goals of the given matches ordered by minute.
    pub async fn goals_for_matches(
        &self,
        match_ids: &[i32],
    ) -> Result<Vec<entity::goal::Model>, DbErr> {
        if match_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Goal::find()
            .filter(entity::goal::Column::MatchId.is_in(match_ids.to_vec()))
            .order_by_asc(entity::goal::Column::Minute)
            .order_by_asc(entity::goal::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the cards of the given matches ordered by minute.
    pub async fn cards_for_matches(
        &self,
        match_ids: &[i32],
    ) -> Result<Vec<entity::card::Model>, DbErr> {
        if match_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Card::find()
            .filter(entity::card::Column::MatchId.is_in(match_ids.to_vec()))
            .order_by_asc(entity::card::Column::Minute)
            .order_by_asc(entity::card::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn squads_for_matches(
        &self,
        match_ids: &[i32],
    ) -> Result<Vec<entity::match_squad::Model>, DbErr> {
        if match_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::MatchSquad::find()
            .filter(entity::match_squad::Column::MatchId.is_in(match_ids.to_vec()))
            .order_by_asc(entity::match_squad::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn formations_for_match(
        &self,
        match_id: i32,
    ) -> Result<Vec<entity::match_squad_formation::Model>, DbErr> {
        entity::prelude::MatchSquadFormation::find()
            .filter(entity::match_squad_formation::Column::MatchId.eq(match_id))
            .order_by_asc(entity::match_squad_formation::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets every goal a player scored or assisted.
    pub async fn goals_involving_player(
        &self,
        player_id: i32,
    ) -> Result<Vec<entity::goal::Model>, DbErr> {
        entity::prelude::Goal::find()
            .filter(
                sea_orm::Condition::any()
                    .add(entity::goal::Column::PlayerId.eq(player_id))
                    .add(entity::goal::Column::AssistPlayerId.eq(player_id)),
            )
            .all(self.db)
            .await
    }

    pub async fn cards_for_player(
        &self,
        player_id: i32,
    ) -> Result<Vec<entity::card::Model>, DbErr> {
        entity::prelude::Card::find()
            .filter(entity::card::Column::PlayerId.eq(player_id))
            .all(self.db)
            .await
    }

    pub async fn squads_for_player(
        &self,
        player_id: i32,
    ) -> Result<Vec<entity::match_squad::Model>, DbErr> {
        entity::prelude::MatchSquad::find()
            .filter(entity::match_squad::Column::PlayerId.eq(player_id))
            .all(self.db)
            .await
    }
}
