use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "week_best_team")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub week_id: i32,
    pub league_id: i32,
    pub season_id: i32,
    pub best_player_id: Option<i32>,
    pub best_team_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::week::Entity",
        from = "Column::WeekId",
        to = "super::week::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Week,
    #[sea_orm(
        belongs_to = "super::league::Entity",
        from = "Column::LeagueId",
        to = "super::league::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    League,
    #[sea_orm(
        belongs_to = "super::season::Entity",
        from = "Column::SeasonId",
        to = "super::season::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Season,
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::BestPlayerId",
        to = "super::player::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    BestPlayer,
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::BestTeamId",
        to = "super::team::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    BestTeam,
    #[sea_orm(has_many = "super::week_best_team_player::Entity")]
    WeekBestTeamPlayer,
}

impl Related<super::week_best_team_player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WeekBestTeamPlayer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
