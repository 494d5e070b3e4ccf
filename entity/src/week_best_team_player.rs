use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "week_best_team_player")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub week_best_team_id: i32,
    pub player_id: i32,
    pub order_number: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::week_best_team::Entity",
        from = "Column::WeekBestTeamId",
        to = "super::week_best_team::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    WeekBestTeam,
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::PlayerId",
        to = "super::player::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Player,
}

impl Related<super::week_best_team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WeekBestTeam.def()
    }
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
