use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum MatchStatus {
    #[sea_orm(string_value = "scheduled")]
    Scheduled,
    #[sea_orm(string_value = "started")]
    Started,
    #[sea_orm(string_value = "finished")]
    Finished,
    #[sea_orm(string_value = "postponed")]
    Postponed,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

/// A single match between two teams in a league week.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "fixture")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub league_id: i32,
    pub week_id: i32,
    pub group_id: Option<i32>,
    pub home_team_id: i32,
    pub away_team_id: i32,
    pub match_date: DateTimeUtc,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub is_played: bool,
    pub status: MatchStatus,
    pub match_url: Option<String>,
    pub man_of_the_match_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::league::Entity",
        from = "Column::LeagueId",
        to = "super::league::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    League,
    #[sea_orm(
        belongs_to = "super::week::Entity",
        from = "Column::WeekId",
        to = "super::week::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Week,
    #[sea_orm(
        belongs_to = "super::league_group::Entity",
        from = "Column::GroupId",
        to = "super::league_group::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    LeagueGroup,
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::HomeTeamId",
        to = "super::team::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    HomeTeam,
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::AwayTeamId",
        to = "super::team::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    AwayTeam,
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::ManOfTheMatchId",
        to = "super::player::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    ManOfTheMatch,
}

impl Related<super::league::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::League.def()
    }
}

impl Related<super::week::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Week.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
