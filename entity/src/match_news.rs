use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "match_news")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub subtitle: String,
    pub main_photo: Option<String>,
    pub details_title: String,
    #[sea_orm(column_type = "Text")]
    pub details: String,
    pub match_id: Option<i32>,
    pub city_id: Option<i32>,
    pub team_id: Option<i32>,
    pub is_main_news: bool,
    pub published: bool,
    pub created_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::fixture::Entity",
        from = "Column::MatchId",
        to = "super::fixture::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Fixture,
    #[sea_orm(
        belongs_to = "super::city::Entity",
        from = "Column::CityId",
        to = "super::city::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    City,
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Team,
    #[sea_orm(has_many = "super::match_news_photo::Entity")]
    MatchNewsPhoto,
    #[sea_orm(has_many = "super::match_news_content::Entity")]
    MatchNewsContent,
}

impl Related<super::match_news_photo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MatchNewsPhoto.def()
    }
}

impl Related<super::match_news_content::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MatchNewsContent.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
