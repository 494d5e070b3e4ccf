use sea_orm::entity::prelude::*;

/// Localised text of a news item, one row per culture code.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "match_news_content")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub match_news_id: i32,
    pub culture: String,
    pub title: String,
    pub subtitle: String,
    pub details_title: String,
    #[sea_orm(column_type = "Text")]
    pub details: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::match_news::Entity",
        from = "Column::MatchNewsId",
        to = "super::match_news::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    MatchNews,
}

impl Related<super::match_news::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MatchNews.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
