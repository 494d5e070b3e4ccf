use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "match_news_photo")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub match_news_id: i32,
    pub photo_url: String,
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
