use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "story")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub story_image: Option<String>,
    pub published: bool,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::story_content::Entity")]
    StoryContent,
}

impl Related<super::story_content::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StoryContent.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
