use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "app_setting")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub ios_version: String,
    pub android_version: String,
    pub force_update: bool,
    pub app_stop: bool,
    pub app_stop_message: Option<String>,
    pub last_updated: DateTimeUtc,
    pub tournament_start_date: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
