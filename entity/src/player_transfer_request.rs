use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum TransferStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "approved")]
    Approved,
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "player_transfer_request")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub player_user_id: String,
    pub requested_captain_user_id: String,
    pub approval_captain_user_id: Option<String>,
    pub status: TransferStatus,
    pub request_date: DateTimeUtc,
    pub approval_date: Option<DateTimeUtc>,
    pub rejection_date: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::app_user::Entity",
        from = "Column::PlayerUserId",
        to = "super::app_user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    PlayerUser,
    #[sea_orm(
        belongs_to = "super::app_user::Entity",
        from = "Column::RequestedCaptainUserId",
        to = "super::app_user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    RequestedCaptain,
    #[sea_orm(
        belongs_to = "super::app_user::Entity",
        from = "Column::ApprovalCaptainUserId",
        to = "super::app_user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    ApprovalCaptain,
}

impl ActiveModelBehavior for ActiveModel {}
