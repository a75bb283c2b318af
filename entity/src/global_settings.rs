use sea_orm::entity::prelude::*;

/// Site-wide settings edited from the admin panel.
///
/// The table holds a single row with id `1`, created at startup when missing.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "global_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub global_notice: String,
    #[sea_orm(column_type = "Text")]
    pub credits_page_notice: String,
    #[sea_orm(column_type = "Text")]
    pub terms_of_service: String,
    #[sea_orm(column_type = "Text")]
    pub privacy_policy: String,
    /// JSON object encoded as text.
    #[sea_orm(column_type = "Text")]
    pub social_media_links: String,
    /// JSON array encoded as text.
    #[sea_orm(column_type = "Text")]
    pub credit_plans: String,
    /// JSON array encoded as text.
    #[sea_orm(column_type = "Text")]
    pub contact_details: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
