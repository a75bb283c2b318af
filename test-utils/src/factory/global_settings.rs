//! Global settings factory for seeding the settings row.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating the global settings row with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::global_settings::GlobalSettingsFactory;
///
/// let settings = GlobalSettingsFactory::new(&db)
///     .global_notice("Scheduled maintenance")
///     .build()
///     .await?;
/// ```
pub struct GlobalSettingsFactory<'a> {
    db: &'a DatabaseConnection,
    id: i32,
    global_notice: String,
    credit_plans: String,
}

impl<'a> GlobalSettingsFactory<'a> {
    /// Creates a new GlobalSettingsFactory with default values.
    ///
    /// Defaults:
    /// - id: `1`
    /// - global_notice: `"Notice {n}"` where n is auto-incremented
    /// - credit_plans: `"[]"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            id: 1,
            global_notice: format!("Notice {}", next_id()),
            credit_plans: "[]".to_string(),
        }
    }

    /// Sets the row id.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the banner notice shown across the site.
    pub fn global_notice(mut self, notice: impl Into<String>) -> Self {
        self.global_notice = notice.into();
        self
    }

    /// Sets the JSON-encoded credit plans.
    pub fn credit_plans(mut self, plans: impl Into<String>) -> Self {
        self.credit_plans = plans.into();
        self
    }

    /// Builds and inserts the settings row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::global_settings::Model)` - Created settings row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::global_settings::Model, DbErr> {
        entity::global_settings::ActiveModel {
            id: ActiveValue::Set(self.id),
            global_notice: ActiveValue::Set(self.global_notice),
            credits_page_notice: ActiveValue::Set(String::new()),
            terms_of_service: ActiveValue::Set(String::new()),
            privacy_policy: ActiveValue::Set(String::new()),
            social_media_links: ActiveValue::Set("{}".to_string()),
            credit_plans: ActiveValue::Set(self.credit_plans),
            contact_details: ActiveValue::Set("[]".to_string()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates the settings row with default values.
///
/// Shorthand for `GlobalSettingsFactory::new(db).build().await`.
pub async fn create_global_settings(
    db: &DatabaseConnection,
) -> Result<entity::global_settings::Model, DbErr> {
    GlobalSettingsFactory::new(db).build().await
}
