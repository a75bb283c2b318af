use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Primary key of the single site-wide settings row.
pub const GLOBAL_SETTINGS_ID: i32 = 1;

pub struct GlobalSettingsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GlobalSettingsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the site-wide settings row, if it has been created.
    pub async fn get(&self) -> Result<Option<entity::global_settings::Model>, DbErr> {
        entity::prelude::GlobalSettings::find_by_id(GLOBAL_SETTINGS_ID)
            .one(self.db)
            .await
    }

    /// Makes sure the site-wide settings row exists.
    ///
    /// Leaves an existing row untouched. Otherwise inserts one with empty notices and
    /// policies, no social links, no credit plans and no contact details.
    ///
    /// # Returns
    /// - `Ok((Model, true))` - Row was missing and has been created
    /// - `Ok((Model, false))` - Row already existed
    /// - `Err(DbErr)` - Database error during lookup or insert
    pub async fn ensure_default(
        &self,
    ) -> Result<(entity::global_settings::Model, bool), DbErr> {
        if let Some(settings) = self.get().await? {
            return Ok((settings, false));
        }

        let settings = entity::global_settings::ActiveModel {
            id: ActiveValue::Set(GLOBAL_SETTINGS_ID),
            global_notice: ActiveValue::Set(String::new()),
            credits_page_notice: ActiveValue::Set(String::new()),
            terms_of_service: ActiveValue::Set(String::new()),
            privacy_policy: ActiveValue::Set(String::new()),
            social_media_links: ActiveValue::Set("{}".to_string()),
            credit_plans: ActiveValue::Set("[]".to_string()),
            contact_details: ActiveValue::Set("[]".to_string()),
        }
        .insert(self.db)
        .await?;

        Ok((settings, true))
    }
}
