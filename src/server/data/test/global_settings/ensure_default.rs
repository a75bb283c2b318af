use super::*;

/// Tests creating the settings row on an empty table.
///
/// Expected: Ok with a freshly created row holding empty defaults
#[tokio::test]
async fn creates_row_with_defaults() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (settings, created) = GlobalSettingsRepository::new(db).ensure_default().await?;

    assert!(created);
    assert_eq!(settings.id, GLOBAL_SETTINGS_ID);
    assert_eq!(settings.global_notice, "");
    assert_eq!(settings.credits_page_notice, "");
    assert_eq!(settings.terms_of_service, "");
    assert_eq!(settings.privacy_policy, "");
    assert_eq!(settings.social_media_links, "{}");
    assert_eq!(settings.credit_plans, "[]");
    assert_eq!(settings.contact_details, "[]");

    Ok(())
}

/// Tests that an existing row is left as it was.
///
/// Expected: Ok with created == false and the seeded values intact
#[tokio::test]
async fn keeps_existing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::global_settings::GlobalSettingsFactory::new(db)
        .global_notice("Keep me")
        .credit_plans(r#"[{"name":"pro"}]"#)
        .build()
        .await?;

    let (settings, created) = GlobalSettingsRepository::new(db).ensure_default().await?;

    assert!(!created);
    assert_eq!(settings.global_notice, "Keep me");
    assert_eq!(settings.credit_plans, r#"[{"name":"pro"}]"#);

    Ok(())
}

/// Tests that repeated calls never create a second row.
///
/// Expected: exactly one row after two calls
#[tokio::test]
async fn is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = GlobalSettingsRepository::new(db);

    repo.ensure_default().await?;
    let (_, created) = repo.ensure_default().await?;

    assert!(!created);
    assert_eq!(GlobalSettings::find().count(db).await?, 1);

    Ok(())
}
