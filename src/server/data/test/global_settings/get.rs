use super::*;

/// Tests reading settings before anything has been written.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_row_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let settings = GlobalSettingsRepository::new(db).get().await?;

    assert!(settings.is_none());

    Ok(())
}

/// Tests reading the settings row after it has been seeded.
///
/// Expected: Ok(Some) with the seeded notice
#[tokio::test]
async fn returns_existing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::global_settings::GlobalSettingsFactory::new(db)
        .global_notice("Scheduled maintenance")
        .build()
        .await?;

    let settings = GlobalSettingsRepository::new(db).get().await?;

    let settings = settings.unwrap();
    assert_eq!(settings.id, GLOBAL_SETTINGS_ID);
    assert_eq!(settings.global_notice, "Scheduled maintenance");

    Ok(())
}

/// Tests that rows other than the site-wide one are ignored.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_other_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::global_settings::GlobalSettingsFactory::new(db)
        .id(2)
        .build()
        .await?;

    let settings = GlobalSettingsRepository::new(db).get().await?;

    assert!(settings.is_none());

    Ok(())
}
