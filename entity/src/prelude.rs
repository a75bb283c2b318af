pub use super::global_settings::Entity as GlobalSettings;
