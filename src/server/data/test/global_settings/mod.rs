use crate::server::data::global_settings::{GlobalSettingsRepository, GLOBAL_SETTINGS_ID};
use entity::prelude::GlobalSettings;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod ensure_default;
mod get;
