//! SeaORM entities owned by the image studio backend.

pub mod global_settings;
pub mod prelude;
