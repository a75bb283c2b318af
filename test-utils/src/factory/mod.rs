//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let settings = factory::global_settings::GlobalSettingsFactory::new(&db)
//!     .global_notice("Maintenance tonight")
//!     .build()
//!     .await?;
//! ```

pub mod global_settings;
pub mod helpers;

pub use global_settings::create_global_settings;
