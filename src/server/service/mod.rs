//! Service layer for orchestration against external systems.

pub mod generation;
