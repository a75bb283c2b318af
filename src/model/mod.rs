//! Wire-level DTOs shared by every endpoint.

pub mod api;
pub mod generation;
pub mod health;
