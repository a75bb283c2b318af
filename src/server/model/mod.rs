//! Domain models used between handlers and services.

pub mod generation;
