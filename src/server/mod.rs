//! Server-side backend.
//!
//! # Layout
//!
//! - **Controller** (`controller/`) - Axum handler forwarding `/api/{endpoint}` to the adapter
//! - **Adapter** (`adapter/`) - Canonical request/response and the two handler conventions
//! - **Handlers** (`handler/`) - Endpoint implementations registered by name
//! - **Service** (`service/`) - Parallel image generation against the upstream provider
//! - **Data** (`data/`) - Database repositories
//! - **Model** (`model/`) - Domain models shared by handlers and services
//! - **Error** (`error/`) - Error types for startup, handlers and generation
//!
//! Supporting modules: `config` (environment), `state` (shared axum state), `startup`
//! (tracing, database and HTTP client setup) and `router` (routes, CORS and the frontend).
//!
//! # Request Flow
//!
//! 1. **Router** matches `/api/{endpoint}` and hands the request to the controller
//! 2. **Controller** builds an `ApiRequest` and calls the adapter
//! 3. **Adapter** looks up the handler and invokes it in the event convention, retrying
//!    once in the Fetch convention if the handler declines
//! 4. **Handler** validates input and calls services
//! 5. **Adapter** normalizes the handler's reply into an `ApiResponse`

pub mod adapter;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod handler;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
