//! Axum handlers sitting between the HTTP transport and the request adapter.

pub mod api;

#[cfg(test)]
mod test;
