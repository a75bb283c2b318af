//! Database repository layer.
//!
//! Repositories wrap SeaORM entity queries behind small structs borrowing the
//! connection, so callers never build queries themselves.

pub mod global_settings;

#[cfg(test)]
mod test;
