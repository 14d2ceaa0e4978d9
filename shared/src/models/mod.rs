//! Data models
//!
//! Shared between roster-server and roster-client (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod employee;

// Re-exports
pub use employee::*;
