//! Shared types for the roster system
//!
//! Everything that crosses the wire between `roster-server` and
//! `roster-client` lives here:
//!
//! - **models** (`models`): employee record and create payload
//! - **client** (`client`): API response bodies
//! - **validation** (`validation`): per-field form validation rules
//!
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`
//! so the client never links sqlx.

pub mod client;
pub mod models;
pub mod validation;

// Re-export 公共类型
pub use client::{AddEmployeeResponse, ApiErrorBody};
pub use models::{EmployeeCreate, EmployeeRecord};
pub use validation::{FormField, validate_field};
