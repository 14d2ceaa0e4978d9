//! Roster Client - form layer and HTTP client for the Roster Server
//!
//! Two halves:
//!
//! - **form** (`form`): immutable form state, pure reducer, submit
//!   flow with per-field validation
//! - **http** (`http`): network-based calls to the server API,
//!   behind the [`RecordStore`] contract so tests can fake the store

pub mod config;
pub mod error;
pub mod form;
pub mod http;
pub mod store;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use form::{FormErrors, FormEvent, FormState, FormValues, SubmitOutcome, submit};
pub use http::HttpClient;
pub use store::RecordStore;

// Re-export shared types for convenience
pub use shared::client::{AddEmployeeResponse, ApiErrorBody};
pub use shared::models::{EmployeeCreate, EmployeeRecord};
pub use shared::validation::{FormField, max_joining_date, validate_field};
