//! API response bodies
//!
//! Shared between roster-server (producers) and roster-client
//! (consumers) so both sides agree on the wire shape.

use serde::{Deserialize, Serialize};

use crate::models::EmployeeRecord;

/// Body of a successful `POST /api/employees/add` (201)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddEmployeeResponse {
    pub message: String,
    pub new_employee: EmployeeRecord,
}

/// Body of a failed API call (500)
///
/// Carries the raw storage error text; the server does not classify
/// failures beyond this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}
