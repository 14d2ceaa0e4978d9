//! Employee Record Model

use serde::{Deserialize, Serialize};

/// Departments offered by the form's select control.
///
/// The server does not check membership; the list exists for the UI
/// and the validation rule only requires a non-empty selection.
pub const DEPARTMENTS: [&str; 5] = ["HR", "Engineering", "Management", "Sales", "Finance"];

/// Employee record as persisted.
///
/// Columns are snake_case, the wire format is camelCase. Records are
/// immutable once created: there is no update or delete path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    pub id: i64,
    pub name: String,
    pub employee_id: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    /// ISO date string (`YYYY-MM-DD`), stored verbatim
    pub date_of_joining: String,
    pub role: String,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

/// Create employee payload
///
/// All seven fields travel as strings and are inserted verbatim.
/// Field rules run client-side only (see [`crate::validation`]);
/// uniqueness of `employee_id` and `email` is enforced by the
/// storage layer's unique indexes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreate {
    pub name: String,
    pub employee_id: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub date_of_joining: String,
    pub role: String,
}
