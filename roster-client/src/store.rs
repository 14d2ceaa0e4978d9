//! Record store contract
//!
//! The submit flow reaches the server only through this trait, so
//! tests can substitute a fake store and assert on the exact
//! requests sent.

use async_trait::async_trait;

use shared::client::AddEmployeeResponse;
use shared::models::{EmployeeCreate, EmployeeRecord};

use crate::error::ClientResult;

/// Create/list operations exposed by the server
#[async_trait]
pub trait RecordStore {
    /// POST /api/employees/add - persist a new record
    async fn add_employee(&self, record: EmployeeCreate) -> ClientResult<AddEmployeeResponse>;

    /// GET /api/employees/list - all records in insertion order
    async fn list_employees(&self) -> ClientResult<Vec<EmployeeRecord>>;
}
