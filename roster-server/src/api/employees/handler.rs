//! Employee API Handlers

use axum::{Json, extract::State, http::StatusCode};

use shared::client::AddEmployeeResponse;
use shared::models::{EmployeeCreate, EmployeeRecord};

use crate::core::ServerState;
use crate::db::repository::employee;
use crate::utils::{AppError, AppResult};

/// POST /api/employees/add - 创建员工记录
///
/// The payload is persisted verbatim; no field validation runs here
/// (the form layer owns the rules). Any insert failure, unique
/// violations included, comes back as a 500 carrying the storage
/// error text.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<(StatusCode, Json<AddEmployeeResponse>)> {
    let record = employee::insert(&state.pool, payload)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    tracing::info!(id = record.id, employee_id = %record.employee_id, "employee added");

    Ok((
        StatusCode::CREATED,
        Json(AddEmployeeResponse {
            message: "Employee added successfully".to_string(),
            new_employee: record,
        }),
    ))
}

/// GET /api/employees/list - 获取全部员工记录 (按插入顺序)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<EmployeeRecord>>> {
    let employees = employee::find_all(&state.pool)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(Json(employees))
}
