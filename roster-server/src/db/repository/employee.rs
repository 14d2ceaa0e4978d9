//! Employee Repository

use shared::models::{EmployeeCreate, EmployeeRecord};
use sqlx::SqlitePool;

use super::RepoResult;

/// All records, in insertion order
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<EmployeeRecord>> {
    let employees =
        sqlx::query_as::<_, EmployeeRecord>("SELECT * FROM employees ORDER BY id")
            .fetch_all(pool)
            .await?;
    Ok(employees)
}

/// Insert a new record verbatim.
///
/// No duplicate pre-check and no field validation here: the unique
/// indexes on employee_id and email are the only gate, and a
/// conflicting insert surfaces as a database error.
pub async fn insert(pool: &SqlitePool, data: EmployeeCreate) -> RepoResult<EmployeeRecord> {
    let record = sqlx::query_as::<_, EmployeeRecord>(
        r#"
        INSERT INTO employees (name, employee_id, email, phone, department, date_of_joining, role)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(data.name)
    .bind(data.employee_id)
    .bind(data.email)
    .bind(data.phone)
    .bind(data.department)
    .bind(data.date_of_joining)
    .bind(data.role)
    .fetch_one(pool)
    .await?;
    Ok(record)
}
