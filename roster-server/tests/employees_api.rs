// roster-server/tests/employees_api.rs
// 集成测试: 员工记录的创建与列表

use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use roster_server::{Config, ServerState, api};
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

async fn test_state(dir: &TempDir) -> ServerState {
    let config = Config::with_overrides(dir.path().to_string_lossy().to_string(), 0);
    ServerState::initialize(&config).await.unwrap()
}

fn payload(employee_id: &str, email: &str) -> Value {
    json!({
        "name": "Jane Doe",
        "employeeId": employee_id,
        "email": email,
        "phone": "+12345678901",
        "department": "Engineering",
        "dateOfJoining": "2005-06-01",
        "role": "Engineer",
    })
}

async fn post_add(state: &ServerState, body: &Value) -> (StatusCode, Value) {
    let response = api::build_app(state.clone())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/employees/add")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get_json(state: &ServerState, uri: &str) -> (StatusCode, Value) {
    let response = api::build_app(state.clone())
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn create_returns_201_with_record() {
    let dir = TempDir::new().unwrap();
    let state = test_state(&dir).await;

    let (status, body) = post_add(&state, &payload("EMP-0001", "jane@example.com")).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Employee added successfully");
    let record = &body["newEmployee"];
    assert_eq!(record["employeeId"], "EMP-0001");
    assert_eq!(record["email"], "jane@example.com");
    assert_eq!(record["name"], "Jane Doe");
    assert_eq!(record["dateOfJoining"], "2005-06-01");
    assert!(record["id"].as_i64().unwrap() > 0);
    assert!(record["createdAt"].is_string());
}

#[tokio::test]
async fn duplicate_employee_id_fails_with_500() {
    let dir = TempDir::new().unwrap();
    let state = test_state(&dir).await;

    let (first, _) = post_add(&state, &payload("EMP-0002", "a@example.com")).await;
    assert_eq!(first, StatusCode::CREATED);

    // Same employeeId, different email
    let (second, body) = post_add(&state, &payload("EMP-0002", "b@example.com")).await;
    assert_eq!(second, StatusCode::INTERNAL_SERVER_ERROR);
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("UNIQUE constraint failed"), "got: {message}");
}

#[tokio::test]
async fn duplicate_email_fails_with_500() {
    let dir = TempDir::new().unwrap();
    let state = test_state(&dir).await;

    let (first, _) = post_add(&state, &payload("EMP-0003", "same@example.com")).await;
    assert_eq!(first, StatusCode::CREATED);

    let (second, body) = post_add(&state, &payload("EMP-0004", "same@example.com")).await;
    assert_eq!(second, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(
        body["message"].as_str().unwrap().contains("UNIQUE constraint failed")
    );
}

#[tokio::test]
async fn list_preserves_insertion_order() {
    let dir = TempDir::new().unwrap();
    let state = test_state(&dir).await;

    post_add(&state, &payload("EMP-0010", "r1@example.com")).await;
    post_add(&state, &payload("EMP-0011", "r2@example.com")).await;

    let (status, body) = get_json(&state, "/api/employees/list").await;
    assert_eq!(status, StatusCode::OK);

    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["employeeId"], "EMP-0010");
    assert_eq!(records[1]["employeeId"], "EMP-0011");
}

#[tokio::test]
async fn list_is_empty_before_any_create() {
    let dir = TempDir::new().unwrap();
    let state = test_state(&dir).await;

    let (status, body) = get_json(&state, "/api/employees/list").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

// 服务端不重放字段规则: 畸形数据只要不触碰唯一索引就会被接受
#[tokio::test]
async fn server_applies_no_field_validation() {
    let dir = TempDir::new().unwrap();
    let state = test_state(&dir).await;

    let body = json!({
        "name": "x",
        "employeeId": "not-an-id",
        "email": "not-an-email",
        "phone": "0",
        "department": "Cryptozoology",
        "dateOfJoining": "never",
        "role": "?",
    });

    let (status, response) = post_add(&state, &body).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(response["newEmployee"]["employeeId"], "not-an-id");
}

#[tokio::test]
async fn health_reports_database_status() {
    let dir = TempDir::new().unwrap();
    let state = test_state(&dir).await;

    let (status, body) = get_json(&state, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "ok");
}
