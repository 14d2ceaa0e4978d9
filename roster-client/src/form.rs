//! Form state and submit flow
//!
//! The form is an explicit immutable value updated by a pure
//! reducer, so validation behavior is unit-testable without any UI.
//! Submission talks to the server through [`RecordStore`]; at most
//! one create request is in flight at a time, and none is sent while
//! any field fails its rule.

use shared::models::EmployeeCreate;
use shared::validation::{FormField, validate_field};

use crate::store::RecordStore;

/// Message shown when any field fails validation on submit
pub const MSG_BLOCKED: &str = "Please correct the errors before submitting.";
/// Message shown after a successful create
pub const MSG_ADDED: &str = "Employee record added successfully!";
/// Message shown for any failed create, regardless of cause
pub const MSG_FAILED: &str = "Error in adding record: Check the ID and Email";

/// Current field values, one string per form input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub employee_id: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub date_of_joining: String,
    pub role: String,
}

impl FormValues {
    /// Current value of a field
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::EmployeeId => &self.employee_id,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Department => &self.department,
            FormField::DateOfJoining => &self.date_of_joining,
            FormField::Role => &self.role,
        }
    }

    fn with_field(mut self, field: FormField, value: String) -> Self {
        match field {
            FormField::Name => self.name = value,
            FormField::EmployeeId => self.employee_id = value,
            FormField::Email => self.email = value,
            FormField::Phone => self.phone = value,
            FormField::Department => self.department = value,
            FormField::DateOfJoining => self.date_of_joining = value,
            FormField::Role => self.role = value,
        }
        self
    }

    /// Build the create payload, field values verbatim
    pub fn to_create(&self) -> EmployeeCreate {
        EmployeeCreate {
            name: self.name.clone(),
            employee_id: self.employee_id.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            department: self.department.clone(),
            date_of_joining: self.date_of_joining.clone(),
            role: self.role.clone(),
        }
    }
}

/// Per-field error messages (`None` = field is valid)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    name: Option<&'static str>,
    employee_id: Option<&'static str>,
    email: Option<&'static str>,
    phone: Option<&'static str>,
    department: Option<&'static str>,
    date_of_joining: Option<&'static str>,
    role: Option<&'static str>,
}

impl FormErrors {
    /// Error message for a field, if any
    pub fn get(&self, field: FormField) -> Option<&'static str> {
        match field {
            FormField::Name => self.name,
            FormField::EmployeeId => self.employee_id,
            FormField::Email => self.email,
            FormField::Phone => self.phone,
            FormField::Department => self.department,
            FormField::DateOfJoining => self.date_of_joining,
            FormField::Role => self.role,
        }
    }

    fn with_field(mut self, field: FormField, error: Option<&'static str>) -> Self {
        match field {
            FormField::Name => self.name = error,
            FormField::EmployeeId => self.employee_id = error,
            FormField::Email => self.email = error,
            FormField::Phone => self.phone = error,
            FormField::Department => self.department = error,
            FormField::DateOfJoining => self.date_of_joining = error,
            FormField::Role => self.role = error,
        }
        self
    }

    /// True if any field currently has an error
    pub fn any(&self) -> bool {
        FormField::ALL.iter().any(|f| self.get(*f).is_some())
    }
}

/// Events applied to the form state
#[derive(Debug, Clone)]
pub enum FormEvent {
    /// A field's value changed; revalidates that field only
    FieldChanged(FormField, String),
    /// Clear values, errors and message
    Reset,
}

/// Immutable form state: values, per-field errors, combined message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub values: FormValues,
    pub errors: FormErrors,
    pub message: Option<&'static str>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pure reducer: apply one event, returning the next state
    pub fn apply(self, event: FormEvent) -> Self {
        match event {
            FormEvent::FieldChanged(field, value) => {
                let error = validate_field(field, &value);
                Self {
                    values: self.values.with_field(field, value),
                    errors: self.errors.with_field(field, error),
                    message: self.message,
                }
            }
            FormEvent::Reset => Self::default(),
        }
    }

    /// Re-run every field rule, as submit does
    pub fn validate_all(&self) -> FormErrors {
        let mut errors = FormErrors::default();
        for field in FormField::ALL {
            errors = errors.with_field(field, validate_field(field, self.values.get(field)));
        }
        errors
    }
}

/// Result of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; no request was sent
    Blocked,
    /// The record was persisted
    Added,
    /// The create request failed (network or server)
    Failed,
}

/// Submit the form.
///
/// Re-validates all fields first; on any failure the submission is
/// blocked and no network call is made. Otherwise exactly one create
/// request goes out with the field values verbatim. All request
/// failures collapse into one generic message.
pub async fn submit<S: RecordStore>(state: FormState, store: &S) -> (FormState, SubmitOutcome) {
    let errors = state.validate_all();
    if errors.any() {
        let next = FormState {
            errors,
            message: Some(MSG_BLOCKED),
            ..state
        };
        return (next, SubmitOutcome::Blocked);
    }

    match store.add_employee(state.values.to_create()).await {
        Ok(_) => (
            FormState {
                message: Some(MSG_ADDED),
                ..FormState::default()
            },
            SubmitOutcome::Added,
        ),
        Err(e) => {
            tracing::warn!(error = %e, "add employee request failed");
            let next = FormState {
                errors,
                message: Some(MSG_FAILED),
                ..state
            };
            (next, SubmitOutcome::Failed)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use shared::client::AddEmployeeResponse;
    use shared::models::{EmployeeCreate, EmployeeRecord};

    use super::*;
    use crate::error::{ClientError, ClientResult};

    /// In-memory store that records every create request
    #[derive(Default)]
    struct FakeStore {
        calls: Mutex<Vec<EmployeeCreate>>,
        fail: bool,
    }

    impl FakeStore {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        fn calls(&self) -> Vec<EmployeeCreate> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RecordStore for FakeStore {
        async fn add_employee(&self, record: EmployeeCreate) -> ClientResult<AddEmployeeResponse> {
            self.calls.lock().unwrap().push(record.clone());
            if self.fail {
                return Err(ClientError::Server(
                    "UNIQUE constraint failed: employees.employee_id".to_string(),
                ));
            }
            Ok(AddEmployeeResponse {
                message: "Employee added successfully".to_string(),
                new_employee: record_from(record),
            })
        }

        async fn list_employees(&self) -> ClientResult<Vec<EmployeeRecord>> {
            Ok(vec![])
        }
    }

    fn record_from(data: EmployeeCreate) -> EmployeeRecord {
        let now = chrono::Utc::now().naive_utc();
        EmployeeRecord {
            id: 1,
            name: data.name,
            employee_id: data.employee_id,
            email: data.email,
            phone: data.phone,
            department: data.department,
            date_of_joining: data.date_of_joining,
            role: data.role,
            created_at: now,
            updated_at: now,
        }
    }

    fn valid_form() -> FormState {
        let fields = [
            (FormField::Name, "Jane Doe"),
            (FormField::EmployeeId, "EMP-0001"),
            (FormField::Email, "jane@example.com"),
            (FormField::Phone, "+12345678901"),
            (FormField::Department, "Engineering"),
            (FormField::DateOfJoining, "2005-06-01"),
            (FormField::Role, "Engineer"),
        ];
        fields.into_iter().fold(FormState::new(), |state, (f, v)| {
            state.apply(FormEvent::FieldChanged(f, v.to_string()))
        })
    }

    #[test]
    fn field_change_revalidates_only_that_field() {
        let state = FormState::new()
            .apply(FormEvent::FieldChanged(FormField::Name, "Jo".to_string()));

        assert_eq!(
            state.errors.get(FormField::Name),
            Some("Name must be at least 3 characters long")
        );
        // untouched fields carry no error yet, even though they are empty
        assert_eq!(state.errors.get(FormField::Email), None);

        let state = state.apply(FormEvent::FieldChanged(FormField::Name, "Jon".to_string()));
        assert_eq!(state.errors.get(FormField::Name), None);
        assert_eq!(state.values.name, "Jon");
    }

    #[test]
    fn reset_clears_everything() {
        let state = valid_form().apply(FormEvent::Reset);
        assert_eq!(state, FormState::default());
    }

    #[tokio::test]
    async fn valid_form_sends_exactly_one_request_verbatim() {
        let store = FakeStore::default();
        let (next, outcome) = submit(valid_form(), &store).await;

        assert_eq!(outcome, SubmitOutcome::Added);
        assert_eq!(next.message, Some(MSG_ADDED));
        // form cleared after success
        assert_eq!(next.values, FormValues::default());

        let calls = store.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].name, "Jane Doe");
        assert_eq!(calls[0].employee_id, "EMP-0001");
        assert_eq!(calls[0].email, "jane@example.com");
        assert_eq!(calls[0].phone, "+12345678901");
        assert_eq!(calls[0].department, "Engineering");
        assert_eq!(calls[0].date_of_joining, "2005-06-01");
        assert_eq!(calls[0].role, "Engineer");
    }

    #[tokio::test]
    async fn invalid_field_blocks_submission() {
        let store = FakeStore::default();
        let state = valid_form().apply(FormEvent::FieldChanged(
            FormField::EmployeeId,
            "EMP-12".to_string(),
        ));

        let (next, outcome) = submit(state, &store).await;

        assert_eq!(outcome, SubmitOutcome::Blocked);
        assert_eq!(next.message, Some(MSG_BLOCKED));
        assert_eq!(
            next.errors.get(FormField::EmployeeId),
            Some("Employee ID must be in format EMP-XXXX")
        );
        assert!(store.calls().is_empty());
    }

    #[tokio::test]
    async fn empty_form_submit_flags_every_field() {
        let store = FakeStore::default();
        let (next, outcome) = submit(FormState::new(), &store).await;

        assert_eq!(outcome, SubmitOutcome::Blocked);
        for field in FormField::ALL {
            assert!(next.errors.get(field).is_some(), "{field:?} should be flagged");
        }
        assert!(store.calls().is_empty());
    }

    #[tokio::test]
    async fn failed_create_shows_generic_message_and_keeps_values() {
        let store = FakeStore::failing();
        let state = valid_form();
        let values = state.values.clone();

        let (next, outcome) = submit(state, &store).await;

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(next.message, Some(MSG_FAILED));
        // values survive so the user can fix and resubmit
        assert_eq!(next.values, values);
        assert_eq!(store.calls().len(), 1);
    }
}
