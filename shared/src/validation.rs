//! Field validation rules
//!
//! Pure functions from (field, value) to an error message or `None`.
//! These run in the form layer before submission; the server applies
//! none of them and relies on the storage layer's unique indexes.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate, Utc};
use regex::Regex;

/// `EMP-` followed by exactly 4 digits
static EMPLOYEE_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^EMP-\d{4}$").expect("employee id regex"));

/// Basic email shape: local@domain.tld, no whitespace or extra `@`
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

/// Optional leading `+`, first digit 1-9, 10-15 digits total
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{9,14}$").expect("phone regex"));

/// Form fields of the employee record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    EmployeeId,
    Email,
    Phone,
    Department,
    DateOfJoining,
    Role,
}

impl FormField {
    /// All fields, in form order
    pub const ALL: [FormField; 7] = [
        FormField::Name,
        FormField::EmployeeId,
        FormField::Email,
        FormField::Phone,
        FormField::Department,
        FormField::DateOfJoining,
        FormField::Role,
    ];

    /// Wire name (camelCase, matches the JSON body)
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::EmployeeId => "employeeId",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Department => "department",
            FormField::DateOfJoining => "dateOfJoining",
            FormField::Role => "role",
        }
    }
}

/// Validate a single field, returning the error message if invalid.
///
/// Pure function: no side effects, no I/O. Length rules count chars,
/// not bytes.
///
/// Note: the date-of-joining rule only checks non-emptiness. The
/// 18-years-ago cap is applied by the picker via
/// [`max_joining_date`], not re-checked here.
pub fn validate_field(field: FormField, value: &str) -> Option<&'static str> {
    match field {
        FormField::Name => {
            (value.chars().count() < 3).then_some("Name must be at least 3 characters long")
        }
        FormField::EmployeeId => {
            (!EMPLOYEE_ID_RE.is_match(value)).then_some("Employee ID must be in format EMP-XXXX")
        }
        FormField::Email => (!EMAIL_RE.is_match(value)).then_some("Invalid email format"),
        FormField::Phone => (!PHONE_RE.is_match(value)).then_some("Invalid phone number"),
        FormField::Department => value.is_empty().then_some("Department is required"),
        FormField::DateOfJoining => value.is_empty().then_some("Date of joining is required"),
        FormField::Role => {
            (value.chars().count() < 3).then_some("Role must be at least 3 characters long")
        }
    }
}

/// Latest selectable date of joining: 18 years before today.
///
/// Used as the date picker's `max` attribute. Feb 29 falls back to
/// Mar 1 when the target year is not a leap year.
pub fn max_joining_date() -> NaiveDate {
    let today = Utc::now().date_naive();
    let year = today.year() - 18;
    today
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(today)
}
