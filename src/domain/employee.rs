//! Employee record types.
//!
//! [`NewEmployee`] carries the operator-supplied fields of a record that has
//! not been stored yet. [`Employee`] is a stored row: it adds the
//! storage-assigned [`EmployeeId`] and timestamps.

use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Departments offered as suggestions when collecting input. Not enforced.
pub const SUGGESTED_DEPARTMENTS: &[&str] = &[
    "Engineering",
    "HR",
    "Finance",
    "Sales",
    "Marketing",
    "Operations",
];

/// Storage-assigned employee identifier.
///
/// Always positive. The application never chooses one; values come from
/// stored rows or from operator input naming an existing row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct EmployeeId(i32);

impl EmployeeId {
    /// Create an `EmployeeId`, rejecting zero and negative values.
    pub fn new(id: i32) -> Result<Self, DomainError> {
        if id < 1 {
            return Err(DomainError::InvalidId(id.to_string()));
        }
        Ok(Self(id))
    }

    /// Get the raw integer value.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for EmployeeId {
    type Error = DomainError;

    fn try_from(id: i32) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl From<EmployeeId> for i32 {
    fn from(id: EmployeeId) -> Self {
        id.0
    }
}

impl FromStr for EmployeeId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let id: i32 = trimmed
            .parse()
            .map_err(|_| DomainError::InvalidId(trimmed.to_string()))?;
        Self::new(id)
    }
}

/// Employment status.
///
/// An open set: the three well-known values get their own variants and
/// anything else is kept verbatim in [`EmployeeStatus::Other`]. No
/// transition rules are enforced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EmployeeStatus {
    #[default]
    Active,
    Probation,
    Terminated,
    Other(String),
}

impl EmployeeStatus {
    /// Status written by a soft delete.
    pub const TERMINAL: EmployeeStatus = EmployeeStatus::Terminated;

    /// Stored text for this status.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "Active",
            Self::Probation => "Probation",
            Self::Terminated => "Terminated",
            Self::Other(value) => value,
        }
    }

    /// True for the soft-deleted state.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminated)
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for EmployeeStatus {
    fn from(s: &str) -> Self {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "active" => Self::Active,
            "probation" => Self::Probation,
            "terminated" => Self::Terminated,
            _ => Self::Other(trimmed.to_string()),
        }
    }
}

impl From<String> for EmployeeStatus {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<EmployeeStatus> for String {
    fn from(status: EmployeeStatus) -> Self {
        match status {
            EmployeeStatus::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

/// An employee record that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub department: String,
    pub salary: Decimal,
    pub joining_date: NaiveDate,
    pub status: EmployeeStatus,
}

impl NewEmployee {
    /// Create a record with the required fields and defaults for the rest:
    /// no phone, no department, zero salary, joining today, `Active`.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone: None,
            department: String::new(),
            salary: Decimal::ZERO,
            joining_date: today(),
            status: EmployeeStatus::default(),
        }
    }

    /// Check the presence rules on the required text fields.
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_required(&self.first_name, &self.last_name, &self.email)
    }
}

/// A stored employee row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub department: String,
    pub salary: Decimal,
    pub joining_date: NaiveDate,
    pub status: EmployeeStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Employee {
    /// Operator-editable fields of this row, without id or timestamps.
    #[must_use]
    pub fn details(&self) -> NewEmployee {
        NewEmployee {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            department: self.department.clone(),
            salary: self.salary,
            joining_date: self.joining_date,
            status: self.status.clone(),
        }
    }

    /// "First Last".
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Check the presence rules on the required text fields.
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_required(&self.first_name, &self.last_name, &self.email)
    }
}

fn validate_required(first_name: &str, last_name: &str, email: &str) -> Result<(), DomainError> {
    for (field, value) in [
        ("first_name", first_name),
        ("last_name", last_name),
        ("email", email),
    ] {
        if value.trim().is_empty() {
            return Err(DomainError::EmptyField { field });
        }
    }
    Ok(())
}

/// Current local calendar date, used when no joining date is given.
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a `YYYY-MM-DD` joining date.
pub fn parse_joining_date(input: &str) -> Result<NaiveDate, DomainError> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| DomainError::InvalidDate(trimmed.to_string()))
}

/// Parse a salary, returning `None` when the text is not a number.
#[must_use]
pub fn parse_salary(input: &str) -> Option<Decimal> {
    Decimal::from_str(input.trim()).ok()
}
