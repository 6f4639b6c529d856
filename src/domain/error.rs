//! Domain-level validation errors.

use thiserror::Error;

/// Errors raised when a record or operator input violates a field rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("invalid employee id '{0}': must be a positive integer")]
    InvalidId(String),

    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),
}
