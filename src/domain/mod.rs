//! Storage-agnostic employee types and field rules.

pub mod employee;
pub mod error;

pub use employee::{Employee, EmployeeId, EmployeeStatus, NewEmployee, SUGGESTED_DEPARTMENTS};
pub use error::DomainError;
