//! SQLite persistence adapter.
//!
//! Provides the SQLite-backed [`EmployeeStore`](crate::port::EmployeeStore)
//! implementation using Diesel ORM.

pub mod database;
pub mod store;

pub use store::SqliteEmployeeStore;
