//! Employee Manager - console record keeping for employees.
//!
//! An operator adds, lists, updates and deletes (hard or soft) employee
//! rows held in a single SQLite table, from an interactive menu or from
//! read-only `list`/`show` subcommands.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - **`domain`** - Employee records, ids, statuses and field rules
//! - **`port`** - The [`EmployeeStore`](port::EmployeeStore) trait
//! - **`adapter::outbound`** - SQLite (Diesel) and in-memory stores
//! - **`application`** - The [`Roster`](application::Roster) service that
//!   turns store results into outcomes the operator sees
//! - **`adapter::inbound::cli`** - Argument parsing, menu, forms, output
//! - **`infrastructure`** - Configuration, logging and startup wiring
//!
//! # Modules
//!
//! - [`adapter`] - Store implementations and the CLI
//! - [`application`] - Roster service
//! - [`domain`] - Storage-agnostic types
//! - [`error`] - Error types for the crate
//! - [`infrastructure`] - Config loading and bootstrap
//! - [`port`] - Store trait
//!
//! # Example
//!
//! ```no_run
//! use employee_manager::application::Roster;
//! use employee_manager::adapter::outbound::memory::MemoryEmployeeStore;
//! use employee_manager::domain::NewEmployee;
//!
//! let mut roster = Roster::new(MemoryEmployeeStore::new());
//! let id = roster.add(&NewEmployee::new("Jane", "Doe", "jane@x.com"));
//! assert!(id.is_some());
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
