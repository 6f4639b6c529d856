//! Employee roster service.
//!
//! Wraps an [`EmployeeStore`] and turns every persistence outcome into the
//! plain signal the interactive flow acts on: an id or nothing, a list
//! (possibly empty), a record or not-found, true or false. Errors never
//! escape; each one is logged with the operation that raised it.

use tracing::{error, info};

use crate::domain::{Employee, EmployeeId, NewEmployee};
use crate::error::Error;
use crate::port::outbound::store::EmployeeStore;

/// Use-case facade over an employee store.
///
/// The store is owned by the roster and passed in explicitly; there is no
/// process-wide handle.
pub struct Roster<S> {
    store: S,
}

impl<S: EmployeeStore> Roster<S> {
    /// Create a roster over the given store.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Add a new employee. Returns the storage-assigned id on success.
    pub fn add(&mut self, employee: &NewEmployee) -> Option<EmployeeId> {
        match self.store.create(employee) {
            Ok(id) => {
                info!(id = %id, "employee added");
                Some(id)
            }
            Err(e) => {
                report("add", None, &e);
                None
            }
        }
    }

    /// All employees in storage order. Empty on failure.
    pub fn list(&mut self) -> Vec<Employee> {
        self.store.list().unwrap_or_else(|e| {
            report("list", None, &e);
            Vec::new()
        })
    }

    /// Look up one employee. A failed lookup is reported and treated as
    /// not-found.
    pub fn find(&mut self, id: EmployeeId) -> Option<Employee> {
        self.store.get(id).unwrap_or_else(|e| {
            report("find", Some(id), &e);
            None
        })
    }

    /// Replace every editable field of an existing employee.
    ///
    /// Returns `false` when the id matches no row or the write fails.
    pub fn update(&mut self, employee: &Employee) -> bool {
        self.store.update(employee).unwrap_or_else(|e| {
            report("update", Some(employee.id), &e);
            false
        })
    }

    /// Physically remove an employee.
    pub fn hard_delete(&mut self, id: EmployeeId) -> bool {
        self.store.hard_delete(id).unwrap_or_else(|e| {
            report("hard_delete", Some(id), &e);
            false
        })
    }

    /// Mark an employee as terminated, keeping the row.
    pub fn soft_delete(&mut self, id: EmployeeId) -> bool {
        self.store.soft_delete(id).unwrap_or_else(|e| {
            report("soft_delete", Some(id), &e);
            false
        })
    }
}

fn report(operation: &'static str, id: Option<EmployeeId>, err: &Error) {
    match id {
        Some(id) => error!(operation, id = %id, error = %err, "employee operation failed"),
        None => error!(operation, error = %err, "employee operation failed"),
    }
}
