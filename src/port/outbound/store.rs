//! Persistence port for employee records.

use crate::domain::{Employee, EmployeeId, NewEmployee};
use crate::error::Result;

/// Storage operations for employees.
///
/// Each method maps to one statement against the `employees` relation.
/// Errors are returned as-is; turning them into failure signals is the
/// caller's job (see [`Roster`](crate::application::roster::Roster)).
pub trait EmployeeStore {
    /// Insert a record. Storage assigns the id and timestamps.
    fn create(&mut self, employee: &NewEmployee) -> Result<EmployeeId>;

    /// All stored records in storage order.
    fn list(&mut self) -> Result<Vec<Employee>>;

    /// Get a record by id. `Ok(None)` when no row matches.
    fn get(&mut self, id: EmployeeId) -> Result<Option<Employee>>;

    /// Rewrite every editable column of the row with `employee.id`.
    ///
    /// Returns `false` when no row has that id.
    fn update(&mut self, employee: &Employee) -> Result<bool>;

    /// Physically remove a row. Returns `false` when no row has that id.
    fn hard_delete(&mut self, id: EmployeeId) -> Result<bool>;

    /// Mark a row as terminated, leaving every other column untouched.
    ///
    /// Returns `false` when no row has that id.
    fn soft_delete(&mut self, id: EmployeeId) -> Result<bool>;
}
