//! In-memory employee store.
//!
//! Mirrors the SQLite store's behavior (increasing ids that are never
//! reused, storage-stamped timestamps) without touching disk.

use std::collections::BTreeMap;

use chrono::Utc;

use crate::domain::{Employee, EmployeeId, EmployeeStatus, NewEmployee};
use crate::error::Result;
use crate::port::outbound::store::EmployeeStore;

/// In-memory store keyed by id.
#[derive(Debug, Default)]
pub struct MemoryEmployeeStore {
    rows: BTreeMap<EmployeeId, Employee>,
    last_id: i32,
}

impl MemoryEmployeeStore {
    /// Create a new empty memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl EmployeeStore for MemoryEmployeeStore {
    fn create(&mut self, employee: &NewEmployee) -> Result<EmployeeId> {
        employee.validate()?;
        let id = EmployeeId::new(self.last_id + 1)?;
        self.last_id = id.get();

        let now = Utc::now().naive_utc();
        self.rows.insert(
            id,
            Employee {
                id,
                first_name: employee.first_name.clone(),
                last_name: employee.last_name.clone(),
                email: employee.email.clone(),
                phone: employee.phone.clone(),
                department: employee.department.clone(),
                salary: employee.salary,
                joining_date: employee.joining_date,
                status: employee.status.clone(),
                created_at: now,
                updated_at: now,
            },
        );
        Ok(id)
    }

    fn list(&mut self) -> Result<Vec<Employee>> {
        Ok(self.rows.values().cloned().collect())
    }

    fn get(&mut self, id: EmployeeId) -> Result<Option<Employee>> {
        Ok(self.rows.get(&id).cloned())
    }

    fn update(&mut self, employee: &Employee) -> Result<bool> {
        employee.validate()?;
        let Some(row) = self.rows.get_mut(&employee.id) else {
            return Ok(false);
        };

        let created_at = row.created_at;
        *row = employee.clone();
        row.created_at = created_at;
        row.updated_at = Utc::now().naive_utc();
        Ok(true)
    }

    fn hard_delete(&mut self, id: EmployeeId) -> Result<bool> {
        Ok(self.rows.remove(&id).is_some())
    }

    fn soft_delete(&mut self, id: EmployeeId) -> Result<bool> {
        let Some(row) = self.rows.get_mut(&id) else {
            return Ok(false);
        };
        row.status = EmployeeStatus::TERMINAL;
        row.updated_at = Utc::now().naive_utc();
        Ok(true)
    }
}
