//! SQLite employee store implementation.
//!
//! Provides persistent storage for employee records using SQLite and Diesel
//! ORM. Every operation is a single bound statement on the one connection
//! the store owns.

use std::str::FromStr;

use diesel::prelude::*;
use diesel::SqliteConnection;
use rust_decimal::Decimal;
use tracing::debug;

use crate::adapter::outbound::sqlite::database::model::{EmployeeFieldsRow, EmployeeRow};
use crate::adapter::outbound::sqlite::database::schema::employees;
use crate::domain::{Employee, EmployeeId, EmployeeStatus, NewEmployee};
use crate::error::{Error, Result};
use crate::port::outbound::store::EmployeeStore;

/// SQLite-backed employee store.
///
/// Implements the [`EmployeeStore`] trait. Dropping the store closes the
/// connection.
pub struct SqliteEmployeeStore {
    conn: SqliteConnection,
}

impl SqliteEmployeeStore {
    /// Create a store over an already migrated connection.
    #[must_use]
    pub fn new(conn: SqliteConnection) -> Self {
        Self { conn }
    }

    fn to_row(employee: &NewEmployee) -> EmployeeFieldsRow {
        EmployeeFieldsRow {
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            email: employee.email.clone(),
            phone: employee.phone.clone(),
            department: employee.department.clone(),
            salary: employee.salary.to_string(),
            joining_date: employee.joining_date,
            status: employee.status.as_str().to_string(),
        }
    }

    fn from_row(row: EmployeeRow) -> Result<Employee> {
        let salary = Decimal::from_str(&row.salary)
            .map_err(|e| Error::Parse(format!("salary '{}': {e}", row.salary)))?;

        Ok(Employee {
            id: EmployeeId::new(row.id)?,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            phone: row.phone,
            department: row.department,
            salary,
            joining_date: row.joining_date,
            status: EmployeeStatus::from(row.status),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

impl EmployeeStore for SqliteEmployeeStore {
    fn create(&mut self, employee: &NewEmployee) -> Result<EmployeeId> {
        employee.validate()?;
        let row = Self::to_row(employee);

        let id: i32 = diesel::insert_into(employees::table)
            .values(&row)
            .returning(employees::id)
            .get_result(&mut self.conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        debug!(id, "employee inserted");
        Ok(EmployeeId::new(id)?)
    }

    fn list(&mut self) -> Result<Vec<Employee>> {
        let rows: Vec<EmployeeRow> = employees::table
            .select(EmployeeRow::as_select())
            .order(employees::id.asc())
            .load(&mut self.conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        rows.into_iter().map(Self::from_row).collect()
    }

    fn get(&mut self, id: EmployeeId) -> Result<Option<Employee>> {
        let row: Option<EmployeeRow> = employees::table
            .find(id.get())
            .select(EmployeeRow::as_select())
            .first(&mut self.conn)
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;

        row.map(Self::from_row).transpose()
    }

    fn update(&mut self, employee: &Employee) -> Result<bool> {
        employee.validate()?;
        let row = Self::to_row(&employee.details());

        let updated = diesel::update(employees::table.find(employee.id.get()))
            .set(&row)
            .execute(&mut self.conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        debug!(id = %employee.id, updated, "employee updated");
        Ok(updated > 0)
    }

    fn hard_delete(&mut self, id: EmployeeId) -> Result<bool> {
        let deleted = diesel::delete(employees::table.find(id.get()))
            .execute(&mut self.conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        debug!(id = %id, deleted, "employee deleted");
        Ok(deleted > 0)
    }

    fn soft_delete(&mut self, id: EmployeeId) -> Result<bool> {
        let updated = diesel::update(employees::table.find(id.get()))
            .set(employees::status.eq(EmployeeStatus::TERMINAL.as_str()))
            .execute(&mut self.conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        debug!(id = %id, updated, "employee terminated");
        Ok(updated > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::sqlite::database::connection::{establish, run_migrations};
    use crate::domain::DomainError;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn setup_store() -> SqliteEmployeeStore {
        let mut conn = establish(":memory:").expect("Failed to open database");
        run_migrations(&mut conn).expect("Failed to run migrations");
        SqliteEmployeeStore::new(conn)
    }

    fn jane() -> NewEmployee {
        NewEmployee {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@x.com".to_string(),
            phone: None,
            department: "HR".to_string(),
            salary: dec!(50000.00),
            joining_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            status: EmployeeStatus::Active,
        }
    }

    fn id(raw: i32) -> EmployeeId {
        EmployeeId::new(raw).unwrap()
    }

    // -------------------------------------------------------------------------
    // Basic CRUD operations
    // -------------------------------------------------------------------------

    #[test]
    fn create_returns_generated_id() {
        let mut store = setup_store();

        let first = store.create(&jane()).unwrap();
        let second = store.create(&jane()).unwrap();

        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 2);
    }

    #[test]
    fn create_then_get_roundtrip() {
        let mut store = setup_store();
        let mut record = jane();
        record.phone = Some("+1 555 0100".to_string());

        let new_id = store.create(&record).unwrap();
        let loaded = store.get(new_id).unwrap().unwrap();

        assert_eq!(loaded.id, new_id);
        assert_eq!(loaded.details(), record);
        assert_eq!(loaded.salary.to_string(), "50000.00");
    }

    #[test]
    fn create_rejects_blank_first_name() {
        let mut store = setup_store();
        let mut record = jane();
        record.first_name = " ".to_string();

        let result = store.create(&record);

        assert!(matches!(
            result,
            Err(Error::Domain(DomainError::EmptyField {
                field: "first_name"
            }))
        ));
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn list_empty_store() {
        let mut store = setup_store();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn list_returns_rows_in_insertion_order() {
        let mut store = setup_store();
        let mut second = jane();
        second.first_name = "John".to_string();

        store.create(&jane()).unwrap();
        store.create(&second).unwrap();

        let names: Vec<String> = store
            .list()
            .unwrap()
            .into_iter()
            .map(|e| e.first_name)
            .collect();
        assert_eq!(names, vec!["Jane", "John"]);
    }

    #[test]
    fn get_missing_returns_none() {
        let mut store = setup_store();
        assert!(store.get(id(42)).unwrap().is_none());
    }

    #[test]
    fn update_rewrites_all_fields() {
        let mut store = setup_store();
        let new_id = store.create(&jane()).unwrap();

        let mut current = store.get(new_id).unwrap().unwrap();
        current.last_name = "Smith".to_string();
        current.phone = Some("555-0199".to_string());
        current.department = "Finance".to_string();
        current.salary = dec!(61000.50);
        current.joining_date = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        current.status = EmployeeStatus::Probation;

        assert!(store.update(&current).unwrap());

        let loaded = store.get(new_id).unwrap().unwrap();
        assert_eq!(loaded.details(), current.details());
        assert_eq!(loaded.created_at, current.created_at);
    }

    #[test]
    fn update_can_clear_phone() {
        let mut store = setup_store();
        let mut record = jane();
        record.phone = Some("555-0100".to_string());
        let new_id = store.create(&record).unwrap();

        let mut current = store.get(new_id).unwrap().unwrap();
        current.phone = None;
        assert!(store.update(&current).unwrap());

        assert!(store.get(new_id).unwrap().unwrap().phone.is_none());
    }

    #[test]
    fn update_missing_returns_false() {
        let mut store = setup_store();
        let new_id = store.create(&jane()).unwrap();
        let mut ghost = store.get(new_id).unwrap().unwrap();
        ghost.id = id(99);

        assert!(!store.update(&ghost).unwrap());
    }

    #[test]
    fn hard_delete_removes_row() {
        let mut store = setup_store();
        let new_id = store.create(&jane()).unwrap();

        assert!(store.hard_delete(new_id).unwrap());
        assert!(store.get(new_id).unwrap().is_none());
        assert!(!store.hard_delete(new_id).unwrap());
    }

    #[test]
    fn soft_delete_only_touches_status() {
        let mut store = setup_store();
        let new_id = store.create(&jane()).unwrap();
        let before = store.get(new_id).unwrap().unwrap();

        assert!(store.soft_delete(new_id).unwrap());

        let after = store.get(new_id).unwrap().unwrap();
        assert_eq!(after.status, EmployeeStatus::Terminated);
        let mut expected = before.details();
        expected.status = EmployeeStatus::Terminated;
        assert_eq!(after.details(), expected);
    }

    #[test]
    fn soft_delete_missing_returns_false() {
        let mut store = setup_store();
        assert!(!store.soft_delete(id(5)).unwrap());
    }

    #[test]
    fn unknown_status_survives_roundtrip() {
        let mut store = setup_store();
        let mut record = jane();
        record.status = EmployeeStatus::from("On Leave");

        let new_id = store.create(&record).unwrap();

        let loaded = store.get(new_id).unwrap().unwrap();
        assert_eq!(loaded.status, EmployeeStatus::Other("On Leave".to_string()));
    }

    #[test]
    fn corrupt_salary_is_reported_as_parse_error() {
        let mut store = setup_store();
        let new_id = store.create(&jane()).unwrap();
        diesel::update(employees::table.find(new_id.get()))
            .set(employees::salary.eq("lots"))
            .execute(&mut store.conn)
            .unwrap();

        assert!(matches!(store.get(new_id), Err(Error::Parse(_))));
    }
}
