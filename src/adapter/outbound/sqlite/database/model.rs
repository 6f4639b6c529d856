//! Database model types for Diesel ORM.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use super::schema::employees;

/// Database row for an employee (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = employees)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct EmployeeRow {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub department: String,
    pub salary: String,
    pub joining_date: NaiveDate,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// The eight operator-editable columns, bound by INSERT and full UPDATE.
///
/// `phone = None` is written as NULL on update so a cleared phone sticks.
#[derive(Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = employees)]
#[diesel(treat_none_as_null = true)]
pub struct EmployeeFieldsRow {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub department: String,
    pub salary: String,
    pub joining_date: NaiveDate,
    pub status: String,
}
