//! Handlers for the `list` and `show` commands, and the employee table
//! shared with the interactive menu.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::output;
use crate::application::Roster;
use crate::domain::{Employee, EmployeeId};
use crate::error::Result;
use crate::port::outbound::store::EmployeeStore;

#[derive(Tabled)]
struct EmployeeRow {
    #[tabled(rename = "ID")]
    id: i32,
    #[tabled(rename = "First Name")]
    first_name: String,
    #[tabled(rename = "Last Name")]
    last_name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Phone")]
    phone: String,
    #[tabled(rename = "Dept")]
    department: String,
    #[tabled(rename = "Salary")]
    salary: String,
    #[tabled(rename = "Joining Date")]
    joining_date: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl From<&Employee> for EmployeeRow {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id.get(),
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            email: employee.email.clone(),
            phone: employee.phone.clone().unwrap_or_else(|| "-".to_string()),
            department: employee.department.clone(),
            salary: format!("{:.2}", employee.salary),
            joining_date: employee.joining_date.to_string(),
            status: employee.status.to_string(),
        }
    }
}

/// Render employees as a table, one row each.
#[must_use]
pub fn render_table(employees: &[Employee]) -> String {
    Table::new(employees.iter().map(EmployeeRow::from)).to_string()
}

/// Print the employee table, or a note when there is nothing to show.
pub fn print_employees(employees: &[Employee]) {
    if employees.is_empty() {
        output::note("No employees found.");
        return;
    }
    output::section("Employees");
    output::lines(&render_table(employees));
}

/// Execute the list command.
pub fn execute<S: EmployeeStore>(roster: &mut Roster<S>) -> Result<()> {
    let employees = roster.list();

    if output::is_json() {
        output::json_output(json!({
            "command": "list",
            "count": employees.len(),
            "employees": serde_json::to_value(&employees)?,
        }));
        return Ok(());
    }

    print_employees(&employees);
    Ok(())
}

/// Execute the show command.
pub fn show<S: EmployeeStore>(roster: &mut Roster<S>, raw_id: &str) -> Result<()> {
    let Ok(id) = raw_id.parse::<EmployeeId>() else {
        output::error("Invalid ID format.");
        return Ok(());
    };

    let Some(employee) = roster.find(id) else {
        if output::is_json() {
            output::json_output(json!({
                "command": "show",
                "id": id,
                "employee": null,
            }));
        } else {
            output::warning(&format!("No employee found with ID: {id}"));
        }
        return Ok(());
    };

    if output::is_json() {
        output::json_output(json!({
            "command": "show",
            "id": id,
            "employee": serde_json::to_value(&employee)?,
            "terminated": employee.status.is_terminal(),
        }));
        return Ok(());
    }

    print_employee(&employee);
    Ok(())
}

/// Print one employee as labeled fields.
pub fn print_employee(employee: &Employee) {
    output::section(&employee.full_name());
    output::field("ID", employee.id);
    output::field("Email", &employee.email);
    output::field("Phone", employee.phone.as_deref().unwrap_or("-"));
    output::field("Department", &employee.department);
    output::field("Salary", format!("{:.2}", employee.salary));
    output::field("Joining date", employee.joining_date);
    output::field("Status", output::highlight(&employee.status));
    if let Some(note) = status_note(employee) {
        output::note(note);
    }
    output::field("Created", employee.created_at);
    output::field("Updated", employee.updated_at);
}

/// Extra line shown under a soft-deleted employee.
fn status_note(employee: &Employee) -> Option<&'static str> {
    employee
        .status
        .is_terminal()
        .then_some("Terminated: the record is kept but the employee is no longer active.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::memory::MemoryEmployeeStore;
    use crate::domain::NewEmployee;
    use rust_decimal_macros::dec;

    fn roster_with_jane() -> Roster<MemoryEmployeeStore> {
        let mut roster = Roster::new(MemoryEmployeeStore::new());
        let mut record = NewEmployee::new("Jane", "Doe", "jane@x.com");
        record.department = "HR".to_string();
        record.salary = dec!(50000);
        roster.add(&record).unwrap();
        roster
    }

    #[test]
    fn table_has_header_and_formatted_values() {
        let mut roster = roster_with_jane();
        let table = render_table(&roster.list());

        assert!(table.contains("First Name"));
        assert!(table.contains("Joining Date"));
        assert!(table.contains("Jane"));
        assert!(table.contains("50000.00"));
    }

    #[test]
    fn missing_phone_renders_as_dash() {
        let mut roster = roster_with_jane();
        let rows: Vec<EmployeeRow> = roster.list().iter().map(EmployeeRow::from).collect();
        assert_eq!(rows[0].phone, "-");
        assert_eq!(rows[0].status, "Active");
    }

    #[test]
    fn empty_table_still_renders_header() {
        let table = render_table(&[]);
        assert!(table.contains("ID"));
    }

    #[test]
    fn only_terminated_employees_get_status_note() {
        let mut roster = roster_with_jane();
        let id = roster.list()[0].id;
        assert!(status_note(&roster.find(id).unwrap()).is_none());

        assert!(roster.soft_delete(id));
        assert!(status_note(&roster.find(id).unwrap()).is_some());
    }

    #[test]
    fn show_tolerates_bad_and_missing_ids() {
        let mut roster = roster_with_jane();
        assert!(show(&mut roster, "abc").is_ok());
        assert!(show(&mut roster, "99").is_ok());
        assert!(show(&mut roster, "1").is_ok());
    }
}
