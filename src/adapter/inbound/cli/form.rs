//! Field-by-field employee forms.
//!
//! Input-format problems are settled here and never reach the store: a
//! malformed date is asked for again, an unparsable salary falls back to a
//! default with a warning.

use rust_decimal::Decimal;

use super::output;
use super::prompt::Prompter;
use crate::domain::employee::{parse_joining_date, parse_salary, today};
use crate::domain::{Employee, EmployeeStatus, NewEmployee, SUGGESTED_DEPARTMENTS};
use crate::error::Result;

/// Typing this in the update form clears the phone number.
pub const CLEAR_MARKER: &str = "-";

/// Ask for every field of a new employee.
pub fn collect_new_employee<P: Prompter>(prompter: &mut P) -> Result<NewEmployee> {
    let first_name = required(prompter, "First name")?;
    let last_name = required(prompter, "Last name")?;
    let email = required(prompter, "Email")?;

    let phone = prompter.text("Phone (optional)")?;
    let department = prompter.text(&format!(
        "Department ({})",
        SUGGESTED_DEPARTMENTS.join("/")
    ))?;

    let salary = salary_or(
        &prompter.text("Salary (e.g., 45000.00)")?,
        Decimal::ZERO,
    );

    let joining_date = loop {
        let input = prompter.text("Joining date (YYYY-MM-DD) or blank for today")?;
        if input.is_empty() {
            break today();
        }
        match parse_joining_date(&input) {
            Ok(date) => break date,
            Err(e) => output::warning(&e.to_string()),
        }
    };

    let status = prompter.text("Status (Active/Probation/Terminated) [default Active]")?;

    Ok(NewEmployee {
        first_name,
        last_name,
        email,
        phone: (!phone.is_empty()).then_some(phone),
        department,
        salary,
        joining_date,
        status: if status.is_empty() {
            EmployeeStatus::default()
        } else {
            EmployeeStatus::from(status)
        },
    })
}

/// Walk the fields of `employee`, showing the current value of each.
/// Blank input keeps the current value.
pub fn edit_employee<P: Prompter>(prompter: &mut P, employee: &mut Employee) -> Result<()> {
    keep_or_replace(prompter, "First name", &mut employee.first_name)?;
    keep_or_replace(prompter, "Last name", &mut employee.last_name)?;
    keep_or_replace(prompter, "Email", &mut employee.email)?;

    let phone = prompter.text(&format!(
        "Phone [{}] ('{CLEAR_MARKER}' to clear)",
        employee.phone.as_deref().unwrap_or(CLEAR_MARKER)
    ))?;
    if phone == CLEAR_MARKER {
        employee.phone = None;
    } else if !phone.is_empty() {
        employee.phone = Some(phone);
    }

    keep_or_replace(prompter, "Department", &mut employee.department)?;

    let salary = prompter.text(&format!("Salary [{:.2}]", employee.salary))?;
    if !salary.is_empty() {
        employee.salary = salary_or(&salary, employee.salary);
    }

    loop {
        let input = prompter.text(&format!(
            "Joining date [{}] (YYYY-MM-DD)",
            employee.joining_date
        ))?;
        if input.is_empty() {
            break;
        }
        match parse_joining_date(&input) {
            Ok(date) => {
                employee.joining_date = date;
                break;
            }
            Err(e) => output::warning(&e.to_string()),
        }
    }

    let status = prompter.text(&format!("Status [{}]", employee.status))?;
    if !status.is_empty() {
        employee.status = EmployeeStatus::from(status);
    }

    Ok(())
}

fn required<P: Prompter>(prompter: &mut P, label: &str) -> Result<String> {
    loop {
        let value = prompter.text(label)?;
        if !value.is_empty() {
            return Ok(value);
        }
        output::warning(&format!("{label} is required."));
    }
}

fn keep_or_replace<P: Prompter>(prompter: &mut P, label: &str, current: &mut String) -> Result<()> {
    let value = prompter.text(&format!("{label} [{current}]"))?;
    if !value.is_empty() {
        *current = value;
    }
    Ok(())
}

fn salary_or(input: &str, fallback: Decimal) -> Decimal {
    if input.is_empty() {
        return fallback;
    }
    parse_salary(input).unwrap_or_else(|| {
        output::warning(&format!(
            "Invalid number format, using fallback: {fallback:.2}"
        ));
        fallback
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::inbound::cli::prompt::scripted::{Answer, ScriptedPrompter};
    use crate::domain::EmployeeId;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn stored() -> Employee {
        Employee {
            id: EmployeeId::new(3).unwrap(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@x.com".to_string(),
            phone: Some("555-0100".to_string()),
            department: "HR".to_string(),
            salary: dec!(50000.00),
            joining_date: NaiveDate::from_ymd_opt(2021, 3, 1).unwrap(),
            status: EmployeeStatus::Active,
            created_at: NaiveDate::from_ymd_opt(2021, 3, 1)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            updated_at: NaiveDate::from_ymd_opt(2021, 3, 1)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn collect_uses_defaults_for_blank_optional_fields() {
        let mut prompter = ScriptedPrompter::new([
            Answer::Text("Jane"),
            Answer::Text("Doe"),
            Answer::Text("jane@x.com"),
            Answer::Text(""),
            Answer::Text("HR"),
            Answer::Text(""),
            Answer::Text(""),
            Answer::Text(""),
        ]);

        let record = collect_new_employee(&mut prompter).unwrap();

        assert_eq!(record.phone, None);
        assert_eq!(record.department, "HR");
        assert_eq!(record.salary, Decimal::ZERO);
        assert_eq!(record.joining_date, today());
        assert_eq!(record.status, EmployeeStatus::Active);
        assert!(prompter.is_exhausted());
    }

    #[test]
    fn collect_reprompts_for_blank_required_field() {
        let mut prompter = ScriptedPrompter::new([
            Answer::Text(""),
            Answer::Text("Jane"),
            Answer::Text("Doe"),
            Answer::Text("jane@x.com"),
            Answer::Text("555-0100"),
            Answer::Text("HR"),
            Answer::Text("50000.00"),
            Answer::Text("2024-01-15"),
            Answer::Text("probation"),
        ]);

        let record = collect_new_employee(&mut prompter).unwrap();

        assert_eq!(prompter.prompts[0], "First name");
        assert_eq!(prompter.prompts[1], "First name");
        assert_eq!(record.first_name, "Jane");
        assert_eq!(record.phone.as_deref(), Some("555-0100"));
        assert_eq!(record.salary, dec!(50000.00));
        assert_eq!(
            record.joining_date,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert_eq!(record.status, EmployeeStatus::Probation);
    }

    #[test]
    fn collect_falls_back_to_zero_salary_and_reprompts_bad_date() {
        let mut prompter = ScriptedPrompter::new([
            Answer::Text("Jane"),
            Answer::Text("Doe"),
            Answer::Text("jane@x.com"),
            Answer::Text(""),
            Answer::Text(""),
            Answer::Text("lots"),
            Answer::Text("15/01/2024"),
            Answer::Text("2024-01-15"),
            Answer::Text(""),
        ]);

        let record = collect_new_employee(&mut prompter).unwrap();

        assert_eq!(record.salary, Decimal::ZERO);
        assert_eq!(
            record.joining_date,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert!(prompter.is_exhausted());
    }

    #[test]
    fn collect_propagates_prompt_failure() {
        let mut prompter = ScriptedPrompter::new([Answer::Text("Jane")]);
        assert!(collect_new_employee(&mut prompter).is_err());
    }

    #[test]
    fn edit_with_all_blank_keeps_record() {
        let mut employee = stored();
        let mut prompter = ScriptedPrompter::new(std::iter::repeat(Answer::Text("")).take(8));

        edit_employee(&mut prompter, &mut employee).unwrap();

        assert_eq!(employee, stored());
        assert_eq!(prompter.prompts[0], "First name [Jane]");
        assert_eq!(prompter.prompts[5], "Salary [50000.00]");
        assert_eq!(prompter.prompts[6], "Joining date [2021-03-01] (YYYY-MM-DD)");
    }

    #[test]
    fn edit_changes_only_salary() {
        let mut employee = stored();
        let mut prompter = ScriptedPrompter::new([
            Answer::Text(""),
            Answer::Text(""),
            Answer::Text(""),
            Answer::Text(""),
            Answer::Text(""),
            Answer::Text("62000.50"),
            Answer::Text(""),
            Answer::Text(""),
        ]);

        edit_employee(&mut prompter, &mut employee).unwrap();

        let mut expected = stored();
        expected.salary = dec!(62000.50);
        assert_eq!(employee, expected);
    }

    #[test]
    fn edit_keeps_salary_when_unparsable_and_clears_phone() {
        let mut employee = stored();
        let mut prompter = ScriptedPrompter::new([
            Answer::Text(""),
            Answer::Text(""),
            Answer::Text("jane.doe@x.com"),
            Answer::Text("-"),
            Answer::Text(""),
            Answer::Text("a lot"),
            Answer::Text("not-a-date"),
            Answer::Text("2022-07-04"),
            Answer::Text("Terminated"),
        ]);

        edit_employee(&mut prompter, &mut employee).unwrap();

        assert_eq!(employee.email, "jane.doe@x.com");
        assert_eq!(employee.phone, None);
        assert_eq!(employee.salary, dec!(50000.00));
        assert_eq!(
            employee.joining_date,
            NaiveDate::from_ymd_opt(2022, 7, 4).unwrap()
        );
        assert_eq!(employee.status, EmployeeStatus::Terminated);
        assert!(prompter.is_exhausted());
    }
}
