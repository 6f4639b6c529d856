//! The interactive employee menu.
//!
//! One operation per iteration; every outcome is reported to the operator
//! and the loop comes back to the menu until Exit is chosen.

use crate::adapter::inbound::cli::list::print_employees;
use crate::adapter::inbound::cli::prompt::Prompter;
use crate::adapter::inbound::cli::{form, output};
use crate::application::Roster;
use crate::domain::EmployeeId;
use crate::error::Result;
use crate::port::outbound::store::EmployeeStore;

/// Menu entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Update,
    HardDelete,
    SoftDelete,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 6] = [
        Self::Add,
        Self::List,
        Self::Update,
        Self::HardDelete,
        Self::SoftDelete,
        Self::Exit,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Add => "Add employee",
            Self::List => "View all employees",
            Self::Update => "Update employee",
            Self::HardDelete => "Delete employee (hard delete)",
            Self::SoftDelete => "Soft delete employee (terminate)",
            Self::Exit => "Exit",
        }
    }
}

/// Run the menu loop until the operator exits.
///
/// Prompt failures (a closed terminal, for instance) end the loop with an
/// error; store failures never do.
pub fn run<S: EmployeeStore, P: Prompter>(roster: &mut Roster<S>, prompter: &mut P) -> Result<()> {
    let labels: Vec<&str> = MenuChoice::ALL.iter().map(|choice| choice.label()).collect();

    loop {
        output::section("Employee Management");
        let index = prompter.select("Choose an option", &labels)?;
        let Some(choice) = MenuChoice::ALL.get(index).copied() else {
            output::warning("Invalid option. Try again.");
            continue;
        };

        match choice {
            MenuChoice::Add => add(roster, prompter)?,
            MenuChoice::List => print_employees(&roster.list()),
            MenuChoice::Update => update(roster, prompter)?,
            MenuChoice::HardDelete => delete(roster, prompter, false)?,
            MenuChoice::SoftDelete => delete(roster, prompter, true)?,
            MenuChoice::Exit => {
                output::success("Exiting. Goodbye!");
                return Ok(());
            }
        }
    }
}

fn add<S: EmployeeStore, P: Prompter>(roster: &mut Roster<S>, prompter: &mut P) -> Result<()> {
    output::section("Add Employee");
    let record = form::collect_new_employee(prompter)?;
    match roster.add(&record) {
        Some(id) => output::success(&format!("Employee added with ID {id}")),
        None => output::error("Failed to add employee."),
    }
    Ok(())
}

fn update<S: EmployeeStore, P: Prompter>(roster: &mut Roster<S>, prompter: &mut P) -> Result<()> {
    let Some(id) = ask_id(prompter, "Enter employee ID to update")? else {
        return Ok(());
    };

    let Some(mut employee) = roster.find(id) else {
        output::warning(&format!("No employee found with ID: {id}"));
        return Ok(());
    };

    output::note("Leave a field blank to keep the current value.");
    form::edit_employee(prompter, &mut employee)?;

    if roster.update(&employee) {
        output::success("Employee updated successfully.");
    } else {
        output::warning("Update failed or no changes made.");
    }
    Ok(())
}

fn delete<S: EmployeeStore, P: Prompter>(
    roster: &mut Roster<S>,
    prompter: &mut P,
    soft: bool,
) -> Result<()> {
    let prompt = if soft {
        "Enter employee ID to soft-delete (terminate)"
    } else {
        "Enter employee ID to delete"
    };
    let Some(id) = ask_id(prompter, prompt)? else {
        return Ok(());
    };

    if !prompter.confirm("Are you sure?")? {
        output::note("Operation cancelled.");
        return Ok(());
    }

    let done = if soft {
        roster.soft_delete(id)
    } else {
        roster.hard_delete(id)
    };

    match (done, soft) {
        (true, true) => output::success(&format!("Soft-deleted (terminated) employee with ID {id}")),
        (true, false) => output::success(&format!("Deleted employee with ID {id}")),
        (false, _) => output::warning(&format!("No employee found with ID {id}")),
    }
    Ok(())
}

/// Ask for an employee id. `None` means the input was not a valid id and
/// the operator has already been told.
fn ask_id<P: Prompter>(prompter: &mut P, prompt: &str) -> Result<Option<EmployeeId>> {
    let raw = prompter.text(prompt)?;
    match raw.parse::<EmployeeId>() {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            output::error("Invalid ID format.");
            Ok(None)
        }
    }
}
