//! Command-line interface definitions.
//!
//! Defines the CLI structure using `clap`. With no subcommand the program
//! opens the interactive menu; `list` and `show` give scriptable read-only
//! access to the same table.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Console employee record manager
#[derive(Parser, Debug)]
#[command(name = "employee-manager")]
#[command(version, about)]
pub struct Cli {
    /// Path to the configuration file [default: ~/.employee-manager/config.toml]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Database URL, overriding the config file and EMPLOYEE_DATABASE_URL
    #[arg(long, global = true)]
    pub database: Option<String>,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The subcommand to run, defaulting to the interactive menu.
    #[must_use]
    pub fn selected_command(&self) -> &Commands {
        static DEFAULT: Commands = Commands::Menu;
        self.command.as_ref().unwrap_or(&DEFAULT)
    }
}

/// Top-level subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive employee menu (default)
    Menu,

    /// List all employees
    List,

    /// Show one employee
    Show {
        /// Employee ID
        id: String,
    },
}
