use clap::Parser;
use tracing::{error, info};

use employee_manager::adapter::inbound::cli::command::{Cli, Commands};
use employee_manager::adapter::inbound::cli::output::{self, OutputConfig};
use employee_manager::adapter::inbound::cli::prompt::TerminalPrompter;
use employee_manager::adapter::inbound::cli::{list, menu, paths};
use employee_manager::error::Result;
use employee_manager::infrastructure::bootstrap::open_roster;
use employee_manager::infrastructure::config::Config;

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet));

    let config = match load_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            output::error(&format!("Failed to load config: {e}"));
            std::process::exit(1);
        }
    };

    config.init_logging();
    info!(database = %config.database.url, "employee-manager starting");

    // Connection failure ends the program without a distinct exit code.
    let mut roster = match open_roster(&config) {
        Ok(roster) => roster,
        Err(e) => {
            error!(error = %e, "unable to connect to database");
            output::error(&format!("Unable to connect to database: {e}"));
            return;
        }
    };

    let result = match cli.selected_command() {
        Commands::Menu => {
            output::header(env!("CARGO_PKG_VERSION"));
            menu::run(&mut roster, &mut TerminalPrompter::new())
        }
        Commands::List => list::execute(&mut roster),
        Commands::Show { id } => list::show(&mut roster, id),
    };
    drop(roster);

    if let Err(e) = result {
        error!(error = %e, "command failed");
        output::error(&e.to_string());
        std::process::exit(1);
    }

    info!("employee-manager stopped");
}

fn load_config(cli: &Cli) -> Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(paths::default_config())?,
    };

    let mut config = config.with_database_url(cli.database.clone());
    config.logging.apply_verbosity(cli.verbose);
    config.validate()?;
    Ok(config)
}
