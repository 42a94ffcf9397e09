//! route: command-line front end for congestion_router.
//!
//! Loads roads and vehicle types (seed data unless files are given), runs
//! one use case and prints its result as JSON on stdout.  Logs go to stderr.
//!
//! ```text
//! route route --start 1 --end 11
//! route --roads roads.json update-congestion update.json --output roads.json
//! ```

mod cli;
mod commands;
mod config;
mod logging;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load_config(cli.config.as_deref())?;
    logging::init_logging(&logging::resolve_level(cli.verbose, config.log_level.as_deref()))?;

    info!(inference = %config.router.inference, "starting");
    let service = commands::build_service(&cli, &config)?;
    let output = commands::run(&cli.command, &service, cli.output.as_deref())?;

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
