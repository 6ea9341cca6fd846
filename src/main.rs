//! Entry point: parse CLI and dispatch to command handlers.

use acc_bball::{
    cli::{
        tracing_setup::{init_tracing, TracingConfig},
        Bball, Commands,
    },
    commands::{
        exercise::{handle_exercise, EXAMPLES},
        output::OutputFormat,
        reports::{query1, query2, query3, query4, query5},
        resolve_database_path,
    },
    DatabaseConfig, PlayerFilters,
};
use anyhow::Context;
use clap::Parser;
use std::io;

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    let app = Bball::parse();

    init_tracing(&TracingConfig { debug: app.debug }).context("failed to initialize logging")?;

    let config = DatabaseConfig::new(resolve_database_path(app.database)?);
    let format = OutputFormat::from_json_flag(app.json);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match app.command {
        Commands::Players { filters } => {
            query1(&config, &PlayerFilters::from(filters), format, &mut out)?;
        }
        Commands::TeamsByColor { color } => {
            query2(&config, &color, format, &mut out)?;
        }
        Commands::Roster { team } => {
            query3(&config, &team, format, &mut out)?;
        }
        Commands::PlayersByStateColor { state, color } => {
            query4(&config, &state, &color, format, &mut out)?;
        }
        Commands::WinningTeams { wins } => {
            query5(&config, wins, format, &mut out)?;
        }
        Commands::Exercise => {
            let succeeded =
                handle_exercise(&config, EXAMPLES, format, &mut out, &mut io::stderr())?;
            if !succeeded {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
