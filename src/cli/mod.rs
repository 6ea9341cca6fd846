//! CLI argument definitions and parsing.

pub mod tracing_setup;
pub mod types;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use types::StatFilter;

#[derive(Debug, Parser)]
#[clap(name = "acc-bball", about = "ACC basketball reporting CLI")]
pub struct Bball {
    /// SQLite database file (or set `ACC_BBALL_DATABASE` env var).
    #[clap(long, global = true)]
    pub database: Option<PathBuf>,

    /// Output results as JSON instead of text lines.
    #[clap(long, global = true)]
    pub json: bool,

    /// Enable debug logging on stderr (added on top of any `RUST_LOG` directives).
    #[clap(long, global = true)]
    pub debug: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List every player whose statistics fall inside the given ranges.
    ///
    /// Ranges are inclusive and combine with AND; without any `--filter`
    /// every player is listed.
    Players {
        /// Range filter (repeatable): `--filter mpg=35..40 --filter spg=1.5..3`.
        #[clap(long = "filter", short = 'f')]
        filters: Vec<StatFilter>,
    },

    /// Show the name of each team with the given uniform color.
    TeamsByColor {
        /// Color name (exact, case-sensitive).
        color: String,
    },

    /// Show a team's players ordered from highest to lowest points per game.
    Roster {
        /// Team name (exact, case-sensitive).
        team: String,
    },

    /// Show players whose team plays in the given state and wears the given color.
    PlayersByStateColor {
        /// State name (exact, case-sensitive).
        state: String,

        /// Color name (exact, case-sensitive).
        color: String,
    },

    /// Show players on teams that won more than the given number of games.
    WinningTeams {
        /// Win threshold; teams must have strictly more wins.
        #[clap(allow_negative_numbers = true)]
        wins: i64,
    },

    /// Run every report against a fixed set of example arguments.
    Exercise,
}
