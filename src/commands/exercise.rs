//! Driver that runs every report against a fixed set of example arguments.
//!
//! The driver is the only place errors are recovered: the first failure
//! stops the run, its message is printed as `Error: ...`, and the top-level
//! connection is released either way.

use super::{
    output::OutputFormat,
    reports::{query1, query2, query3, query4, query5},
};
use crate::{
    cli::types::{PlayerFilters, Stat, StatFilter},
    storage::Connect,
    Result,
};
use std::io::Write;
use tracing::{info, warn};

/// One canned report invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Example {
    PlayerRanges(&'static [StatFilter]),
    TeamsByColor(&'static str),
    Roster(&'static str),
    StateAndColor(&'static str, &'static str),
    WinsOver(i64),
}

impl Example {
    pub fn query_number(&self) -> u8 {
        match self {
            Example::PlayerRanges(_) => 1,
            Example::TeamsByColor(_) => 2,
            Example::Roster(_) => 3,
            Example::StateAndColor(..) => 4,
            Example::WinsOver(_) => 5,
        }
    }

    /// Human-readable description used in the section banner.
    pub fn label(&self) -> String {
        match self {
            Example::PlayerRanges(filters) => {
                let ranges: Vec<String> = filters
                    .iter()
                    .map(|f| format!("{} {}-{}", f.stat, f.min, f.max))
                    .collect();
                format!("Players with {}", ranges.join(" and "))
            }
            Example::TeamsByColor(color) => format!("Teams with {} color", color),
            Example::Roster(team) => format!("Players from {}, ordered by PPG", team),
            Example::StateAndColor(state, color) => {
                format!("Players from {} with {} color", state, color)
            }
            Example::WinsOver(wins) => {
                format!("Players from teams with more than {} wins", wins)
            }
        }
    }

    pub fn banner(&self) -> String {
        format!("--- Testing Query {}: {} ---", self.query_number(), self.label())
    }

    /// Run the report this example describes.
    pub fn run<C: Connect, W: Write>(
        &self,
        connector: &C,
        format: OutputFormat,
        out: &mut W,
    ) -> Result<()> {
        match *self {
            Example::PlayerRanges(filters) => {
                let filters = PlayerFilters::from(filters.to_vec());
                query1(connector, &filters, format, out)?;
            }
            Example::TeamsByColor(color) => {
                query2(connector, color, format, out)?;
            }
            Example::Roster(team) => {
                query3(connector, team, format, out)?;
            }
            Example::StateAndColor(state, color) => {
                query4(connector, state, color, format, out)?;
            }
            Example::WinsOver(wins) => {
                query5(connector, wins, format, out)?;
            }
        }
        Ok(())
    }
}

const fn range(stat: Stat, min: f64, max: f64) -> StatFilter {
    StatFilter { stat, min, max }
}

/// The fixed example set, in run order.
pub const EXAMPLES: &[Example] = &[
    Example::PlayerRanges(&[range(Stat::Mpg, 35.0, 40.0)]),
    Example::PlayerRanges(&[range(Stat::Mpg, 35.0, 40.0), range(Stat::Ppg, 15.0, 20.0)]),
    Example::PlayerRanges(&[range(Stat::Rpg, 6.0, 10.0)]),
    Example::PlayerRanges(&[range(Stat::Apg, 5.0, 10.0), range(Stat::Spg, 1.5, 3.0)]),
    Example::PlayerRanges(&[range(Stat::Ppg, 18.0, 25.0), range(Stat::Rpg, 8.0, 15.0)]),
    Example::TeamsByColor("Red"),
    Example::TeamsByColor("DarkBlue"),
    Example::TeamsByColor("Maroon"),
    Example::Roster("Duke"),
    Example::Roster("Virginia"),
    Example::Roster("Louisville"),
    Example::StateAndColor("FL", "Orange"),
    Example::StateAndColor("NC", "DarkBlue"),
    Example::StateAndColor("MA", "Maroon"),
    Example::WinsOver(8),
    Example::WinsOver(12),
];

/// Run `examples` in order, each under its banner. Stops at the first error.
pub fn run_examples<C: Connect, W: Write>(
    connector: &C,
    examples: &[Example],
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    for example in examples {
        info!(query = example.query_number(), "running {}", example.label());
        writeln!(out)?;
        writeln!(out, "{}", example.banner())?;
        example.run(connector, format, out)?;
    }
    Ok(())
}

/// Handle the exercise command.
///
/// Holds a top-level connection for the whole run, while every report opens
/// its own. Returns `Ok(false)` when the run failed and the error was
/// reported to `err`; only write failures on the sinks themselves escape.
pub fn handle_exercise<C, W, E>(
    connector: &C,
    examples: &[Example],
    format: OutputFormat,
    out: &mut W,
    err: &mut E,
) -> Result<bool>
where
    C: Connect,
    W: Write,
    E: Write,
{
    let session = match connector.connect() {
        Ok(session) => session,
        Err(e) => {
            warn!(error = %e, "could not open top-level connection");
            writeln!(err, "Error: {}", e)?;
            return Ok(false);
        }
    };
    info!(path = %session.path().display(), "opened top-level connection");
    writeln!(out, "Opened database successfully: {}", session.database_name())?;

    let outcome = run_examples(connector, examples, format, out);
    let released = session.close();

    match outcome.and(released) {
        Ok(()) => {
            writeln!(out)?;
            writeln!(out, "All queries completed successfully!")?;
            Ok(true)
        }
        Err(e) => {
            warn!(error = %e, "exercise run failed");
            writeln!(err, "Error: {}", e)?;
            Ok(false)
        }
    }
}
