//! Console rendering of report rows.

use crate::storage::{Player, PlayerName, TeamName, UniformPlayer, WinningPlayer};
use crate::Result;
use serde::Serialize;
use std::fmt::Display;
use std::io::Write;

/// How report rows are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Uppercase header line followed by one space-separated line per row.
    #[default]
    Text,
    /// The rows as a pretty-printed JSON array.
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// A row that can be printed under a fixed header.
pub trait ReportRow: Display + Serialize {
    const HEADER: &'static str;
}

impl ReportRow for Player {
    const HEADER: &'static str =
        "PLAYER_ID TEAM_ID UNIFORM_NUM FIRST_NAME LAST_NAME MPG PPG RPG APG SPG BPG";
}

impl ReportRow for TeamName {
    const HEADER: &'static str = "NAME";
}

impl ReportRow for PlayerName {
    const HEADER: &'static str = "FIRST_NAME LAST_NAME";
}

impl ReportRow for UniformPlayer {
    const HEADER: &'static str = "UNIFORM_NUM FIRST_NAME LAST_NAME";
}

impl ReportRow for WinningPlayer {
    const HEADER: &'static str = "FIRST_NAME LAST_NAME NAME WINS";
}

/// Write `rows` to `out`. An empty result still prints the text header.
pub fn write_report<W: Write, R: ReportRow>(
    out: &mut W,
    rows: &[R],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "{}", R::HEADER)?;
            for row in rows {
                writeln!(out, "{}", row)?;
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(rows)?)?;
        }
    }
    Ok(())
}
