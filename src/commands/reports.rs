//! The five canned reports.
//!
//! Every report opens its own connection through a [`Connect`]
//! implementation, runs exactly one read, releases the connection and then
//! prints a header plus one line per row. Errors are not caught here; a
//! connection dropped by `?` is still released.

use super::output::{write_report, OutputFormat, ReportRow};
use crate::{
    cli::types::PlayerFilters,
    storage::{
        BballDatabase, Connect, Player, PlayerName, TeamName, UniformPlayer, WinningPlayer,
    },
    Result,
};
use std::io::Write;
use tracing::debug;

/// Open, read, release, print.
fn run_report<C, W, R, F>(connector: &C, format: OutputFormat, out: &mut W, read: F) -> Result<Vec<R>>
where
    C: Connect,
    W: Write,
    R: ReportRow,
    F: FnOnce(&BballDatabase) -> Result<Vec<R>>,
{
    let db = connector.connect()?;
    let rows = read(&db)?;
    db.close()?;

    debug!(rows = rows.len(), "report rows fetched");
    write_report(out, &rows, format)?;
    Ok(rows)
}

/// Query 1: every player whose filtered statistics lie inside their ranges.
pub fn query1<C: Connect, W: Write>(
    connector: &C,
    filters: &PlayerFilters,
    format: OutputFormat,
    out: &mut W,
) -> Result<Vec<Player>> {
    run_report(connector, format, out, |db| db.players_in_ranges(filters))
}

/// Query 2: names of the teams wearing `color`.
pub fn query2<C: Connect, W: Write>(
    connector: &C,
    color: &str,
    format: OutputFormat,
    out: &mut W,
) -> Result<Vec<TeamName>> {
    run_report(connector, format, out, |db| db.teams_with_color(color))
}

/// Query 3: roster of `team`, highest scorers first.
pub fn query3<C: Connect, W: Write>(
    connector: &C,
    team: &str,
    format: OutputFormat,
    out: &mut W,
) -> Result<Vec<PlayerName>> {
    run_report(connector, format, out, |db| db.roster_by_points(team))
}

/// Query 4: players on teams located in `state` that wear `color`.
pub fn query4<C: Connect, W: Write>(
    connector: &C,
    state: &str,
    color: &str,
    format: OutputFormat,
    out: &mut W,
) -> Result<Vec<UniformPlayer>> {
    run_report(connector, format, out, |db| {
        db.players_in_state_with_color(state, color)
    })
}

/// Query 5: players on teams with more than `wins` wins.
pub fn query5<C: Connect, W: Write>(
    connector: &C,
    wins: i64,
    format: OutputFormat,
    out: &mut W,
) -> Result<Vec<WinningPlayer>> {
    run_report(connector, format, out, |db| {
        db.players_on_teams_with_wins_over(wins)
    })
}
