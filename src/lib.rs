//! ACC Basketball Reporting Library
//!
//! Read-only reports over a small SQLite schema of states, uniform colors,
//! teams and players.
//!
//! ## Reports
//!
//! - **query1**: Players whose per-game statistics fall inside inclusive ranges
//! - **query2**: Teams wearing a given uniform color
//! - **query3**: A team's roster ordered by points per game
//! - **query4**: Players whose team is in a given state and wears a given color
//! - **query5**: Players on teams with more than a given number of wins
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use acc_bball::{commands::output::OutputFormat, commands::reports::query2, DatabaseConfig};
//!
//! # fn example() -> acc_bball::Result<()> {
//! let config = DatabaseConfig::new("acc_bball.db");
//! let teams = query2(&config, "DarkBlue", OutputFormat::Text, &mut std::io::stdout())?;
//! println!("{} teams", teams.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set the database location to avoid passing `--database` every time:
//! ```bash
//! export ACC_BBALL_DATABASE=/srv/acc/acc_bball.db
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{ColorId, PlayerFilters, PlayerId, Stat, StatFilter, StateId, TeamId};
pub use error::{BballError, Result};
pub use storage::{BballDatabase, Connect, DatabaseConfig};

pub const DATABASE_ENV_VAR: &str = "ACC_BBALL_DATABASE";
