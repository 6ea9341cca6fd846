//! Command implementations for the ACC basketball reporting CLI

pub mod exercise;
pub mod output;
pub mod reports;

use crate::{error::BballError, Result, DATABASE_ENV_VAR};
use std::path::PathBuf;

/// Resolve the store location from the CLI flag, the environment, or the
/// default under the user data directory, in that order.
pub fn resolve_database_path(database: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = database {
        return Ok(path);
    }

    if let Ok(value) = std::env::var(DATABASE_ENV_VAR) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }

    let data_dir = dirs::data_dir().ok_or_else(|| BballError::MissingDataDir {
        env_var: DATABASE_ENV_VAR.to_string(),
    })?;
    Ok(data_dir.join("acc-bball").join("acc_bball.db"))
}
