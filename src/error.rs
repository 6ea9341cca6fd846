//! Error types for the ACC basketball reporting CLI

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BballError>;

#[derive(Error, Debug)]
pub enum BballError {
    #[error("Can't open database {}: {source}", path.display())]
    Connection {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Query failed: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid stat filter '{input}': {reason}")]
    InvalidStatFilter { input: String, reason: String },

    #[error("Unknown statistic: {name}")]
    UnknownStat { name: String },

    #[error("Could not determine data directory; pass --database or set {env_var}")]
    MissingDataDir { env_var: String },
}
