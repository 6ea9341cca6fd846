//! Database schema and connection management

use crate::error::{BballError, Result};
use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};
use tracing::debug;

/// DDL for the four reporting tables.
///
/// References are nullable and follow `ON DELETE SET NULL ON UPDATE CASCADE`.
pub const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS state (
    state_id INTEGER PRIMARY KEY,
    name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS color (
    color_id INTEGER PRIMARY KEY,
    name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS team (
    team_id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    state_id INTEGER,
    color_id INTEGER,
    wins INTEGER NOT NULL,
    losses INTEGER NOT NULL,
    FOREIGN KEY (state_id) REFERENCES state(state_id)
        ON DELETE SET NULL ON UPDATE CASCADE,
    FOREIGN KEY (color_id) REFERENCES color(color_id)
        ON DELETE SET NULL ON UPDATE CASCADE
);

CREATE TABLE IF NOT EXISTS player (
    player_id INTEGER PRIMARY KEY,
    team_id INTEGER,
    uniform_num INTEGER NOT NULL,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    mpg INTEGER NOT NULL,
    ppg INTEGER NOT NULL,
    rpg INTEGER NOT NULL,
    apg INTEGER NOT NULL,
    spg REAL NOT NULL,
    bpg REAL NOT NULL,
    FOREIGN KEY (team_id) REFERENCES team(team_id)
        ON DELETE SET NULL ON UPDATE CASCADE
);
";

/// Create the reporting tables on a writable connection.
///
/// Provisioning only: existing tables are left untouched and no rows are
/// written.
pub fn create_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

/// Where the store lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub path: PathBuf,
}

impl DatabaseConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Anything that can hand out a fresh, independently released store handle.
pub trait Connect {
    fn connect(&self) -> Result<BballDatabase>;
}

impl Connect for DatabaseConfig {
    fn connect(&self) -> Result<BballDatabase> {
        BballDatabase::open(&self.path)
    }
}

/// Read-only handle on the reporting store.
///
/// The underlying connection is released when the handle is dropped;
/// [`BballDatabase::close`] releases it explicitly and reports close errors.
pub struct BballDatabase {
    pub(crate) conn: Connection,
    path: PathBuf,
}

impl BballDatabase {
    /// Open an existing store read-only.
    ///
    /// Fails with [`BballError::Connection`] when the file is missing,
    /// unreadable, or not a database.
    pub fn open(path: &Path) -> Result<Self> {
        let connection_error = |source| BballError::Connection {
            path: path.to_path_buf(),
            source,
        };

        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(path, flags).map_err(connection_error)?;

        // SQLite opens lazily; touch the header so bad files fail here.
        conn.query_row("SELECT count(*) FROM sqlite_master", [], |row| {
            row.get::<_, i64>(0)
        })
        .map_err(connection_error)?;

        debug!(path = %path.display(), "opened database connection");
        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Name the driver reports for this store (the file stem).
    pub fn database_name(&self) -> String {
        self.path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Release the connection now.
    pub fn close(self) -> Result<()> {
        let path = self.path;
        self.conn.close().map_err(|(_, err)| BballError::from(err))?;
        debug!(path = %path.display(), "closed database connection");
        Ok(())
    }
}
