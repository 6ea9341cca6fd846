//! Storage layer for the ACC basketball reports
//!
//! This module provides a read-only abstraction over the SQLite store,
//! organized into logical components:
//! - `models`: Table rows and report projections
//! - `schema`: DDL, connection configuration and the connection handle
//! - `queries`: The five report queries

pub mod models;
pub mod queries;
pub mod schema;


// Re-export the main types and database struct for easy access
pub use models::*;
pub use queries::build_player_range_query;
pub use schema::{create_tables, BballDatabase, Connect, DatabaseConfig};
