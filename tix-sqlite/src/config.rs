//! Configuration types for the SQLite database connection.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for SQLite database connections.
///
/// # Examples
///
/// ```
/// use tix_sqlite::config::SqliteConfig;
/// use std::path::PathBuf;
///
/// // In-memory database (default)
/// let config = SqliteConfig::default();
///
/// // File-based database with a larger read pool
/// let config = SqliteConfig {
///     database_path: Some(PathBuf::from("tickets.db")),
///     max_readers: 16,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SqliteConfig {
    /// Database file path. If None, uses a private in-memory database
    pub database_path: Option<PathBuf>,

    /// Whether to create the database file if it doesn't exist
    pub create_if_missing: bool,

    /// Upper bound on concurrent read connections. Writes always use a
    /// single dedicated connection.
    pub max_readers: u32,
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            database_path: None,
            create_if_missing: true,
            max_readers: 8,
        }
    }
}
