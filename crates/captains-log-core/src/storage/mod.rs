//! Storage abstraction for Captain's Log.
//!
//! This module defines the `LogStore` trait and core types for reading and
//! writing log entries.
//!
//! ## Architecture
//!
//! - `SqliteLogStore`: a SQLite database file plus an at-rest key file
//!
//! The store is built once from a `StoreConfig` and passed to callers by
//! reference; there is no process-wide connection or key.

pub mod sqlite;
pub mod traits;
pub mod types;

use std::path::PathBuf;

// Re-export public types
pub use sqlite::SqliteLogStore;
pub use traits::LogStore;
pub use types::{
    Category, Classification, LogEntry, LogFilter, NewLogEntry, Priority,
    DECRYPTION_FAILED_CONTENT, DEFAULT_LIST_LIMIT,
};

/// Locations a store is opened from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// SQLite database file
    pub database_path: PathBuf,

    /// At-rest key file, created on first use
    pub key_path: PathBuf,
}

impl StoreConfig {
    pub fn new(database_path: impl Into<PathBuf>, key_path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: database_path.into(),
            key_path: key_path.into(),
        }
    }
}
