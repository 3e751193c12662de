//! Application context for the Captain's Log CLI.
//!
//! Provides a unified context that combines CLI arguments with
//! lazily-resolved file locations.

use once_cell::unsync::OnceCell;

use captains_log_core::{LogStore, SqliteLogStore};

use crate::cli::Cli;

use super::resolver::{resolve_paths, ResolvedPaths};

/// Application context that bundles CLI args with resolved paths.
///
/// This avoids repeatedly reading the config file and threading multiple
/// parameters through handler functions.
pub struct AppContext<'a> {
    cli: &'a Cli,
    paths: OnceCell<ResolvedPaths>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            paths: OnceCell::new(),
        }
    }

    /// Get the CLI arguments.
    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the resolved locations, reading the config file on first use.
    pub fn paths(&self) -> anyhow::Result<&ResolvedPaths> {
        self.paths.get_or_try_init(|| resolve_paths(self.cli))
    }

    /// Open the store and make sure its schema and categories exist.
    pub fn open_store(&self) -> anyhow::Result<SqliteLogStore> {
        let paths = self.paths()?;
        tracing::debug!(
            database = %paths.database_path.display(),
            key = %paths.key_path.display(),
            "opening log store"
        );
        let store = SqliteLogStore::open(&paths.store_config())?;
        store.initialize()?;
        Ok(store)
    }
}
