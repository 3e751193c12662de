//! Path resolution for the config, database and key files.
//!
//! Each location comes from the first of: command-line flag (or its
//! environment variable), config file, XDG default.

use std::path::PathBuf;

use captains_log_core::storage::DEFAULT_LIST_LIMIT;
use captains_log_core::StoreConfig;

use crate::cli::Cli;
use crate::config::{default_config_path, default_database_path, default_key_path, read_config};

/// Locations and display settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub config_path: PathBuf,
    pub config_exists: bool,
    pub database_path: PathBuf,
    pub key_path: PathBuf,
    pub list_limit: usize,
}

impl ResolvedPaths {
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(&self.database_path, &self.key_path)
    }
}

/// Resolve the config file path from `--config` or the default location.
pub fn resolve_config_path(cli: &Cli) -> anyhow::Result<PathBuf> {
    match cli.config.as_deref().map(str::trim) {
        Some(value) if !value.is_empty() => Ok(PathBuf::from(value)),
        _ => default_config_path(),
    }
}

/// Resolve every location the store needs.
///
/// A missing config file is not an error; the defaults apply.
pub fn resolve_paths(cli: &Cli) -> anyhow::Result<ResolvedPaths> {
    let config_path = resolve_config_path(cli)?;
    let config_exists = config_path.exists();
    let config = if config_exists {
        Some(read_config(&config_path)?)
    } else {
        None
    };

    let database_path = match (non_empty(&cli.database), &config) {
        (Some(path), _) => PathBuf::from(path),
        (None, Some(config)) => PathBuf::from(&config.storage.database_path),
        (None, None) => default_database_path()?,
    };
    let key_path = match (non_empty(&cli.key_file), &config) {
        (Some(path), _) => PathBuf::from(path),
        (None, Some(config)) => PathBuf::from(&config.security.key_path),
        (None, None) => default_key_path()?,
    };
    let list_limit = config
        .as_ref()
        .map(|config| config.display.list_limit)
        .unwrap_or(DEFAULT_LIST_LIMIT);

    Ok(ResolvedPaths {
        config_path,
        config_exists,
        database_path,
        key_path,
        list_limit,
    })
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    use crate::config::{write_config, AppConfig};

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["captains-log"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        let mut config = AppConfig::new(dir.path().join("from-config.db"), dir.path().join("k"));
        config.display.list_limit = 7;
        write_config(&config_path, &config).unwrap();

        let config_arg = config_path.to_string_lossy().to_string();
        let cli = parse(&["--config", &config_arg, "--database", "/tmp/flag.db", "types"]);
        let paths = resolve_paths(&cli).unwrap();

        assert!(paths.config_exists);
        assert_eq!(paths.database_path, PathBuf::from("/tmp/flag.db"));
        assert_eq!(paths.key_path, dir.path().join("k"));
        assert_eq!(paths.list_limit, 7);
    }

    #[test]
    fn test_missing_config_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config_arg = dir.path().join("absent.toml").to_string_lossy().to_string();
        let cli = parse(&["--config", &config_arg, "--key-file", "/tmp/k", "types"]);
        let paths = resolve_paths(&cli).unwrap();

        assert!(!paths.config_exists);
        assert_eq!(paths.key_path, PathBuf::from("/tmp/k"));
        assert_eq!(paths.list_limit, DEFAULT_LIST_LIMIT);
    }
}
