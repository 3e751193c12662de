use captains_log_core::LogStore;

use crate::app::{resolve_config_path, AppContext};
use crate::config::{write_config, AppConfig};

/// Write the config file (if absent), then create the database, schema,
/// categories and key file.
pub fn handle_init(ctx: &AppContext) -> anyhow::Result<()> {
    let config_path = resolve_config_path(ctx.cli())?;
    let paths = ctx.paths()?;

    let wrote_config = if config_path.exists() {
        false
    } else {
        let config = AppConfig::new(paths.database_path.clone(), paths.key_path.clone());
        write_config(&config_path, &config)?;
        true
    };

    let store = ctx.open_store()?;
    let categories = store.list_categories()?.len();

    if ctx.quiet() {
        return Ok(());
    }
    if wrote_config {
        println!("Wrote config to {}", config_path.display());
    } else {
        println!("Using existing config at {}", config_path.display());
    }
    println!("Database ready at {}", store.path().display());
    println!("Encryption key at {}", paths.key_path.display());
    println!("{} log types available", categories);
    Ok(())
}
