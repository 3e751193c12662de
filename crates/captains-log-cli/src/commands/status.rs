use serde::Serialize;

use captains_log_core::stardate::current_stardate;
use captains_log_core::LogStore;

use crate::app::AppContext;
use crate::cli::JsonArgs;
use crate::output::print_json;

#[derive(Serialize)]
struct StatusReport {
    config_path: String,
    config_exists: bool,
    database_path: String,
    key_path: String,
    key_recipient: String,
    entries: u64,
    categories: usize,
    stardate: String,
}

pub fn handle_status(ctx: &AppContext, args: &JsonArgs) -> anyhow::Result<()> {
    let paths = ctx.paths()?;
    let store = ctx.open_store()?;

    let report = StatusReport {
        config_path: paths.config_path.display().to_string(),
        config_exists: paths.config_exists,
        database_path: store.path().display().to_string(),
        key_path: paths.key_path.display().to_string(),
        key_recipient: store.key().fingerprint(),
        entries: store.count_entries()?,
        categories: store.list_categories()?.len(),
        stardate: current_stardate(),
    };

    if args.json {
        return print_json(&report);
    }
    let config_note = if report.config_exists { "" } else { " (not written; defaults in use)" };
    println!("Config:     {}{}", report.config_path, config_note);
    println!("Database:   {}", report.database_path);
    println!("Key file:   {}", report.key_path);
    println!("Recipient:  {}", report.key_recipient);
    println!("Entries:    {}", report.entries);
    println!("Categories: {}", report.categories);
    println!("Stardate:   {}", report.stardate);
    Ok(())
}
