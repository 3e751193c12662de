use clap::{Args, Parser, Subcommand};

use captains_log_core::storage::Classification;
use captains_log_core::VERSION;

/// Captain's Log - personal journal with encrypted classified entries
#[derive(Parser)]
#[command(name = "captains-log")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file
    #[arg(long, global = true, env = "CAPTAINS_LOG_CONFIG")]
    pub config: Option<String>,

    /// Path to the log database (overrides config)
    #[arg(long, global = true, env = "CAPTAINS_LOG_DB")]
    pub database: Option<String>,

    /// Path to the encryption key file (overrides config)
    #[arg(long, global = true, env = "CAPTAINS_LOG_KEY")]
    pub key_file: Option<String>,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the config, database and key file
    Init,

    /// Record a new log entry
    Add(AddArgs),

    /// List entries, newest first
    List(ListArgs),

    /// Search titles and content
    Search(SearchArgs),

    /// Show a single entry
    Show(ShowArgs),

    /// Delete an entry
    Delete(DeleteArgs),

    /// List log categories
    Types(JsonArgs),

    /// Print the content template for a category
    Template(TemplateArgs),

    /// Show the current stardate, or convert one back to Earth time
    Stardate(StardateArgs),

    /// Show store location and totals
    Status(JsonArgs),
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Log category (see `captains-log types`)
    #[arg(value_name = "TYPE")]
    pub log_type: Option<String>,

    /// Entry title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Entry content (otherwise read from stdin)
    #[arg(short, long)]
    pub content: Option<String>,

    /// Priority from 1 (routine) to 5 (critical)
    #[arg(short, long)]
    pub priority: Option<i64>,

    /// UNCLASSIFIED, CLASSIFIED or TOP_SECRET [default: UNCLASSIFIED]
    #[arg(long)]
    pub classification: Option<Classification>,

    /// Fill unset fields from the emergency log preset
    #[arg(long)]
    pub emergency: bool,

    /// Output the created entry as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Filter by category
    #[arg(long = "type", value_name = "TYPE")]
    pub log_type: Option<String>,

    /// Only entries at or above this priority
    #[arg(long)]
    pub min_priority: Option<i64>,

    /// Limit number of results
    #[arg(long)]
    pub limit: Option<usize>,

    /// Skip this many results
    #[arg(long, default_value_t = 0)]
    pub offset: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `search` command
#[derive(Args)]
pub struct SearchArgs {
    /// Text to look for (case-insensitive)
    #[arg(value_name = "TERM")]
    pub term: String,

    /// Filter by category
    #[arg(long = "type", value_name = "TYPE")]
    pub log_type: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Entry ID
    #[arg(value_name = "ID")]
    pub id: i64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Entry ID
    #[arg(value_name = "ID")]
    pub id: i64,
}

/// Arguments for the `template` command
#[derive(Args)]
pub struct TemplateArgs {
    /// Log category
    #[arg(value_name = "TYPE")]
    pub log_type: String,
}

/// Arguments for the `stardate` command
#[derive(Args)]
pub struct StardateArgs {
    /// Convert this stardate (YYYY.MM.DD[.HH[.MM]]) back to Earth time
    #[arg(long, value_name = "SET")]
    pub to_earth: Option<String>,

    /// Also show the time in a ship zone (e.g. "Hurston", "microTech")
    #[arg(long)]
    pub zone: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Commands whose only option is JSON output
#[derive(Args)]
pub struct JsonArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
