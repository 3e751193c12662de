//! Captain's Log CLI - personal journal with encrypted classified entries
//!
//! This is the command-line interface for Captain's Log. It provides a
//! user-friendly interface to the core library functionality.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{categories, entries, init, stardate, status};
use crate::errors::exit_code_for;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("Error: {:#}", e);
        std::process::exit(exit_code_for(&e));
    }
}

/// Diagnostics go to stderr so stdout stays parseable. `RUST_LOG` wins
/// over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Init => init::handle_init(ctx),
        Commands::Add(args) => entries::handle_add(ctx, args),
        Commands::List(args) => entries::handle_list(ctx, args),
        Commands::Search(args) => entries::handle_search(ctx, args),
        Commands::Show(args) => entries::handle_show(ctx, args),
        Commands::Delete(args) => entries::handle_delete(ctx, args),
        Commands::Types(args) => categories::handle_types(ctx, args),
        Commands::Template(args) => categories::handle_template(args),
        Commands::Stardate(args) => stardate::handle_stardate(ctx, args),
        Commands::Status(args) => status::handle_status(ctx, args),
    }
}
