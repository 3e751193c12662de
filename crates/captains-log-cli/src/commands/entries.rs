use std::io::{self, IsTerminal, Read};

use chrono::Local;

use captains_log_core::stardate::{format_stardate, to_stardate};
use captains_log_core::storage::{Classification, LogEntry, LogFilter, NewLogEntry, Priority};
use captains_log_core::templates::{self, EntryPreset};
use captains_log_core::validation::validate_draft;
use captains_log_core::LogStore;

use crate::app::AppContext;
use crate::cli::{AddArgs, DeleteArgs, ListArgs, SearchArgs, ShowArgs};
use crate::constants::EARTH_DATE_FORMAT;
use crate::errors::CliError;
use crate::output::{entries_json, entry_json, print_entry, print_entry_list, print_json};

const LIST_HINT: &str = "Hint: Run `captains-log list` to find entry IDs.";
const TYPES_HINT: &str = "Hint: Run `captains-log types` to see available log types.";

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let preset = args.emergency.then(templates::emergency);

    let log_type = args
        .log_type
        .clone()
        .or_else(|| preset.as_ref().map(|p| p.log_type.to_string()))
        .ok_or_else(|| CliError::invalid_input("Missing log type (or pass --emergency)"))?;
    let title = args
        .title
        .clone()
        .or_else(|| preset.as_ref().map(|p| p.title.to_string()))
        .unwrap_or_default();
    let content = match &args.content {
        Some(content) => content.clone(),
        None => read_stdin_content()?
            .or_else(|| preset.as_ref().map(|p| p.content.to_string()))
            .unwrap_or_default(),
    };
    let priority = match (args.priority, &preset) {
        (Some(value), _) => Priority::new(value).map_err(CliError::from)?,
        (None, Some(preset)) => preset.priority,
        (None, None) => Priority::default(),
    };
    let classification = resolve_classification(args.classification, preset.as_ref());

    validate_draft(&title, &content).map_err(CliError::from)?;

    let store = ctx.open_store()?;
    let known = store
        .list_categories()?
        .iter()
        .any(|category| category.name == log_type);
    if !known {
        return Err(
            CliError::not_found(format!("Unknown log type \"{}\"", log_type), TYPES_HINT).into(),
        );
    }

    let now = Local::now();
    let stardate = to_stardate(&now);
    let earth_date = now.format(EARTH_DATE_FORMAT).to_string();
    let draft = NewLogEntry::new(stardate.clone(), earth_date, log_type, title, content)
        .with_priority(priority)
        .with_classification(classification);

    let id = store.create_entry(&draft)?;
    tracing::info!(id, classification = %classification, "log entry recorded");

    if args.json {
        let entry = store
            .get_entry(id)?
            .ok_or_else(|| anyhow::anyhow!("Entry {} vanished after insert", id))?;
        return print_json(&entry_json(&entry));
    }
    if !ctx.quiet() {
        println!("Logged entry {} at {}", id, format_stardate(&stardate));
    } else {
        println!("{}", id);
    }
    Ok(())
}

/// An explicit `--classification` wins, then the preset's, then the default.
fn resolve_classification(
    explicit: Option<Classification>,
    preset: Option<&EntryPreset>,
) -> Classification {
    explicit
        .or_else(|| preset.map(|p| p.classification))
        .unwrap_or_default()
}

/// Piped input is taken as content; an interactive terminal is never read.
fn read_stdin_content() -> anyhow::Result<Option<String>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }
    let mut buffer = String::new();
    stdin
        .lock()
        .read_to_string(&mut buffer)
        .map_err(|e| anyhow::anyhow!("Failed to read content from stdin: {}", e))?;
    if buffer.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(buffer.trim_end_matches('\n').to_string()))
}

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let limit = match args.limit {
        Some(limit) => limit,
        None => ctx.paths()?.list_limit,
    };
    let mut filter = LogFilter::new().limit(limit).offset(args.offset);
    if let Some(log_type) = &args.log_type {
        filter = filter.log_type(log_type.clone());
    }
    if let Some(value) = args.min_priority {
        filter = filter.min_priority(Priority::new(value).map_err(CliError::from)?);
    }

    let store = ctx.open_store()?;
    let entries = store.list_entries(&filter)?;
    render_entries(ctx, &entries, args.json, "No log entries found.")
}

pub fn handle_search(ctx: &AppContext, args: &SearchArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let mut entries = store.search_entries(&args.term)?;
    if let Some(log_type) = &args.log_type {
        entries.retain(|entry| &entry.log_type == log_type);
    }
    let empty = format!("No log entries match \"{}\".", args.term);
    render_entries(ctx, &entries, args.json, &empty)
}

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let entry = store
        .get_entry(args.id)?
        .ok_or_else(|| CliError::not_found(format!("Entry {} not found", args.id), LIST_HINT))?;

    if args.json {
        return print_json(&entry_json(&entry));
    }
    print_entry(&entry);
    Ok(())
}

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    if !store.delete_entry(args.id)? {
        return Err(
            CliError::not_found(format!("Entry {} not found", args.id), LIST_HINT).into(),
        );
    }
    if !ctx.quiet() {
        println!("Deleted entry {}", args.id);
    }
    Ok(())
}

fn render_entries(
    ctx: &AppContext,
    entries: &[LogEntry],
    json: bool,
    empty_message: &str,
) -> anyhow::Result<()> {
    if json {
        return print_json(&entries_json(entries));
    }
    if entries.is_empty() {
        if !ctx.quiet() {
            println!("{}", empty_message);
        }
        return Ok(());
    }
    print_entry_list(entries);
    Ok(())
}
