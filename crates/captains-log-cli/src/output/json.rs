//! JSON output formatting for entries.

use serde::Serialize;

use captains_log_core::stardate::format_stardate;
use captains_log_core::storage::LogEntry;

/// Convert an entry to JSON for output.
pub fn entry_json(entry: &LogEntry) -> serde_json::Value {
    serde_json::json!({
        "id": entry.id,
        "stardate": entry.stardate,
        "formatted_stardate": format_stardate(&entry.stardate),
        "earth_date": entry.earth_date,
        "log_type": entry.log_type,
        "priority": entry.priority,
        "classification": entry.classification,
        "title": entry.title,
        "content": entry.content,
        "is_encrypted": entry.is_encrypted,
        "created_at": entry.created_at,
        "modified_at": entry.modified_at,
    })
}

/// Convert multiple entries to JSON array for output.
pub fn entries_json(entries: &[LogEntry]) -> Vec<serde_json::Value> {
    entries.iter().map(entry_json).collect()
}

/// Pretty-print any serializable value to stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
