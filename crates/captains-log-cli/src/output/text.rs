//! Plain text output formatting for entries and categories.

use captains_log_core::stardate::format_stardate;
use captains_log_core::storage::{Category, Classification, LogEntry};

use crate::constants::SUMMARY_MAX;

/// One-line content preview, truncated on a character boundary.
pub fn entry_summary(content: &str, max: usize) -> String {
    let first_line = content.lines().find(|line| !line.trim().is_empty()).unwrap_or("");
    let trimmed = first_line.trim();
    if trimmed.chars().count() <= max {
        return trimmed.to_string();
    }
    let cut: String = trimmed.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", cut.trim_end())
}

fn classification_badge(classification: Classification) -> String {
    match classification {
        Classification::Unclassified => String::new(),
        other => format!(" [{}]", other),
    }
}

/// Print entries as aligned rows, newest first.
pub fn print_entry_list(entries: &[LogEntry]) {
    for entry in entries {
        println!(
            "{:>5}  {}  P{}  {:<15} {}{}",
            entry.id,
            entry.stardate,
            entry.priority,
            entry.log_type,
            entry.title,
            classification_badge(entry.classification),
        );
        let summary = entry_summary(&entry.content, SUMMARY_MAX);
        if !summary.is_empty() {
            println!("       {}", summary);
        }
    }
}

/// Print a single entry in full.
pub fn print_entry(entry: &LogEntry) {
    println!("ID:             {}", entry.id);
    println!("Stardate:       {}", format_stardate(&entry.stardate));
    println!("Earth date:     {}", entry.earth_date);
    println!("Type:           {}", entry.log_type);
    println!("Priority:       {}", entry.priority);
    println!("Classification: {}", entry.classification);
    println!("Encrypted:      {}", if entry.is_encrypted { "yes" } else { "no" });
    println!("Created:        {}", entry.created_at.to_rfc3339());
    println!("Modified:       {}", entry.modified_at.to_rfc3339());
    println!();
    println!("{}", entry.title);
    println!();
    println!("{}", entry.content);
}

/// Print the category catalog.
pub fn print_categories(categories: &[Category]) {
    for category in categories {
        println!(
            "{:<15} {}  {}",
            category.name, category.color, category.description
        );
    }
}
