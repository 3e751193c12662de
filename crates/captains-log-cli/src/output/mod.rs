//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying entries
//! in various formats (JSON, plain text).

mod json;
mod text;

// Re-export public API
pub use json::{entries_json, entry_json, print_json};
pub use text::{print_categories, print_entry, print_entry_list};
