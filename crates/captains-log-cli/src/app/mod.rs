//! Application-level utilities for the Captain's Log CLI.
//!
//! This module provides:
//! - Path resolution for the config, database and key files
//! - The per-invocation context that opens the store

mod context;
mod resolver;

// Re-export public API
pub use context::AppContext;
pub use resolver::resolve_config_path;
