//! # Captain's Log Core
//!
//! Core library for Captain's Log - a personal journal of timestamped,
//! categorized log entries with encryption at rest for classified content.
//!
//! This crate provides the domain logic, storage and data models
//! independent of any front end.
//!
//! ## Architecture
//!
//! - **stardate**: Standard Earth Time (SET) date codec
//! - **crypto**: Classification policy, at-rest key lifecycle, content encryption
//! - **storage**: Entry store trait and the SQLite implementation
//! - **templates**: Content scaffolds for new entries
//! - **validation**: Caller-side checks for entry drafts

pub mod crypto;
pub mod error;
pub mod stardate;
pub mod storage;
pub mod templates;
pub mod validation;

pub use error::{DecryptionError, LogError, Result, StardateError, ValidationError};
pub use storage::{LogStore, SqliteLogStore, StoreConfig};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
