//! Entry store trait definition.
//!
//! The `LogStore` trait is the data-access interface handed to front ends.
//! Implementations own the schema and the category catalog, and apply the
//! encryption policy on every write and read of entry content.

use super::types::{Category, LogEntry, LogFilter, NewLogEntry};
use crate::error::Result;

/// Entry store interface.
///
/// All implementations must ensure:
/// - Classified content is encrypted before it reaches storage
/// - Each operation is atomic (pre- or post-state after a crash, never partial)
/// - One unreadable encrypted row never fails a listing or search
///
/// Operations take `&self` so one store can be shared between callers.
pub trait LogStore: Send + Sync {
    /// Create tables if absent and seed the category catalog.
    ///
    /// Safe to call on every start; seeding never duplicates rows.
    fn initialize(&self) -> Result<()>;

    /// Insert a new entry.
    ///
    /// Content is encrypted when the classification requires it. Title and
    /// content are not validated here.
    ///
    /// # Returns
    ///
    /// Returns the id assigned to the entry.
    fn create_entry(&self, entry: &NewLogEntry) -> Result<i64>;

    /// List entries matching the filter, newest stardate first.
    ///
    /// Encrypted entries that fail to decrypt are returned with
    /// `DECRYPTION_FAILED_CONTENT` as their content.
    fn list_entries(&self, filter: &LogFilter) -> Result<Vec<LogEntry>>;

    /// Case-insensitive substring search over title and decrypted content,
    /// newest stardate first.
    fn search_entries(&self, term: &str) -> Result<Vec<LogEntry>>;

    /// Get an entry by id.
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(entry))` if found, `Ok(None)` if not found.
    fn get_entry(&self, id: i64) -> Result<Option<LogEntry>>;

    /// Total number of stored entries.
    fn count_entries(&self) -> Result<u64>;

    /// All categories, alphabetical by name.
    fn list_categories(&self) -> Result<Vec<Category>>;

    /// Delete an entry.
    ///
    /// # Returns
    ///
    /// Returns `true` if a row was removed, `false` if the id did not exist.
    fn delete_entry(&self, id: i64) -> Result<bool>;
}
