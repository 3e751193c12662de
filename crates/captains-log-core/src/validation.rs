//! Caller-side checks for entry drafts.
//!
//! The store accepts any title and content; front ends run these checks
//! before calling `LogStore::create_entry`.

use crate::error::ValidationError;

/// Reject drafts whose title or content is empty after trimming.
pub fn validate_draft(title: &str, content: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    if content.trim().is_empty() {
        return Err(ValidationError::EmptyContent);
    }
    Ok(())
}
