//! Core data types for the storage layer.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Content shown in place of an encrypted entry that cannot be decrypted.
pub const DECRYPTION_FAILED_CONTENT: &str = "[CLASSIFIED - DECRYPTION FAILED]";

/// Default page size for [`LogFilter`].
pub const DEFAULT_LIST_LIMIT: usize = 50;

/// Sensitivity level of an entry. Anything above `Unclassified` is
/// encrypted at rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Classification {
    #[default]
    Unclassified,
    Classified,
    TopSecret,
}

impl Classification {
    pub const ALL: [Classification; 3] = [
        Classification::Unclassified,
        Classification::Classified,
        Classification::TopSecret,
    ];

    /// Label as stored in the `classification` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Unclassified => "UNCLASSIFIED",
            Classification::Classified => "CLASSIFIED",
            Classification::TopSecret => "TOP_SECRET",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Classification {
    type Err = ValidationError;

    /// Accepts the stored labels case-insensitively, with `-` or space in
    /// place of `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace(['-', ' '], "_");
        Classification::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| ValidationError::UnknownClassification(s.to_string()))
    }
}

/// Entry priority, 1 (routine) through 5 (critical).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Priority(u8);

impl Priority {
    pub const MIN: Priority = Priority(1);
    pub const MAX: Priority = Priority(5);

    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if (1..=5).contains(&value) {
            Ok(Priority(value as u8))
        } else {
            Err(ValidationError::PriorityOutOfRange(value))
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::MIN
    }
}

impl TryFrom<i64> for Priority {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Priority::new(value)
    }
}

impl From<Priority> for i64 {
    fn from(priority: Priority) -> Self {
        i64::from(priority.0)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored log entry, with content already decrypted (or replaced by
/// [`DECRYPTION_FAILED_CONTENT`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Store-assigned identifier
    pub id: i64,

    /// SET display date; primary sort key
    pub stardate: String,

    /// Real-world timestamp as captured at creation, stored verbatim
    pub earth_date: String,

    /// Category name from the `log_types` catalog
    pub log_type: String,

    pub priority: Priority,

    pub classification: Classification,

    pub title: String,

    pub content: String,

    /// Whether the stored content is ciphertext
    pub is_encrypted: bool,

    pub created_at: DateTime<Utc>,

    pub modified_at: DateTime<Utc>,
}

/// Builder for creating new entries.
#[derive(Debug, Clone)]
pub struct NewLogEntry {
    pub stardate: String,
    pub earth_date: String,
    pub log_type: String,
    pub title: String,
    pub content: String,
    pub priority: Priority,
    pub classification: Classification,
}

impl NewLogEntry {
    pub fn new(
        stardate: impl Into<String>,
        earth_date: impl Into<String>,
        log_type: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            stardate: stardate.into(),
            earth_date: earth_date.into(),
            log_type: log_type.into(),
            title: title.into(),
            content: content.into(),
            priority: Priority::default(),
            classification: Classification::default(),
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_classification(mut self, classification: Classification) -> Self {
        self.classification = classification;
        self
    }
}

/// A row from the category catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub description: String,
    /// Display hint (hex color)
    pub color: String,
}

/// Filter and pagination for listing entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFilter {
    /// Only entries of this category
    pub log_type: Option<String>,

    /// Only entries at or above this priority
    pub min_priority: Option<Priority>,

    /// Maximum number of results
    pub limit: usize,

    /// Number of results to skip
    pub offset: usize,
}

impl Default for LogFilter {
    fn default() -> Self {
        Self {
            log_type: None,
            min_priority: None,
            limit: DEFAULT_LIST_LIMIT,
            offset: 0,
        }
    }
}

impl LogFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log_type(mut self, log_type: impl Into<String>) -> Self {
        self.log_type = Some(log_type.into());
        self
    }

    pub fn min_priority(mut self, priority: Priority) -> Self {
        self.min_priority = Some(priority);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_builder_defaults() {
        let entry = NewLogEntry::new(
            "2954.03.07.09.05",
            "2024-03-07 09:05:00",
            "PERSONAL_LOG",
            "Shore leave",
            "Quiet day on Port Olisar.",
        );

        assert_eq!(entry.priority, Priority::MIN);
        assert_eq!(entry.classification, Classification::Unclassified);

        let entry = entry
            .with_priority(Priority::new(4).unwrap())
            .with_classification(Classification::TopSecret);
        assert_eq!(entry.priority.get(), 4);
        assert_eq!(entry.classification, Classification::TopSecret);
    }

    #[test]
    fn test_log_filter_builder() {
        let filter = LogFilter::new();
        assert_eq!(filter.limit, DEFAULT_LIST_LIMIT);
        assert_eq!(filter.offset, 0);

        let filter = filter
            .log_type("SECURITY_ALERT")
            .min_priority(Priority::MAX)
            .limit(2)
            .offset(1);
        assert_eq!(filter.log_type.as_deref(), Some("SECURITY_ALERT"));
        assert_eq!(filter.min_priority, Some(Priority::MAX));
        assert_eq!(filter.limit, 2);
        assert_eq!(filter.offset, 1);
    }

    #[test]
    fn test_classification_labels() {
        for classification in Classification::ALL {
            let parsed: Classification = classification.as_str().parse().unwrap();
            assert_eq!(parsed, classification);
        }
        assert_eq!(
            "top-secret".parse::<Classification>().unwrap(),
            Classification::TopSecret
        );
        assert_eq!(
            "restricted".parse::<Classification>(),
            Err(ValidationError::UnknownClassification("restricted".to_string()))
        );
    }

    #[test]
    fn test_classification_serializes_as_stored_label() {
        let json = serde_json::to_string(&Classification::TopSecret).unwrap();
        assert_eq!(json, "\"TOP_SECRET\"");
    }

    #[test]
    fn test_priority_bounds() {
        assert!(Priority::new(0).is_err());
        assert!(Priority::new(6).is_err());
        assert_eq!(Priority::new(5).unwrap(), Priority::MAX);
        assert_eq!(
            serde_json::from_str::<Priority>("3").unwrap().get(),
            3
        );
        assert!(serde_json::from_str::<Priority>("9").is_err());
    }
}
