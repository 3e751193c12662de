//! Entry row type for database queries.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::{LogError, Result};
use crate::storage::types::{Classification, LogEntry, Priority};

/// Raw row data from the logs table, before parsing into domain types.
///
/// `content` is exactly what is stored: ciphertext when `is_encrypted`.
#[derive(Debug)]
pub struct LogRow {
    pub id: i64,
    pub stardate: String,
    pub earth_date: String,
    pub log_type: String,
    pub priority: Option<i64>,
    pub classification: Option<String>,
    pub title: String,
    pub content: String,
    pub is_encrypted: Option<bool>,
    pub created_at: String,
    pub modified_at: String,
}

impl LogRow {
    /// Read a row selected with [`super::schema::ENTRY_COLUMNS`].
    pub fn from_sql(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            stardate: row.get(1)?,
            earth_date: row.get(2)?,
            log_type: row.get(3)?,
            priority: row.get(4)?,
            classification: row.get(5)?,
            title: row.get(6)?,
            content: row.get(7)?,
            is_encrypted: row.get(8)?,
            created_at: row.get(9)?,
            modified_at: row.get(10)?,
        })
    }

    pub fn is_encrypted(&self) -> bool {
        self.is_encrypted.unwrap_or(false)
    }
}

/// Accepts RFC 3339 (written by this crate) and SQLite's
/// `CURRENT_TIMESTAMP` form (UTC, no offset).
fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| LogError::Storage(format!("Invalid timestamp {:?}: {}", raw, e)))
}

impl TryFrom<LogRow> for LogEntry {
    type Error = LogError;

    fn try_from(row: LogRow) -> Result<Self> {
        let is_encrypted = row.is_encrypted();
        let priority = match row.priority {
            Some(value) => Priority::new(value)
                .map_err(|e| LogError::Storage(format!("Invalid priority: {}", e)))?,
            None => Priority::default(),
        };
        let classification = match row.classification {
            Some(ref value) => value
                .parse::<Classification>()
                .map_err(|e| LogError::Storage(format!("Invalid classification: {}", e)))?,
            None => Classification::default(),
        };
        let created_at = parse_timestamp(&row.created_at)?;
        let modified_at = parse_timestamp(&row.modified_at)?;

        Ok(LogEntry {
            id: row.id,
            stardate: row.stardate,
            earth_date: row.earth_date,
            log_type: row.log_type,
            priority,
            classification,
            title: row.title,
            content: row.content,
            is_encrypted,
            created_at,
            modified_at,
        })
    }
}
