//! SQLite storage backend.
//!
//! Entries live in a plain SQLite file; only the content of classified
//! entries is encrypted, using the store's at-rest key. The key is loaded
//! (or generated) once when the store is opened.

mod row;
mod schema;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension};
use tracing::{debug, warn};

use crate::crypto::{decrypt, encrypt, ensure_key, should_encrypt, AtRestKey};
use crate::error::{LogError, Result};
use crate::storage::traits::LogStore;
use crate::storage::types::{
    Category, LogEntry, LogFilter, NewLogEntry, DECRYPTION_FAILED_CONTENT,
};
use crate::storage::StoreConfig;

use row::LogRow;
use schema::{CREATE_TABLES, DEFAULT_LOG_TYPES, ENTRY_COLUMNS};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// SQLite entry store.
pub struct SqliteLogStore {
    path: PathBuf,
    conn: Mutex<Connection>,
    key: AtRestKey,
}

/// An entry after decrypt-on-read, and whether its content is readable.
struct Revealed {
    entry: LogEntry,
    readable: bool,
}

impl SqliteLogStore {
    /// Open (creating if needed) the database and key file named by `config`.
    ///
    /// Call [`LogStore::initialize`] before first use of a new database.
    ///
    /// # Errors
    ///
    /// Returns `LogError::Io` or `LogError::Sqlite` if the files cannot be
    /// opened, and `LogError::Crypto` if the key file is malformed.
    pub fn open(config: &StoreConfig) -> Result<Self> {
        if let Some(parent) = config.database_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let key = ensure_key(&config.key_path)?;
        let conn = Connection::open(&config.database_path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;

        debug!(path = %config.database_path.display(), "opened log store");
        Ok(Self {
            path: config.database_path.clone(),
            conn: Mutex::new(conn),
            key,
        })
    }

    /// Path of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The at-rest key in use.
    pub fn key(&self) -> &AtRestKey {
        &self.key
    }

    /// Lock the database connection, returning an error if the mutex is poisoned.
    fn lock_conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| LogError::Storage("SQLite connection poisoned".to_string()))
    }

    fn query_rows(
        conn: &Connection,
        query: &str,
        params: &[Box<dyn rusqlite::ToSql>],
    ) -> Result<Vec<LogRow>> {
        let mut stmt = conn.prepare(query)?;
        let rows = stmt
            .query_map(rusqlite::params_from_iter(params.iter()), LogRow::from_sql)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Convert a stored row, decrypting its content when flagged encrypted.
    ///
    /// The stored flag, not the classification, decides whether to decrypt.
    fn reveal(&self, row: LogRow) -> Result<Revealed> {
        let mut entry = LogEntry::try_from(row)?;
        if !entry.is_encrypted {
            return Ok(Revealed {
                entry,
                readable: true,
            });
        }

        match decrypt(&entry.content, &self.key) {
            Ok(plaintext) => {
                entry.content = plaintext;
                Ok(Revealed {
                    entry,
                    readable: true,
                })
            }
            Err(err) => {
                warn!(id = entry.id, error = %err, "failed to decrypt log entry");
                entry.content = DECRYPTION_FAILED_CONTENT.to_string();
                Ok(Revealed {
                    entry,
                    readable: false,
                })
            }
        }
    }

    fn reveal_all(&self, rows: Vec<LogRow>) -> Result<Vec<LogEntry>> {
        rows.into_iter()
            .map(|row| self.reveal(row).map(|revealed| revealed.entry))
            .collect()
    }
}

/// Case-insensitive substring match. Content that could not be decrypted
/// is not searched.
fn matches_term(revealed: &Revealed, needle: &str) -> bool {
    if revealed.entry.title.to_lowercase().contains(needle) {
        return true;
    }
    revealed.readable && revealed.entry.content.to_lowercase().contains(needle)
}

impl LogStore for SqliteLogStore {
    fn initialize(&self) -> Result<()> {
        let mut conn = self.lock_conn()?;
        let tx = conn.transaction()?;

        tx.execute_batch(CREATE_TABLES)?;
        {
            let mut stmt = tx.prepare(
                "INSERT OR IGNORE INTO log_types (name, description, color) VALUES (?, ?, ?)",
            )?;
            for seed in DEFAULT_LOG_TYPES.iter() {
                stmt.execute((seed.name, seed.description, seed.color))?;
            }
        }

        tx.commit()?;
        debug!(path = %self.path.display(), "initialized log store schema");
        Ok(())
    }

    fn create_entry(&self, entry: &NewLogEntry) -> Result<i64> {
        let is_encrypted = should_encrypt(entry.classification);
        let content = if is_encrypted {
            encrypt(&entry.content, &self.key)?
        } else {
            entry.content.clone()
        };
        let now = Utc::now().to_rfc3339();

        let mut conn = self.lock_conn()?;
        let tx = conn.transaction()?;

        tx.execute(
            r#"
            INSERT INTO logs (
                stardate,
                earth_date,
                log_type,
                priority,
                classification,
                title,
                content,
                is_encrypted,
                created_at,
                modified_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
            (
                &entry.stardate,
                &entry.earth_date,
                &entry.log_type,
                i64::from(entry.priority),
                entry.classification.as_str(),
                &entry.title,
                &content,
                is_encrypted,
                &now,
                &now,
            ),
        )?;
        let id = tx.last_insert_rowid();

        tx.commit()?;

        debug!(
            id,
            log_type = %entry.log_type,
            classification = %entry.classification,
            is_encrypted,
            "created log entry"
        );
        Ok(id)
    }

    fn list_entries(&self, filter: &LogFilter) -> Result<Vec<LogEntry>> {
        let mut conditions: Vec<&str> = Vec::new();
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(ref log_type) = filter.log_type {
            conditions.push("log_type = ?");
            params.push(Box::new(log_type.clone()));
        }

        if let Some(priority) = filter.min_priority {
            conditions.push("priority >= ?");
            params.push(Box::new(i64::from(priority)));
        }

        let mut query = format!("SELECT {} FROM logs", ENTRY_COLUMNS);
        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }
        query.push_str(" ORDER BY stardate DESC, id DESC LIMIT ? OFFSET ?");
        params.push(Box::new(i64::try_from(filter.limit).unwrap_or(i64::MAX)));
        params.push(Box::new(i64::try_from(filter.offset).unwrap_or(i64::MAX)));

        let rows = {
            let conn = self.lock_conn()?;
            Self::query_rows(&conn, &query, &params)?
        };
        self.reveal_all(rows)
    }

    fn search_entries(&self, term: &str) -> Result<Vec<LogEntry>> {
        // Encrypted content can only be matched after decryption, so every
        // row is read and matched here rather than with LIKE.
        let query = format!(
            "SELECT {} FROM logs ORDER BY stardate DESC, id DESC",
            ENTRY_COLUMNS
        );
        let rows = {
            let conn = self.lock_conn()?;
            Self::query_rows(&conn, &query, &[])?
        };

        let needle = term.to_lowercase();
        let mut entries = Vec::new();
        for row in rows {
            let revealed = self.reveal(row)?;
            if matches_term(&revealed, &needle) {
                entries.push(revealed.entry);
            }
        }

        Ok(entries)
    }

    fn get_entry(&self, id: i64) -> Result<Option<LogEntry>> {
        let row = {
            let conn = self.lock_conn()?;
            conn.query_row(
                &format!("SELECT {} FROM logs WHERE id = ?", ENTRY_COLUMNS),
                [id],
                LogRow::from_sql,
            )
            .optional()?
        };

        match row {
            Some(row) => Ok(Some(self.reveal(row)?.entry)),
            None => Ok(None),
        }
    }

    fn count_entries(&self) -> Result<u64> {
        let conn = self.lock_conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM logs", [], |row| row.get(0))?;
        u64::try_from(count).map_err(|_| LogError::Storage("Negative row count".to_string()))
    }

    fn list_categories(&self) -> Result<Vec<Category>> {
        let conn = self.lock_conn()?;

        let mut stmt = conn.prepare("SELECT name, description, color FROM log_types ORDER BY name")?;
        let categories = stmt
            .query_map([], |row| {
                Ok(Category {
                    name: row.get(0)?,
                    description: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                    color: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(categories)
    }

    fn delete_entry(&self, id: i64) -> Result<bool> {
        let mut conn = self.lock_conn()?;
        let tx = conn.transaction()?;

        let removed = tx.execute("DELETE FROM logs WHERE id = ?", [id])?;

        tx.commit()?;

        debug!(id, removed, "deleted log entry");
        Ok(removed > 0)
    }
}
