//! Schema and seed data for the SQLite store.

/// Tables and indexes, all created only if absent.
pub const CREATE_TABLES: &str = r#"
    CREATE TABLE IF NOT EXISTS logs (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        stardate TEXT NOT NULL,
        earth_date TEXT NOT NULL,
        log_type TEXT NOT NULL,
        priority INTEGER DEFAULT 1,
        classification TEXT DEFAULT 'UNCLASSIFIED',
        title TEXT NOT NULL,
        content TEXT NOT NULL,
        is_encrypted INTEGER DEFAULT 0,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
        modified_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    );

    CREATE INDEX IF NOT EXISTS idx_logs_stardate ON logs (stardate);

    CREATE TABLE IF NOT EXISTS log_types (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT UNIQUE NOT NULL,
        description TEXT,
        color TEXT DEFAULT '#00FF00'
    );
"#;

/// Columns selected for every entry query, in [`super::row::LogRow`] order.
pub const ENTRY_COLUMNS: &str = "id, stardate, earth_date, log_type, priority, classification, \
     title, content, is_encrypted, created_at, modified_at";

pub struct SeedCategory {
    pub name: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

/// Categories installed into every store.
pub const DEFAULT_LOG_TYPES: [SeedCategory; 7] = [
    SeedCategory {
        name: "MISSION_REPORT",
        description: "Mission status and objectives",
        color: "#00FF00",
    },
    SeedCategory {
        name: "PERSONAL_LOG",
        description: "Personal observations and thoughts",
        color: "#0080FF",
    },
    SeedCategory {
        name: "SYSTEM_STATUS",
        description: "Ship systems and technical reports",
        color: "#FFD700",
    },
    SeedCategory {
        name: "DIPLOMATIC_LOG",
        description: "First contact and diplomatic encounters",
        color: "#FF8000",
    },
    SeedCategory {
        name: "SCIENTIFIC_LOG",
        description: "Research findings and discoveries",
        color: "#FF00FF",
    },
    SeedCategory {
        name: "SECURITY_ALERT",
        description: "Security concerns and incidents",
        color: "#FF0000",
    },
    SeedCategory {
        name: "MEDICAL_LOG",
        description: "Medical reports and crew health",
        color: "#00FFFF",
    },
];
