use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use rusqlite::Connection;
use tempfile::{tempdir, TempDir};

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_captains-log"))
}

struct Env {
    dir: TempDir,
}

impl Env {
    fn new() -> Self {
        let dir = tempdir().expect("temp dir should be available");
        std::fs::create_dir_all(dir.path().join("c")).expect("create config dir");
        std::fs::create_dir_all(dir.path().join("d")).expect("create data dir");
        Self { dir }
    }

    fn config_home(&self) -> PathBuf {
        self.dir.path().join("c")
    }

    fn data_home(&self) -> PathBuf {
        self.dir.path().join("d")
    }

    fn database_path(&self) -> PathBuf {
        self.data_home().join("captains-log").join("captains_log.db")
    }

    fn key_path(&self) -> PathBuf {
        self.config_home().join("captains-log").join("encryption.key")
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(bin());
        cmd.args(args)
            .env("XDG_CONFIG_HOME", self.config_home())
            .env("XDG_DATA_HOME", self.data_home())
            .env_remove("CAPTAINS_LOG_CONFIG")
            .env_remove("CAPTAINS_LOG_DB")
            .env_remove("CAPTAINS_LOG_KEY")
            .env_remove("RUST_LOG")
            .stdin(Stdio::null());
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        self.command(args).output().expect("run captains-log")
    }

    fn run_ok(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "{:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("utf8 stdout")
    }

    fn run_json(&self, args: &[&str]) -> serde_json::Value {
        let stdout = self.run_ok(args);
        serde_json::from_str(&stdout).expect("valid JSON output")
    }

    fn add(&self, log_type: &str, title: &str, content: &str, extra: &[&str]) -> i64 {
        let mut args = vec!["add", log_type, "--title", title, "--content", content, "--json"];
        args.extend_from_slice(extra);
        let created = self.run_json(&args);
        created["id"].as_i64().expect("created entry has an id")
    }
}

fn raw_connection(path: &Path) -> Connection {
    Connection::open(path).expect("raw connection should open")
}

#[test]
fn test_init_creates_config_database_and_key() {
    let env = Env::new();
    let stdout = env.run_ok(&["init"]);

    assert!(stdout.contains("Wrote config"));
    assert!(stdout.contains("7 log types available"));
    assert!(env.config_home().join("captains-log").join("config.toml").exists());
    assert!(env.database_path().exists());
    let key = std::fs::read_to_string(env.key_path()).unwrap();
    assert!(key.trim().starts_with("AGE-SECRET-KEY-1"));

    let again = env.run_ok(&["init"]);
    assert!(again.contains("Using existing config"));
}

#[test]
fn test_classified_entry_is_ciphertext_on_disk_and_plaintext_in_output() {
    let env = Env::new();
    let id = env.add(
        "SECURITY_ALERT",
        "Intercept",
        "Pirates massing near Yela.",
        &["--classification", "classified", "--priority", "4"],
    );

    let stored: (String, i64) = raw_connection(&env.database_path())
        .query_row(
            "SELECT content, is_encrypted FROM logs WHERE id = ?",
            [id],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert_ne!(stored.0, "Pirates massing near Yela.");
    assert_eq!(stored.1, 1);

    let listed = env.run_json(&["list", "--json"]);
    assert_eq!(listed[0]["content"], "Pirates massing near Yela.");
    assert_eq!(listed[0]["classification"], "CLASSIFIED");
    assert_eq!(listed[0]["priority"], 4);

    let found = env.run_json(&["search", "YELA", "--json"]);
    assert_eq!(found.as_array().unwrap().len(), 1);
    assert_eq!(found[0]["id"], id);
}

#[test]
fn test_corrupted_entry_shows_sentinel_without_failing() {
    let env = Env::new();
    let corrupt = env.add(
        "MEDICAL_LOG",
        "Checkup",
        "All clear.",
        &["--classification", "TOP_SECRET"],
    );
    env.add("PERSONAL_LOG", "Diary", "Nice sunset.", &[]);

    raw_connection(&env.database_path())
        .execute("UPDATE logs SET content = 'not-age' WHERE id = ?", [corrupt])
        .unwrap();

    let listed = env.run_json(&["list", "--json"]);
    let entries = listed.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    let broken = entries.iter().find(|e| e["id"] == corrupt).unwrap();
    assert_eq!(broken["content"], "[CLASSIFIED - DECRYPTION FAILED]");

    let shown = env.run_json(&["show", &corrupt.to_string(), "--json"]);
    assert_eq!(shown["title"], "Checkup");
}

#[test]
fn test_list_filters_and_pagination() {
    let env = Env::new();
    env.add("PERSONAL_LOG", "one", "a", &[]);
    env.add("SECURITY_ALERT", "two", "b", &["--priority", "5"]);
    env.add("PERSONAL_LOG", "three", "c", &[]);

    let personal = env.run_json(&["list", "--type", "PERSONAL_LOG", "--json"]);
    assert_eq!(personal.as_array().unwrap().len(), 2);

    let urgent = env.run_json(&["list", "--min-priority", "5", "--json"]);
    assert_eq!(urgent.as_array().unwrap().len(), 1);
    assert_eq!(urgent[0]["title"], "two");

    let page = env.run_json(&["list", "--limit", "1", "--offset", "5", "--json"]);
    assert!(page.as_array().unwrap().is_empty());
}

#[test]
fn test_delete_then_missing() {
    let env = Env::new();
    let id = env.add("PERSONAL_LOG", "Temp", "gone soon", &[]);

    let stdout = env.run_ok(&["delete", &id.to_string()]);
    assert!(stdout.contains(&format!("Deleted entry {}", id)));

    let again = env.run(&["delete", &id.to_string()]);
    assert_eq!(again.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&again.stderr).contains("not found"));

    let show = env.run(&["show", &id.to_string()]);
    assert_eq!(show.status.code(), Some(3));
}

#[test]
fn test_add_rejects_bad_input() {
    let env = Env::new();

    let blank = env.run(&["add", "PERSONAL_LOG", "--title", " ", "--content", "x"]);
    assert_eq!(blank.status.code(), Some(4));

    let priority = env.run(&[
        "add", "PERSONAL_LOG", "--title", "t", "--content", "x", "--priority", "9",
    ]);
    assert_eq!(priority.status.code(), Some(4));

    let unknown = env.run(&["add", "CARGO_MANIFEST", "--title", "t", "--content", "x"]);
    assert_eq!(unknown.status.code(), Some(3));

    let listed = env.run_json(&["list", "--json"]);
    assert!(listed.as_array().unwrap().is_empty());
}

#[test]
fn test_emergency_preset_fills_missing_fields() {
    let env = Env::new();
    let created = env.run_json(&["add", "--emergency", "--json"]);

    assert_eq!(created["log_type"], "MISSION_REPORT");
    assert_eq!(created["title"], "EMERGENCY LOG");
    assert_eq!(created["priority"], 5);
    assert!(created["content"]
        .as_str()
        .unwrap()
        .starts_with("EMERGENCY SITUATION"));
    assert_eq!(created["classification"], "UNCLASSIFIED");
    assert_eq!(created["is_encrypted"], false);
}

#[test]
fn test_explicit_classification_overrides_emergency_preset() {
    let env = Env::new();
    let created = env.run_json(&["add", "--emergency", "--classification", "top-secret", "--json"]);

    assert_eq!(created["title"], "EMERGENCY LOG");
    assert_eq!(created["classification"], "TOP_SECRET");
    assert_eq!(created["is_encrypted"], true);
    assert!(created["content"]
        .as_str()
        .unwrap()
        .starts_with("EMERGENCY SITUATION"));
}

#[test]
fn test_out_of_range_stardate_year_is_invalid_input() {
    let env = Env::new();
    let wrapped = env.run(&["stardate", "--to-earth=-2147483000.01.01"]);
    assert_eq!(wrapped.status.code(), Some(4));

    let five_digit = env.run(&["stardate", "--to-earth", "10000.01.01"]);
    assert_eq!(five_digit.status.code(), Some(4));
}

#[test]
fn test_types_and_template() {
    let env = Env::new();
    let types = env.run_json(&["types", "--json"]);
    assert_eq!(types.as_array().unwrap().len(), 7);

    let template = env.run_ok(&["template", "MEDICAL_LOG"]);
    assert!(template.starts_with("Medical Log Entry:"));

    let missing = env.run(&["template", "CARGO_MANIFEST"]);
    assert_eq!(missing.status.code(), Some(3));
}

#[test]
fn test_stardate_conversion() {
    let env = Env::new();
    let info = env.run_json(&["stardate", "--to-earth", "2954.03.07.09.05", "--json"]);
    assert_eq!(info["stardate"], "2954.03.07.09.05");
    assert_eq!(info["earth_date"], "2024-03-07 09:05:00");
    assert_eq!(info["sc_year"], 2954);
    assert_eq!(info["day_of_year"], 67);

    let zoned = env.run_json(&["stardate", "--zone", "hurston", "--json"]);
    assert_eq!(zoned["ship_time"]["zone"], "Hurston");
    assert!(zoned["ship_time"]["time"].as_str().unwrap().ends_with("+02:00"));

    let bad = env.run(&["stardate", "--to-earth", "2954.13.40"]);
    assert_eq!(bad.status.code(), Some(4));
}

#[test]
fn test_flags_override_default_locations() {
    let env = Env::new();
    let db = env.dir.path().join("elsewhere.db");
    let key = env.dir.path().join("elsewhere.key");
    let db_arg = db.to_string_lossy().to_string();
    let key_arg = key.to_string_lossy().to_string();

    env.run_ok(&[
        "--database", &db_arg, "--key-file", &key_arg, "add", "PERSONAL_LOG", "--title", "t",
        "--content", "x",
    ]);
    assert!(db.exists());
    assert!(key.exists());
    assert!(!env.database_path().exists());

    let status = env.run_json(&["--database", &db_arg, "--key-file", &key_arg, "status", "--json"]);
    assert_eq!(status["entries"], 1);
    assert_eq!(status["categories"], 7);
    assert!(status["key_recipient"].as_str().unwrap().starts_with("age1"));
}
