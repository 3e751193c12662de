//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells and clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure (storage, key file, I/O).
    pub const FAILURE: i32 = 1;

    /// Entry or category not found.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;
}

/// Earth date layout stamped on new entries.
pub const EARTH_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Content preview width in list output.
pub const SUMMARY_MAX: usize = 60;
