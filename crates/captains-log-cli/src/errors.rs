//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use captains_log_core::{LogError, StardateError, ValidationError};

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Entry or category not found
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => write!(f, "{}\n{}", message, hint),
            CliError::InvalidInput(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        CliError::InvalidInput(err.to_string())
    }
}

impl From<StardateError> for CliError {
    fn from(err: StardateError) -> Self {
        CliError::InvalidInput(err.to_string())
    }
}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
        }
    }
}

/// Map any error reaching `main` to its exit code.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    match err.downcast_ref::<LogError>() {
        Some(LogError::Validation(_)) | Some(LogError::Stardate(_)) => exit_codes::INVALID_INPUT,
        _ => exit_codes::FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let not_found = anyhow::Error::new(CliError::not_found("Entry 7 not found", "Hint: x"));
        assert_eq!(exit_code_for(&not_found), exit_codes::NOT_FOUND);

        let invalid = anyhow::Error::new(CliError::from(ValidationError::EmptyTitle));
        assert_eq!(exit_code_for(&invalid), exit_codes::INVALID_INPUT);

        let storage = anyhow::Error::new(LogError::Storage("disk full".to_string()));
        assert_eq!(exit_code_for(&storage), exit_codes::FAILURE);
    }

    #[test]
    fn test_not_found_display_includes_hint() {
        let err = CliError::not_found("Entry 7 not found", "Hint: run `captains-log list`");
        assert_eq!(
            err.to_string(),
            "Entry 7 not found\nHint: run `captains-log list`"
        );
    }
}
