//! Error types and handling for the CLI
//!
//! This module provides error types and utilities for handling
//! various failure modes in the CLI application.

use std::io;
use std::path::PathBuf;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error from profile-core library
    #[error("Core error: {0}")]
    Core(#[from] profile_core::Error),

    /// File not found
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Error carrying ad-hoc context
    #[error("{0:#}")]
    Context(#[from] anyhow::Error),

    /// Generic error with message
    #[error("{message}")]
    Other { message: String },
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a generic error with message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,
            Self::Core(_) => 2,
            Self::FileNotFound { .. } => 3,
            Self::Config(_) => 5,
            Self::Json(_) => 12,
            Self::Yaml(_) => 13,
            Self::Context(_) | Self::Other { .. } => 99,
        }
    }
}

/// Format an error for display to the user
pub fn format_error(error: &Error, use_color: bool) -> String {
    if use_color {
        use colored::Colorize;
        format!("{} {}", "Error:".red().bold(), error)
    } else {
        format!("Error: {}", error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_exit_codes() {
        assert_eq!(Error::config("bad").exit_code(), 5);
        assert_eq!(Error::other("x").exit_code(), 99);
        assert_eq!(
            Error::FileNotFound {
                path: PathBuf::from("a.json")
            }
            .exit_code(),
            3
        );
    }

    #[test]
    fn test_format_error_plain() {
        let err = Error::config("unknown output format 'xml'");
        assert_eq!(
            format_error(&err, false),
            "Error: Configuration error: unknown output format 'xml'"
        );
    }

    #[test]
    fn test_context_error_keeps_chain() {
        let result: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        let err: Error = result.context("Failed to write config").unwrap_err().into();
        assert_eq!(err.to_string(), "Failed to write config: denied");
    }

    #[test]
    fn test_core_error_conversion() {
        let core = profile_core::UserOptions::from_json_str("[").unwrap_err();
        let err: Error = core.into();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().starts_with("Core error: JSON error"));
    }
}
