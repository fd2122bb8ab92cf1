//! Typed domain error taxonomy.
//!
//! Every failure the engine can report is one of these variants. All are
//! terminal: nothing is retried internally, and validation variants are
//! raised before any connection is attempted.

use thiserror::Error;

/// Closed error taxonomy for selection, credentials, and installation.
#[derive(Debug, Clone, Error)]
pub enum InstallError {
    #[error("No software selected for installation.")]
    EmptySelection,

    #[error("Unknown software names: {}. Valid options: {valid}", .names.join(", "))]
    UnknownSoftware { names: Vec<String>, valid: String },

    #[error("Invalid selection '{0}'. Use numbers separated by commas.")]
    InvalidToken(String),

    #[error("Selection out of range: {index}. Valid range is 1-{max}.")]
    OutOfRange { index: usize, max: usize },

    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("Failed to connect to {host}: {reason}")]
    ConnectionError { host: String, reason: String },

    #[error("Unsupported Linux distribution: no known package manager found.")]
    UnsupportedDistribution,

    #[error("Unsupported package manager: {0}")]
    UnsupportedPackageManager(String),

    #[error("Remote command failed (exit={exit_code}).\nSTDERR: {stderr}\nSTDOUT: {stdout}")]
    CommandExecutionFailed {
        exit_code: i32,
        stdout: String,
        stderr: String,
    },

    /// A broken invariant inside the engine, not a user error. Callers
    /// should report it as a bug, not re-prompt.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl InstallError {
    /// Stable machine-readable code, used by the `--json` error object.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptySelection => "empty_selection",
            Self::UnknownSoftware { .. } => "unknown_software",
            Self::InvalidToken(_) => "invalid_token",
            Self::OutOfRange { .. } => "out_of_range",
            Self::InvalidCredentials(_) => "invalid_credentials",
            Self::ConnectionError { .. } => "connection_error",
            Self::UnsupportedDistribution => "unsupported_distribution",
            Self::UnsupportedPackageManager(_) => "unsupported_package_manager",
            Self::CommandExecutionFailed { .. } => "command_execution_failed",
            Self::Internal(_) => "internal_error",
        }
    }
}
