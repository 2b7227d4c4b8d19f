//! Errors raised while loading or installing a logging configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to load or install a [`LogConfig`](crate::LogConfig).
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// `level` or one of `directives` is not valid filter syntax.
    #[error("invalid log filter `{directive}`: {reason}")]
    InvalidFilter {
        /// The offending filter text.
        directive: String,
        /// Parser message.
        reason: String,
    },

    /// A config document is not valid TOML or not a valid `LogConfig`.
    #[error("failed to parse log config at {path}: {source}")]
    ParseError {
        /// File path, or `<inline>` for in-memory documents.
        path: String,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// The directory for file output could not be created.
    #[error("cannot create log directory {}: {source}", path.display())]
    LogDirectory {
        /// Requested directory.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The subscriber or file appender could not be installed.
    #[error("failed to install log subscriber: {0}")]
    InitError(String),

    /// A config file could not be read.
    #[error("failed to read log config: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for telemetry operations.
pub type TelemetryResult<T> = Result<T, TelemetryError>;
