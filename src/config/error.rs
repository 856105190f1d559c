//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// Covers errors from parsing, validation, and file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Missing required field that must be provided by CLI or config file.
    #[error("Missing required field: {field}. {hint}")]
    MissingRequired {
        /// Name of the missing field
        field: &'static str,
        /// Hint for how to provide the value
        hint: &'static str,
    },

    /// Host that cannot form a router endpoint URL.
    #[error("Invalid router host '{host}': {reason}")]
    InvalidHost {
        /// The invalid host string
        host: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Port zero.
    #[error("Invalid router port: must be greater than 0")]
    InvalidPort,

    /// Empty string where a value is needed.
    #[error("Invalid value for {field}: must not be empty")]
    EmptyValue {
        /// Name of the field
        field: &'static str,
    },

    /// Invalid duration value (zero or too large).
    #[error("Invalid duration for {field}: {reason}")]
    InvalidDuration {
        /// Name of the field
        field: &'static str,
        /// Reason for invalidity
        reason: String,
    },
}

/// Well-known field names for `MissingRequired` and `EmptyValue` errors.
///
/// Use these constants for compile-time safety when matching field names.
pub mod field {
    /// The router host field.
    pub const HOST: &str = "host";
    /// The router username field.
    pub const USERNAME: &str = "username";
    /// The router password field.
    pub const PASSWORD: &str = "password";
    /// The session identifier field.
    pub const SESSION_ID: &str = "session_id";
    /// The polling interval field.
    pub const POLL_INTERVAL: &str = "poll_interval";
}

impl ConfigError {
    /// Creates a `MissingRequired` error for a required field.
    #[must_use]
    pub const fn missing(field: &'static str, hint: &'static str) -> Self {
        Self::MissingRequired { field, hint }
    }
}
