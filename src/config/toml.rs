//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Router connection section
    #[serde(default)]
    pub router: RouterSection,

    /// Monitoring configuration
    #[serde(default)]
    pub monitor: MonitorSection,
}

/// Router connection section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouterSection {
    /// Router host name or IP address
    pub host: Option<String>,

    /// Router SOAP port
    pub port: Option<u16>,

    /// Router admin username
    pub username: Option<String>,

    /// Router admin password
    pub password: Option<String>,

    /// Session identifier sent with every request
    pub session_id: Option<String>,
}

/// Monitoring configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MonitorSection {
    /// Polling interval in seconds
    pub poll_interval: Option<u64>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# netgear-presence configuration file

[router]
# Router host name or IP address (default: 192.168.1.1)
# host = "192.168.1.1"

# Router SOAP port (default: 5000)
# port = 5000

# Router admin username (default: admin)
# username = "admin"

# Router admin password (required, or pass --password)
# password = "your-password-here"

# Session identifier sent with every request (default: A7D88AE69687E58D9A00)
# session_id = "A7D88AE69687E58D9A00"

[monitor]
# Polling interval in seconds (default: 10)
poll_interval = 10
"#
    .to_string()
}
