//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use url::Url;

use crate::router::endpoint_url;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Longest accepted polling interval (one day).
const MAX_POLL_INTERVAL_SECS: u64 = 24 * 60 * 60;

/// Fully validated configuration ready for use by the application.
///
/// This struct represents a complete, validated configuration where all
/// required fields are present and all values have been validated.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// The function validates all inputs and returns errors for invalid configurations.
///
/// Neither `Debug` nor `Display` print the password.
pub struct ValidatedConfig {
    /// Router host name or IP address
    pub host: String,

    /// Router SOAP port
    pub port: u16,

    /// SOAP endpoint built from `host` and `port`
    pub endpoint: Url,

    /// Router admin username
    pub username: String,

    /// Router admin password (required)
    pub password: String,

    /// Session identifier sent with every request
    pub session_id: String,

    /// Polling interval
    pub poll_interval: Duration,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ endpoint: {}, username: {}, password: ***, session_id: {}, \
             poll_interval: {}s }}",
            self.endpoint,
            self.username,
            self.session_id,
            self.poll_interval.as_secs(),
        )
    }
}

impl fmt::Debug for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("endpoint", &self.endpoint.as_str())
            .field("username", &self.username)
            .field("password", &"***")
            .field("session_id", &self.session_id)
            .field("poll_interval", &self.poll_interval)
            .field("verbose", &self.verbose)
            .finish()
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values, which take
    /// precedence over built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The password is missing
    /// - The port is zero
    /// - The host cannot form a valid endpoint URL
    /// - The username or session id is empty
    /// - The poll interval is zero or longer than one day
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let router = toml.map(|t| &t.router);

        let host = cli
            .host
            .as_deref()
            .or_else(|| router.and_then(|r| r.host.as_deref()))
            .unwrap_or(defaults::HOST)
            .trim()
            .to_string();

        let port = Self::resolve_port(cli, toml)?;
        let endpoint = endpoint_url(&host, port).map_err(|e| ConfigError::InvalidHost {
            host: host.clone(),
            reason: e.to_string(),
        })?;

        let username = non_empty(
            field::USERNAME,
            cli.username
                .as_deref()
                .or_else(|| router.and_then(|r| r.username.as_deref()))
                .unwrap_or(defaults::USERNAME),
        )?;

        let password = cli
            .password
            .clone()
            .or_else(|| router.and_then(|r| r.password.clone()))
            .ok_or_else(|| {
                ConfigError::missing(
                    field::PASSWORD,
                    "Use --password or set router.password in config file",
                )
            })?;

        let session_id = non_empty(
            field::SESSION_ID,
            cli.session_id
                .as_deref()
                .or_else(|| router.and_then(|r| r.session_id.as_deref()))
                .unwrap_or(defaults::SESSION_ID),
        )?;

        let poll_interval = Self::resolve_poll_interval(cli, toml)?;

        Ok(Self {
            host,
            port,
            endpoint,
            username,
            password,
            session_id,
            poll_interval,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_port(cli: &Cli, toml: Option<&TomlConfig>) -> Result<u16, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let port = cli
            .port
            .or_else(|| toml.and_then(|t| t.router.port))
            .unwrap_or(defaults::PORT);

        if port == 0 {
            return Err(ConfigError::InvalidPort);
        }

        Ok(port)
    }

    fn resolve_poll_interval(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Duration, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let seconds = cli
            .poll_interval
            .or_else(|| toml.and_then(|t| t.monitor.poll_interval))
            .unwrap_or(defaults::POLL_INTERVAL_SECS);

        if seconds == 0 {
            return Err(ConfigError::InvalidDuration {
                field: field::POLL_INTERVAL,
                reason: "must be greater than 0".to_string(),
            });
        }

        if seconds > MAX_POLL_INTERVAL_SECS {
            return Err(ConfigError::InvalidDuration {
                field: field::POLL_INTERVAL,
                reason: format!("must be at most {MAX_POLL_INTERVAL_SECS} seconds"),
            });
        }

        Ok(Duration::from_secs(seconds))
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

fn non_empty(field: &'static str, value: &str) -> Result<String, ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::EmptyValue { field });
    }
    Ok(value.to_string())
}
