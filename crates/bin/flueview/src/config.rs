//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `flueview.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::time::Duration;

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Polling settings.
    pub monitor: MonitorConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Polling configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Status endpoint URL.
    pub endpoint: String,
    /// Poll period in milliseconds.
    pub poll_interval_ms: u64,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `flueview.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if
    /// the resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("flueview.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("FLUEVIEW_ENDPOINT") {
            self.monitor.endpoint = val;
        }
        if let Ok(val) = std::env::var("FLUEVIEW_POLL_INTERVAL_MS") {
            if let Ok(period) = val.parse() {
                self.monitor.poll_interval_ms = period;
            }
        }
        if let Ok(val) = std::env::var("FLUEVIEW_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.monitor.endpoint.is_empty() {
            return Err(ConfigError::Validation(
                "endpoint must not be empty".to_string(),
            ));
        }
        if self.monitor.poll_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "poll interval must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// The poll period as a [`Duration`].
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.monitor.poll_interval_ms)
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:5000/temperature_data".to_string(),
            poll_interval_ms: 2000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "flueview=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(
            config.monitor.endpoint,
            "http://127.0.0.1:5000/temperature_data"
        );
        assert_eq!(config.monitor.poll_interval_ms, 2000);
        assert_eq!(config.logging.filter, "flueview=info");
    }

    #[test]
    fn should_parse_minimal_toml() {
        let toml = "";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.monitor.poll_interval_ms, 2000);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [monitor]
            endpoint = 'http://furnace.local:5000/temperature_data'
            poll_interval_ms = 500

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(
            config.monitor.endpoint,
            "http://furnace.local:5000/temperature_data"
        );
        assert_eq!(config.monitor.poll_interval_ms, 500);
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [monitor]
            poll_interval_ms = 1000
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.monitor.poll_interval_ms, 1000);
        assert_eq!(
            config.monitor.endpoint,
            "http://127.0.0.1:5000/temperature_data"
        );
        assert_eq!(config.logging.filter, "flueview=info");
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.monitor.poll_interval_ms, 2000);
    }

    #[test]
    fn should_reject_empty_endpoint() {
        let mut config = Config::default();
        config.monitor.endpoint = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_zero_poll_interval() {
        let mut config = Config::default();
        config.monitor.poll_interval_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_accept_defaults_as_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_convert_poll_interval_to_duration() {
        let config = Config::default();
        assert_eq!(config.poll_interval(), Duration::from_millis(2000));
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
