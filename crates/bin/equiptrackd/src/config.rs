//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `equiptrack.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

use equiptrack_app::clock::ReferenceClock;
use equiptrack_domain::freshness::{DEFAULT_WINDOW_DAYS, FreshnessRule, default_reference_date};
use equiptrack_domain::time::{self, Date};

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Freshness rule settings.
    pub freshness: FreshnessConfig,
    /// Store settings.
    pub store: StoreConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Source of "today" for the freshness rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockKind {
    /// Use `reference_date`.
    #[default]
    Fixed,
    /// Use the current UTC date.
    System,
}

/// Freshness rule configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct FreshnessConfig {
    pub clock: ClockKind,
    /// Day used as "today" when `clock` is `fixed`.
    pub reference_date: Date,
    /// Maximum age in days of the last cleaning for `Active` equipment.
    pub window_days: u32,
}

/// Store configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Start with the demo data set instead of an empty store.
    pub seed: bool,
}

impl Config {
    /// Load configuration from `equiptrack.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("equiptrack.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
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

    fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(val) = lookup("EQUIPTRACK_HOST") {
            self.server.host = val;
        }
        if let Some(val) = lookup("EQUIPTRACK_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = lookup("EQUIPTRACK_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Some(val) = lookup("EQUIPTRACK_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("EQUIPTRACK_REFERENCE_DATE") {
            self.freshness.reference_date = time::parse_date(&val)
                .map_err(|err| ConfigError::Validation(err.to_string()))?;
            self.freshness.clock = ClockKind::Fixed;
        }
        if let Some(val) = lookup("EQUIPTRACK_SEED") {
            self.store.seed = match val.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(ConfigError::Validation(format!(
                        "EQUIPTRACK_SEED must be a boolean, got {val:?}"
                    )));
                }
            };
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.freshness.window_days == 0 {
            return Err(ConfigError::Validation(
                "freshness window must be at least one day".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Return the clock the services judge freshness against.
    #[must_use]
    pub fn clock(&self) -> ReferenceClock {
        match self.freshness.clock {
            ClockKind::Fixed => ReferenceClock::Fixed(self.freshness.reference_date),
            ClockKind::System => ReferenceClock::System,
        }
    }

    /// Return the configured freshness rule.
    #[must_use]
    pub fn freshness_rule(&self) -> FreshnessRule {
        FreshnessRule::new(self.freshness.window_days)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "equiptrackd=info,equiptrack=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for FreshnessConfig {
    fn default() -> Self {
        Self {
            clock: ClockKind::Fixed,
            reference_date: default_reference_date(),
            window_days: DEFAULT_WINDOW_DAYS,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { seed: true }
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
