//! Configuration loading and typed config structures for the Outpost server.
//!
//! The canonical configuration lives in `outpost-config.yaml` at the
//! project root. This module defines strongly-typed structs that mirror
//! the YAML structure and provides a loader that reads the file. Every
//! field has a serde default, so a missing file or an empty document
//! yields the canonical starting values (100 minerals, 50 energy, the
//! fixed action cost table).

use std::path::Path;

use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration for the Outpost server.
///
/// Mirrors the structure of `outpost-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OutpostConfig {
    /// Economy parameters (starting counters, action costs, placement).
    #[serde(default)]
    pub economy: EconomyConfig,

    /// HTTP transport settings (bind address).
    #[serde(default)]
    pub transport: TransportConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl OutpostConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override YAML values for the transport:
    /// `OUTPOST_HOST` overrides `transport.host` and `OUTPOST_PORT`
    /// overrides `transport.port`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = serde_yml::from_str(&contents)?;
        config.transport.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.transport.apply_env_overrides();
        Ok(config)
    }
}

/// Economy configuration.
///
/// The defaults encode the fixed effect table: `build` costs 10
/// minerals, `upgrade` costs 5 energy, `research` costs 5 of each, and
/// new structures land within 2.0 units of the origin on both axes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EconomyConfig {
    /// Mineral counter value at process start.
    #[serde(default = "default_starting_minerals")]
    pub starting_minerals: i64,

    /// Energy counter value at process start.
    #[serde(default = "default_starting_energy")]
    pub starting_energy: i64,

    /// Minerals debited by a `build` action.
    #[serde(default = "default_build_mineral_cost")]
    pub build_mineral_cost: u32,

    /// Energy debited by an `upgrade` action.
    #[serde(default = "default_upgrade_energy_cost")]
    pub upgrade_energy_cost: u32,

    /// Minerals debited by a `research` action.
    #[serde(default = "default_research_mineral_cost")]
    pub research_mineral_cost: u32,

    /// Energy debited by a `research` action.
    #[serde(default = "default_research_energy_cost")]
    pub research_energy_cost: u32,

    /// Half-width of the square placement region. New structures get
    /// coordinates in `[-half_range, half_range]` on both axes.
    #[serde(default = "default_placement_half_range")]
    pub placement_half_range: f64,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            starting_minerals: default_starting_minerals(),
            starting_energy: default_starting_energy(),
            build_mineral_cost: default_build_mineral_cost(),
            upgrade_energy_cost: default_upgrade_energy_cost(),
            research_mineral_cost: default_research_mineral_cost(),
            research_energy_cost: default_research_energy_cost(),
            placement_half_range: default_placement_half_range(),
        }
    }
}

/// HTTP transport configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TransportConfig {
    /// The host address to bind to (e.g. `0.0.0.0`).
    #[serde(default = "default_host")]
    pub host: String,

    /// The TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl TransportConfig {
    /// Override transport settings with environment variables when set.
    ///
    /// This allows a deployment to set the bind address via env vars
    /// without modifying the YAML config file. An unparsable
    /// `OUTPOST_PORT` is ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("OUTPOST_HOST") {
            self.host = val;
        }
        if let Ok(val) = std::env::var("OUTPOST_PORT")
            && let Ok(port) = val.parse::<u16>()
        {
            self.port = port;
        }
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

const fn default_starting_minerals() -> i64 {
    100
}

const fn default_starting_energy() -> i64 {
    50
}

const fn default_build_mineral_cost() -> u32 {
    10
}

const fn default_upgrade_energy_cost() -> u32 {
    5
}

const fn default_research_mineral_cost() -> u32 {
    5
}

const fn default_research_energy_cost() -> u32 {
    5
}

const fn default_placement_half_range() -> f64 {
    2.0
}

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

const fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_owned()
}
