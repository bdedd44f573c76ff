//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::model::DashboardData;
use crate::simulation::SimulationSettings;
use crate::source::MockDataSource;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub simulation: SimulationSettings,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Replaces the built-in city metrics when present
    #[serde(default)]
    pub dataset: Option<DashboardData>,
}

/// Mock data source configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_latency")]
    pub latency_ms: u64,
}

fn default_latency() -> u64 {
    1000
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency(),
        }
    }
}

/// Terminal display configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_refresh")]
    pub refresh_ms: u64,

    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_refresh() -> u64 {
    500
}

fn default_color() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            refresh_ms: default_refresh(),
            color: default_color(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("bogor-nexus").join("config.toml")),
            Some(PathBuf::from("./nexus.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Overrides read through `lookup`; unparsable numbers are ignored
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(ms) = lookup("NEXUS_LATENCY_MS").and_then(|v| v.parse().ok()) {
            self.source.latency_ms = ms;
        }
        if let Some(seed) = lookup("NEXUS_SEED").and_then(|v| v.parse().ok()) {
            self.simulation.seed = Some(seed);
        }
        if let Some(ms) = lookup("NEXUS_REFRESH_MS").and_then(|v| v.parse().ok()) {
            self.display.refresh_ms = ms;
        }
        if let Some(level) = lookup("NEXUS_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("NEXUS_LOG_FORMAT") {
            self.logging.format = format;
        }
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.source.latency_ms)
    }

    pub fn refresh(&self) -> Duration {
        Duration::from_millis(self.display.refresh_ms.max(1))
    }

    /// Data source serving the configured dataset
    pub fn data_source(&self) -> MockDataSource {
        MockDataSource::new(self.dataset.unwrap_or_default(), self.latency())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

impl From<ConfigError> for crate::error::NexusError {
    fn from(err: ConfigError) -> Self {
        crate::error::NexusError::Config(err.to_string())
    }
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Bogor Nexus Configuration
#
# Environment variables override these settings:
# - NEXUS_LATENCY_MS
# - NEXUS_SEED
# - NEXUS_REFRESH_MS
# - NEXUS_LOG_LEVEL
# - NEXUS_LOG_FORMAT

[source]
# Simulated fetch latency of the mock data source (ms)
latency_ms = 1000

[simulation]
# Timer periods (ms)
node_activity_ms = 800
data_stream_ms = 200
training_ms = 2000
prediction_ms = 100
resources_ms = 2000
live_log_ms = 1500

# Rolling window sizes
stream_capacity = 20
log_capacity = 50

# Fixed RNG seed for reproducible runs
# seed = 42

[display]
# How often `nexus watch` redraws (ms)
refresh_ms = 500

# ANSI colours in terminal output
color = true

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"

# Replace the built-in city metrics
# [dataset]
# traffic = { congestion = 65, accidents = 3, public_transport = 78 }
# environment = { air_quality = 42, temperature = 26, rainfall = 85 }
# utilities = { power_status = 98, water_supply = 92, internet_status = 95 }
# population = { density = 74, activity = 68 }
"#
    .to_string()
}
