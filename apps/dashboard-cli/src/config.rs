//! Optional TOML configuration for the `scros` binary
//!
//! Every section and field may be omitted. Command-line flags take
//! precedence over anything set here.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use dashboard_core::pages::maintenance::DEFAULT_THRESHOLD;
use dashboard_core::Settings;
use serde::{Deserialize, Serialize};

/// How pages are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub maintenance: MaintenanceConfig,
    pub fixtures: FixturesConfig,
    /// Initial admin settings before any `--toggle`
    pub admin: Settings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_true")]
    pub show_payment_history: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            show_payment_history: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceConfig {
    #[serde(default = "default_true")]
    pub ai_enabled: bool,
    /// Prediction confidence threshold in percent
    #[serde(default = "default_threshold")]
    pub threshold: u8,
}

impl Default for MaintenanceConfig {
    fn default() -> Self {
        Self {
            ai_enabled: true,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FixturesConfig {
    /// Fixture file to load instead of the bundled data
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}

fn default_threshold() -> u8 {
    DEFAULT_THRESHOLD
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse configuration from a TOML string
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(s).context("Failed to parse TOML configuration")?;
        Ok(config)
    }

    /// The file at `path` if given, otherwise built-in defaults
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}
