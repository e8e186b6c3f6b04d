use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::domain::value_objects::scoring::ScoringWeights;

/// Top-level application configuration loaded from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub runner: RunnerConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub probes: ProbesConfig,
    #[serde(default)]
    pub delivery: DeliveryConfig,
}

/// Probe execution settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Per-probe deadline; an overrun becomes a terminal FAIL check.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

/// Per-severity score weights, each a fraction of one point per check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default = "default_pass_weight")]
    pub pass: f64,
    #[serde(default = "default_warn_weight")]
    pub warn: f64,
    #[serde(default)]
    pub skip: f64,
    #[serde(default)]
    pub fail: f64,
}

/// Probe definitions: HTTP endpoints, disk space, required environment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProbesConfig {
    #[serde(default)]
    pub http: Vec<HttpProbeConfig>,
    #[serde(default)]
    pub disk: Option<DiskProbeConfig>,
    #[serde(default)]
    pub env: Vec<EnvProbeConfig>,
}

/// One HTTP reachability probe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpProbeConfig {
    pub name: String,
    pub url: String,
    /// Responses slower than this are reported as WARN.
    #[serde(default = "default_warn_ms")]
    pub warn_ms: u64,
}

/// Free-space probe over all real mounted filesystems.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiskProbeConfig {
    #[serde(default = "default_disk_name")]
    pub name: String,
    #[serde(default = "default_min_free")]
    pub min_free_percent: f64,
}

/// One required-environment-variable probe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvProbeConfig {
    pub name: String,
    pub var: String,
}

/// Delivery channels for finished reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryConfig {
    #[serde(default = "default_true")]
    pub terminal: bool,
    #[serde(default)]
    pub log_file: Option<String>,
    #[serde(default)]
    pub webhook_url: Option<String>,
}

// --- Defaults ---

const fn default_timeout() -> u64 {
    10
}

const fn default_pass_weight() -> f64 {
    1.0
}

const fn default_warn_weight() -> f64 {
    0.5
}

const fn default_warn_ms() -> u64 {
    1000
}

fn default_disk_name() -> String {
    "disk-space".into()
}

const fn default_min_free() -> f64 {
    10.0
}

const fn default_true() -> bool {
    true
}

// --- Default impls ---

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            pass: default_pass_weight(),
            warn: default_warn_weight(),
            skip: 0.0,
            fail: 0.0,
        }
    }
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            terminal: default_true(),
            log_file: None,
            webhook_url: None,
        }
    }
}

// --- AppConfig methods ---

impl AppConfig {
    /// Load config from default path or create default config file
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined,
    /// the file cannot be read, or the TOML content is invalid.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_or_create(&path)
    }

    /// Load from a specific path, or create a default config file if missing
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is invalid,
    /// or the default config file cannot be written.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Load from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML content is invalid.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).context("Failed to read config file")?;
        toml::from_str(&content).context("Failed to parse config file")
    }

    /// Save config to a specific path, creating parent directories if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created,
    /// serialization fails, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content).context("Failed to write config file")?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("vitals").join("config.toml"))
    }
}

impl From<&ScoringConfig> for ScoringWeights {
    fn from(config: &ScoringConfig) -> Self {
        Self {
            pass: config.pass,
            warn: config.warn,
            skip: config.skip,
            fail: config.fail,
        }
    }
}
