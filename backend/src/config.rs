//! Dashboard configuration file support.
//!
//! This module reads `dashboard.toml`. Every section is optional; anything
//! left out falls back to the defaults documented on each field.
//!
//! ```toml
//! [feed]
//! type = "json"
//! path = "data/farm.json"
//! refresh_interval_secs = 30
//!
//! [overview]
//! representative = "average"
//!
//! [thresholds.health]
//! ammonia_warning_ppm = 10.0
//! ammonia_critical_ppm = 15.0
//! humidity_min_pct = 40.0
//! humidity_max_pct = 70.0
//!
//! [thresholds.disease_risk]
//! ammonia_moderate_ppm = 10.0
//! ammonia_high_ppm = 20.0
//! humidity_moderate_pct = 65.0
//! humidity_high_pct = 75.0
//!
//! [thresholds.alerts]
//! ammonia_critical_ppm = 11.0
//!
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "DASHBOARD_CONFIG";

/// Dashboard configuration from file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub feed: FeedSettings,
    #[serde(default)]
    pub overview: OverviewSettings,
    #[serde(default)]
    pub thresholds: ThresholdConfig,
    #[serde(default)]
    pub server: ServerSettings,
}

/// Upstream feed settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedSettings {
    /// "mock", "local" or "json"
    #[serde(rename = "type", default = "default_feed_type")]
    pub feed_type: String,
    /// Farm document path, required by the json feed
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Background refresh period; 0 disables it
    #[serde(default)]
    pub refresh_interval_secs: u64,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            feed_type: default_feed_type(),
            path: None,
            refresh_interval_secs: 0,
        }
    }
}

fn default_feed_type() -> String {
    "mock".to_string()
}

/// How the overview picks the reading shown on the environment card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepresentativeMode {
    /// The first coop in display order
    #[default]
    First,
    /// Farm-wide mean of every coop
    Average,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverviewSettings {
    #[serde(default)]
    pub representative: RepresentativeMode,
}

/// All evaluator thresholds. Comparisons are strict (`>`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThresholdConfig {
    #[serde(default)]
    pub health: HealthThresholds,
    #[serde(default)]
    pub disease_risk: DiseaseRiskThresholds,
    #[serde(default)]
    pub alerts: AlertThresholds,
}

/// Farm health thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthThresholds {
    /// Any coop above this downgrades Good to Fair (default 10 ppm)
    pub ammonia_warning_ppm: f64,
    /// Any coop above this downgrades one more level (default 15 ppm)
    pub ammonia_critical_ppm: f64,
    /// Lower bound of the healthy humidity band (default 40 %)
    pub humidity_min_pct: f64,
    /// Upper bound of the healthy humidity band (default 70 %)
    pub humidity_max_pct: f64,
}

impl Default for HealthThresholds {
    fn default() -> Self {
        Self {
            ammonia_warning_ppm: 10.0,
            ammonia_critical_ppm: 15.0,
            humidity_min_pct: 40.0,
            humidity_max_pct: 70.0,
        }
    }
}

/// Disease risk thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiseaseRiskThresholds {
    /// Default 10 ppm
    pub ammonia_moderate_ppm: f64,
    /// Default 20 ppm
    pub ammonia_high_ppm: f64,
    /// Default 65 %
    pub humidity_moderate_pct: f64,
    /// Default 75 %
    pub humidity_high_pct: f64,
}

impl Default for DiseaseRiskThresholds {
    fn default() -> Self {
        Self {
            ammonia_moderate_ppm: 10.0,
            ammonia_high_ppm: 20.0,
            humidity_moderate_pct: 65.0,
            humidity_high_pct: 75.0,
        }
    }
}

/// Alert thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertThresholds {
    /// A coop above this raises a critical "High Ammonia Levels" alert (default 11 ppm)
    pub ammonia_critical_ppm: f64,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            ammonia_critical_ppm: 11.0,
        }
    }
}

/// HTTP server settings. `HOST` and `PORT` environment variables win.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl DashboardConfig {
    /// Parse and validate configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> DashboardResult<Self> {
        let config: DashboardConfig = toml::from_str(content).map_err(|e| {
            DashboardError::Configuration(format!("Failed to parse config file: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(DashboardConfig)` if successful
    /// * `Err(DashboardError::Configuration)` if the file cannot be read, parsed or validated
    pub fn from_file<P: AsRef<Path>>(path: P) -> DashboardResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            DashboardError::Configuration(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `dashboard.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> DashboardResult<Self> {
        match Self::default_location() {
            Some(path) => {
                info!("Loading configuration from {}", path.display());
                Self::from_file(&path)
            }
            None => Err(DashboardError::Configuration(
                "No dashboard.toml found in standard locations".to_string(),
            )),
        }
    }

    fn default_location() -> Option<PathBuf> {
        [
            PathBuf::from("dashboard.toml"),
            PathBuf::from("backend/dashboard.toml"),
            PathBuf::from("../dashboard.toml"),
        ]
        .into_iter()
        .find(|path| path.exists())
    }

    /// Load from `DASHBOARD_CONFIG` if set, otherwise from the default
    /// location, otherwise fall back to defaults.
    ///
    /// An explicitly named file that fails to load is an error; a missing
    /// default file is not.
    pub fn load() -> DashboardResult<Self> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            info!("Loading configuration from {} ({})", path, CONFIG_PATH_ENV);
            return Self::from_file(path);
        }

        if Self::default_location().is_some() {
            return Self::from_default_location();
        }
        warn!("No dashboard.toml found in standard locations - using defaults");
        Ok(Self::default())
    }

    /// Check that thresholds are finite and ordered.
    pub fn validate(&self) -> DashboardResult<()> {
        let health = &self.thresholds.health;
        let risk = &self.thresholds.disease_risk;
        let alerts = &self.thresholds.alerts;

        let values = [
            ("health.ammonia_warning_ppm", health.ammonia_warning_ppm),
            ("health.ammonia_critical_ppm", health.ammonia_critical_ppm),
            ("health.humidity_min_pct", health.humidity_min_pct),
            ("health.humidity_max_pct", health.humidity_max_pct),
            ("disease_risk.ammonia_moderate_ppm", risk.ammonia_moderate_ppm),
            ("disease_risk.ammonia_high_ppm", risk.ammonia_high_ppm),
            ("disease_risk.humidity_moderate_pct", risk.humidity_moderate_pct),
            ("disease_risk.humidity_high_pct", risk.humidity_high_pct),
            ("alerts.ammonia_critical_ppm", alerts.ammonia_critical_ppm),
        ];
        if let Some((name, value)) = values.iter().find(|(_, v)| !v.is_finite()) {
            return Err(DashboardError::Configuration(format!(
                "thresholds.{} must be a finite number, got {}",
                name, value
            )));
        }

        let ordered = [
            (
                "health.ammonia_warning_ppm",
                health.ammonia_warning_ppm,
                "health.ammonia_critical_ppm",
                health.ammonia_critical_ppm,
            ),
            (
                "health.humidity_min_pct",
                health.humidity_min_pct,
                "health.humidity_max_pct",
                health.humidity_max_pct,
            ),
            (
                "disease_risk.ammonia_moderate_ppm",
                risk.ammonia_moderate_ppm,
                "disease_risk.ammonia_high_ppm",
                risk.ammonia_high_ppm,
            ),
            (
                "disease_risk.humidity_moderate_pct",
                risk.humidity_moderate_pct,
                "disease_risk.humidity_high_pct",
                risk.humidity_high_pct,
            ),
        ];
        for (low_name, low, high_name, high) in ordered {
            if low > high {
                return Err(DashboardError::Configuration(format!(
                    "thresholds.{} ({}) must not exceed thresholds.{} ({})",
                    low_name, low, high_name, high
                )));
            }
        }

        Ok(())
    }
}
