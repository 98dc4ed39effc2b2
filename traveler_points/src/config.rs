//! Map configuration file support.
//!
//! Settings come from a `traveler_points.toml` file when one is found, fall
//! back to built-in defaults otherwise, and can be overridden per process
//! through environment variables.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::algorithms::{DestinationAggregator, StayLengthEstimator, AVG_STAY_DAYS};
use crate::error::{TravelerError, TravelerResult};
use crate::services::selection::HoverSweep;

/// Default entries endpoint; the traveler id is appended.
pub const DEFAULT_API_URL: &str = "https://grandtour.herokuapp.com/api/entries/";

/// Complete map configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    #[serde(default)]
    pub estimator: EstimatorSettings,
    #[serde(default)]
    pub scale: ScaleSettings,
    #[serde(default)]
    pub sweep: SweepSettings,
    #[serde(default)]
    pub api: ApiSettings,
}

/// Stay-length estimator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatorSettings {
    #[serde(default = "default_average_stay_days")]
    pub average_stay_days: f64,
}

/// Circle radius range, in view pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleSettings {
    #[serde(default = "default_min_radius")]
    pub min_radius: f64,
    #[serde(default = "default_max_radius")]
    pub max_radius: f64,
}

/// Initial hover sweep timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepSettings {
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

/// Remote entries API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_average_stay_days() -> f64 {
    AVG_STAY_DAYS
}

fn default_min_radius() -> f64 {
    2.0
}

fn default_max_radius() -> f64 {
    12.0
}

fn default_interval_ms() -> u64 {
    150
}

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for EstimatorSettings {
    fn default() -> Self {
        Self {
            average_stay_days: default_average_stay_days(),
        }
    }
}

impl Default for ScaleSettings {
    fn default() -> Self {
        Self {
            min_radius: default_min_radius(),
            max_radius: default_max_radius(),
        }
    }
}

impl Default for SweepSettings {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
        }
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl MapConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(MapConfig)` if the file was read, parsed and validated
    /// * `Err(TravelerError)` otherwise
    pub fn from_file<P: AsRef<Path>>(path: P) -> TravelerResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| TravelerError::io(path, e))?;
        let config = Self::from_toml_str(&content)?;
        debug!("Loaded map configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> TravelerResult<Self> {
        let config: MapConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the first standard location that exists.
    ///
    /// Searches for `traveler_points.toml` in:
    /// 1. Current directory
    /// 2. `config/` directory
    /// 3. Parent directory
    ///
    /// Returns `Ok(None)` if no file is found.
    pub fn from_default_location() -> TravelerResult<Option<Self>> {
        let search_paths = [
            PathBuf::from("traveler_points.toml"),
            PathBuf::from("config/traveler_points.toml"),
            PathBuf::from("../traveler_points.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path).map(Some);
            }
        }

        Ok(None)
    }

    /// Standard file if present, defaults otherwise, then environment overrides.
    pub fn load() -> TravelerResult<Self> {
        let mut config = match env::var("TRAVELER_POINTS_CONFIG") {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::from_default_location()?.unwrap_or_default(),
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply overrides from environment variables.
    ///
    /// # Environment Variables
    /// - `TRAVELER_POINTS_AVG_STAY_DAYS`: average stay used for unbounded visits
    /// - `TRAVELER_POINTS_API_URL`: entries API base URL
    /// - `TRAVELER_POINTS_SWEEP_MS`: hover sweep step interval
    pub fn apply_env_overrides(&mut self) -> TravelerResult<()> {
        if let Ok(value) = env::var("TRAVELER_POINTS_AVG_STAY_DAYS") {
            self.estimator.average_stay_days = value.trim().parse().map_err(|_| {
                TravelerError::InvalidConfig(format!(
                    "TRAVELER_POINTS_AVG_STAY_DAYS must be a number, got '{}'",
                    value
                ))
            })?;
        }
        if let Ok(value) = env::var("TRAVELER_POINTS_API_URL") {
            self.api.base_url = value;
        }
        if let Ok(value) = env::var("TRAVELER_POINTS_SWEEP_MS") {
            self.sweep.interval_ms = value.trim().parse().map_err(|_| {
                TravelerError::InvalidConfig(format!(
                    "TRAVELER_POINTS_SWEEP_MS must be a whole number of milliseconds, got '{}'",
                    value
                ))
            })?;
        }
        self.validate()
    }

    pub fn validate(&self) -> TravelerResult<()> {
        let average = self.estimator.average_stay_days;
        if !average.is_finite() || average <= 0.0 {
            return Err(TravelerError::InvalidConfig(format!(
                "estimator.average_stay_days must be positive, got {}",
                average
            )));
        }
        let ScaleSettings {
            min_radius,
            max_radius,
        } = self.scale;
        if !(min_radius.is_finite() && max_radius.is_finite())
            || min_radius < 0.0
            || max_radius < min_radius
        {
            return Err(TravelerError::InvalidConfig(format!(
                "scale must satisfy 0 <= min_radius <= max_radius, got {}..{}",
                min_radius, max_radius
            )));
        }
        if self.sweep.interval_ms == 0 {
            return Err(TravelerError::InvalidConfig(
                "sweep.interval_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn estimator(&self) -> StayLengthEstimator {
        StayLengthEstimator::new(self.estimator.average_stay_days)
    }

    pub fn aggregator(&self) -> DestinationAggregator {
        DestinationAggregator::new(self.estimator())
    }

    /// Initial hover sweep over `len` visits at the configured pace.
    pub fn hover_sweep(&self, len: usize) -> HoverSweep {
        HoverSweep::with_interval(len, Duration::from_millis(self.sweep.interval_ms))
    }
}
