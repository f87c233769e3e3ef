//! Application configuration.
//!
//! Configuration is read from a TOML file (`second-earth.toml`). Every field
//! has a default, so a missing file simply yields [`AppConfig::default`].
//!
//! ```toml
//! [server]
//! port = 8080
//!
//! [data]
//! root = "/srv/second-earth"
//!
//! [analysis]
//! radar_rings = 6
//!
//! [analysis.density]
//! bins = 40
//! ```

pub mod analysis;

use log::info;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::parsing::DataSource;

pub use analysis::{
    AggregationConfig, AnalysisConfig, DensityConfig, DomainRange, HospitableThresholds,
    SamplerConfig,
};

/// Environment variable pointing at an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "SECOND_EARTH_CONFIG";

/// Root configuration document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub data: DataSettings,
    pub analysis: AnalysisConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Upper bound for `count` on synthetic cohort requests.
    pub max_synthetic_count: usize,
    /// Upper bound for `bins` on density requests.
    pub max_density_bins: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            max_synthetic_count: 1000,
            max_density_bins: 200,
        }
    }
}

/// Where the source CSV files live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    pub root: PathBuf,
    /// Curated per-planet measurements.
    pub selected_file: String,
    pub selected_env: String,
    /// Full archive dump.
    pub raw_file: String,
    pub raw_env: String,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            selected_file: "selected_planets_full.csv".to_string(),
            selected_env: "SECOND_EARTH_SELECTED_CSV".to_string(),
            raw_file: "rawdata.csv".to_string(),
            raw_env: "SECOND_EARTH_RAW_CSV".to_string(),
        }
    }
}

impl DataSettings {
    pub fn selected_source(&self) -> DataSource {
        DataSource::new(&self.root, &self.selected_file).with_env_override(&self.selected_env)
    }

    pub fn raw_source(&self) -> DataSource {
        DataSource::new(&self.root, &self.raw_file).with_env_override(&self.raw_env)
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Find `second-earth.toml` in the standard locations.
    ///
    /// Searches the current directory, `backend/` and the parent directory.
    /// Returns `Ok(None)` when no file exists.
    pub fn from_default_location() -> Result<Option<Self>, ConfigError> {
        let search_paths = [
            PathBuf::from("second-earth.toml"),
            PathBuf::from("backend/second-earth.toml"),
            PathBuf::from("../second-earth.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                info!("Loading configuration from {}", path.display());
                return Self::from_file(&path).map(Some);
            }
        }
        Ok(None)
    }

    /// Resolve the configuration used by the server.
    ///
    /// `SECOND_EARTH_CONFIG` wins when set; otherwise the standard locations
    /// are searched and defaults are used if nothing is found.
    pub fn load() -> Result<Self, ConfigError> {
        let config = match env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::from_file(path.trim())?,
            _ => Self::from_default_location()?.unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.analysis.validate().map_err(ConfigError::Invalid)?;
        if self.server.max_synthetic_count == 0 || self.server.max_density_bins == 0 {
            return Err(ConfigError::Invalid(
                "server limits must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
