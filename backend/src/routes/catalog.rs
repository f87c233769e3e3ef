use serde::{Deserialize, Serialize};

use super::view::DatasetInfo;
use crate::models::{MetricKey, PlanetProfile};

/// Display metadata for one metric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricDescriptor {
    pub key: MetricKey,
    pub label: String,
    pub unit: String,
}

impl From<MetricKey> for MetricDescriptor {
    fn from(key: MetricKey) -> Self {
        Self {
            key,
            label: key.label().to_string(),
            unit: key.unit().to_string(),
        }
    }
}

/// Query options for the planet catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogQuery {
    /// Case-insensitive substring of the planet name.
    #[serde(default)]
    pub q: Option<String>,
    /// Metric whose median orders the result (radius when absent).
    #[serde(default)]
    pub sort: Option<MetricKey>,
    /// Keep only planets passing the habitability screen.
    #[serde(default)]
    pub hospitable: bool,
}

/// Planet catalog page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetCatalogData {
    pub dataset: DatasetInfo,
    pub metrics: Vec<MetricDescriptor>,
    pub planets: Vec<PlanetProfile>,
    /// Profiles before query filtering.
    pub total_count: usize,
    pub hospitable_count: usize,
}

/// Detail view of a single planet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetDetailData {
    pub dataset: DatasetInfo,
    pub planet: PlanetProfile,
    pub hospitable: bool,
}

pub const PLANETS_PATH: &str = "/planets";
pub const PLANET_PATH: &str = "/planets/{name}";
