use serde::{Deserialize, Serialize};

use super::view::DatasetInfo;

/// Bulk-density class of a planet.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanetClass {
    Terrestrial,
    Gaseous,
}

/// Histogram bin over density (g/cm³), `[bin_start, bin_end)`; the last bin
/// also contains `bin_end`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DensityBin {
    pub bin_label: String,
    pub bin_start: f64,
    pub bin_end: f64,
    pub terrestrial: usize,
    pub gaseous: usize,
}

impl DensityBin {
    pub fn total(&self) -> usize {
        self.terrestrial + self.gaseous
    }
}

/// Clamped densities per class, for charts that bin on their own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DensitySeries {
    pub terrestrial: Vec<f64>,
    pub gaseous: Vec<f64>,
}

impl DensitySeries {
    pub fn len(&self) -> usize {
        self.terrestrial.len() + self.gaseous.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terrestrial.is_empty() && self.gaseous.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityHistogram {
    pub bins: Vec<DensityBin>,
    pub series: DensitySeries,
    pub threshold: f64,
    /// Rows without a usable mass/radius pair.
    pub skipped: usize,
}

/// Density histogram page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityData {
    pub dataset: DatasetInfo,
    pub histogram: DensityHistogram,
}

/// Query options for the density histogram.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DensityQuery {
    #[serde(default)]
    pub bins: Option<usize>,
}

pub const DENSITY_PATH: &str = "/density";
