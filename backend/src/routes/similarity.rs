use serde::{Deserialize, Serialize};

use super::view::DatasetInfo;
use crate::models::{MetricKey, PerMetric};

/// One radar axis: how far a planet sits from the reference on one metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisDifference {
    pub metric: MetricKey,
    pub label: String,
    /// The planet's median, in the metric's own unit.
    pub raw: f64,
    pub normalized: f64,
    pub reference_normalized: f64,
    /// `|normalized - reference_normalized|`, the value drawn on the radar.
    pub difference: f64,
}

/// A planet's position in the Earth-similarity ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPlanet {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    pub axes: Vec<AxisDifference>,
    /// Euclidean distance between normalized vectors; lower is closer.
    pub score: f64,
    /// Concentric ring of the explorer layout (0 is innermost).
    pub ring: usize,
}

/// Earth-similarity page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityData {
    pub dataset: DatasetInfo,
    pub reference: PerMetric<f64>,
    pub ring_count: usize,
    pub planets: Vec<RankedPlanet>,
    /// Planets left out because at least one median is missing.
    pub excluded: Vec<String>,
}

pub const SIMILARITY_PATH: &str = "/similarity";
