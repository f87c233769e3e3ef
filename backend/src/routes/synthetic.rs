use serde::{Deserialize, Serialize};

use crate::models::SyntheticPlanet;

/// Query options for synthetic cohort generation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyntheticQuery {
    #[serde(default)]
    pub count: Option<usize>,
    /// Seed for reproducible cohorts.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// A generated cohort of planets similar to one source planet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntheticCohortData {
    pub source: String,
    pub count: usize,
    pub planets: Vec<SyntheticPlanet>,
}

pub const SYNTHETIC_PATH: &str = "/planets/{name}/synthetic";
pub const SYNTHETIC_CSV_PATH: &str = "/planets/{name}/synthetic.csv";
