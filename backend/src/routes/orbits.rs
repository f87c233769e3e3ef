use serde::{Deserialize, Serialize};

/// One point of the orbit scatter plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitPoint {
    pub name: String,
    /// Semi-major axis in AU.
    pub semi_major_axis: f64,
    /// Stellar flux relative to Earth.
    pub insolation: f64,
}

/// Served outside the versioned prefix.
pub const ORBIT_DATA_PATH: &str = "/api/data";
