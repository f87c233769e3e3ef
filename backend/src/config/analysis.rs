//! Analysis tables: normalization ranges, the Earth reference vector and the
//! tuning knobs of each pipeline stage.
//!
//! Every table has a default matching the published site; any of them can be
//! replaced from the `[analysis]` section of `second-earth.toml`.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::PerMetric;

/// Closed numeric interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainRange {
    pub min: f64,
    pub max: f64,
}

impl DomainRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    /// Position of `value` inside the range, clamped to `[0, 1]`.
    pub fn normalize(&self, value: f64) -> f64 {
        crate::services::statistics::normalize(value, self.min, self.max)
    }
}

/// Plausible per-metric ranges used for normalization and sampling.
pub fn default_domain_ranges() -> PerMetric<DomainRange> {
    PerMetric {
        pl_rade: DomainRange::new(0.0, 5.0),
        pl_bmasse: DomainRange::new(0.0, 20.0),
        pl_insol: DomainRange::new(0.0, 5.0),
        pl_eqt: DomainRange::new(50.0, 1000.0),
        st_teff: DomainRange::new(2000.0, 12000.0),
        pl_orbeccen: DomainRange::new(0.0, 0.95),
    }
}

/// Earth's values for each metric.
pub fn earth_reference() -> PerMetric<f64> {
    PerMetric {
        pl_rade: 1.0,
        pl_bmasse: 1.0,
        pl_insol: 1.0,
        pl_eqt: 255.0,
        st_teff: 5772.0,
        pl_orbeccen: 0.0167,
    }
}

/// Curated planets shown on the catalog and similarity pages.
pub const DEFAULT_ALLOWED_PLANETS: [&str; 14] = [
    "GJ 367 b",
    "HD 136352 b",
    "HD 219134 c",
    "HD 23472 d",
    "HD 23472 e",
    "HD 23472 f",
    "HD 260655 b",
    "HD 260655 c",
    "K2-266 c",
    "K2-3 c",
    "Kepler-138 c",
    "Kepler-138 d",
    "TOI-1266 c",
    "TOI-500 b",
];

/// Column names and the entity allow-list used when grouping rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationConfig {
    pub name_column: String,
    pub host_column: String,
    pub default_flag_column: String,
    /// Empty means every named entity is kept.
    pub allow_list: Vec<String>,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            name_column: "pl_name".to_string(),
            host_column: "hostname".to_string(),
            default_flag_column: "default_flag".to_string(),
            allow_list: DEFAULT_ALLOWED_PLANETS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl AggregationConfig {
    /// Same columns, no allow-list.
    pub fn unfiltered() -> Self {
        Self {
            allow_list: Vec::new(),
            ..Self::default()
        }
    }

    pub fn allowed_names(&self) -> Option<HashSet<&str>> {
        if self.allow_list.is_empty() {
            None
        } else {
            Some(self.allow_list.iter().map(|s| s.trim()).collect())
        }
    }
}

/// Inclusive bands a planet must fall in to count as hospitable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HospitableThresholds {
    pub radius: DomainRange,
    pub teq: DomainRange,
    pub ecc: DomainRange,
}

impl Default for HospitableThresholds {
    fn default() -> Self {
        Self {
            radius: DomainRange::new(0.5, 1.6),
            teq: DomainRange::new(200.0, 350.0),
            ecc: DomainRange::new(0.0, 0.2),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DensityConfig {
    pub mass_column: String,
    pub radius_column: String,
    /// Densities at or above this value (g/cm³) are terrestrial.
    pub threshold: f64,
    pub clamp: DomainRange,
    pub bins: usize,
    /// Use one row per planet (preferring the archive's default row).
    pub primary_rows_only: bool,
}

impl Default for DensityConfig {
    fn default() -> Self {
        Self {
            mass_column: "pl_bmasse".to_string(),
            radius_column: "pl_rade".to_string(),
            threshold: 3.0,
            clamp: DomainRange::new(0.0, 20.0),
            bins: 30,
            primary_rows_only: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Standard deviation as a fraction of `|median|`.
    pub std_factor: f64,
    /// Lower bound on the standard deviation.
    pub epsilon: f64,
    /// Draws attempted before falling back to the clamped mean.
    pub max_attempts: u32,
    pub eccentricity_clamp: DomainRange,
    pub default_count: usize,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            std_factor: 0.1,
            epsilon: 1e-9,
            max_attempts: 10,
            eccentricity_clamp: DomainRange::new(0.0, 0.95),
            default_count: 10,
        }
    }
}

/// All tables consumed by the analysis services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub aggregation: AggregationConfig,
    pub domain_ranges: PerMetric<DomainRange>,
    pub reference: PerMetric<f64>,
    pub hospitable: HospitableThresholds,
    pub density: DensityConfig,
    pub sampler: SamplerConfig,
    pub radar_rings: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            aggregation: AggregationConfig::default(),
            domain_ranges: default_domain_ranges(),
            reference: earth_reference(),
            hospitable: HospitableThresholds::default(),
            density: DensityConfig::default(),
            sampler: SamplerConfig::default(),
            radar_rings: 6,
        }
    }
}

impl AnalysisConfig {
    /// Check the tables for values that would make a stage meaningless.
    pub fn validate(&self) -> Result<(), String> {
        for (key, range) in self.domain_ranges.iter() {
            if !(range.max > range.min) {
                return Err(format!("domain range for {} must have max > min", key));
            }
        }
        if self.density.bins == 0 {
            return Err("density.bins must be at least 1".to_string());
        }
        if self.density.clamp.max < self.density.clamp.min {
            return Err("density.clamp must have max >= min".to_string());
        }
        if self.radar_rings == 0 {
            return Err("radar_rings must be at least 1".to_string());
        }
        if !(self.sampler.epsilon > 0.0) {
            return Err("sampler.epsilon must be positive".to_string());
        }
        Ok(())
    }
}
