//! Tracked planetary metrics and a fixed-shape per-metric container.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// One of the six physical quantities tracked for every planet.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MetricKey {
    #[serde(rename = "pl_rade")]
    Radius,
    #[serde(rename = "pl_bmasse")]
    Mass,
    #[serde(rename = "pl_insol")]
    Insolation,
    #[serde(rename = "pl_eqt")]
    EquilibriumTemperature,
    #[serde(rename = "st_teff")]
    StellarTemperature,
    #[serde(rename = "pl_orbeccen")]
    Eccentricity,
}

impl MetricKey {
    /// All metrics in their canonical column order.
    pub const ALL: [MetricKey; 6] = [
        MetricKey::Radius,
        MetricKey::Mass,
        MetricKey::Insolation,
        MetricKey::EquilibriumTemperature,
        MetricKey::StellarTemperature,
        MetricKey::Eccentricity,
    ];

    /// CSV column carrying this metric in archive exports.
    pub fn column(self) -> &'static str {
        match self {
            MetricKey::Radius => "pl_rade",
            MetricKey::Mass => "pl_bmasse",
            MetricKey::Insolation => "pl_insol",
            MetricKey::EquilibriumTemperature => "pl_eqt",
            MetricKey::StellarTemperature => "st_teff",
            MetricKey::Eccentricity => "pl_orbeccen",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MetricKey::Radius => "Radius (Re)",
            MetricKey::Mass => "Mass (Me)",
            MetricKey::Insolation => "Insol (Se)",
            MetricKey::EquilibriumTemperature => "Teq (K)",
            MetricKey::StellarTemperature => "Teff (K)",
            MetricKey::Eccentricity => "Ecc",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            MetricKey::Radius => "Re",
            MetricKey::Mass => "Me",
            MetricKey::Insolation => "Se",
            MetricKey::EquilibriumTemperature | MetricKey::StellarTemperature => "K",
            MetricKey::Eccentricity => "",
        }
    }
}

impl fmt::Display for MetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for MetricKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MetricKey::ALL
            .into_iter()
            .find(|key| key.column() == s.trim())
            .ok_or_else(|| format!("Unknown metric: {}", s))
    }
}

/// One value of `T` per tracked metric.
///
/// Field names match the archive columns so the container serializes to
/// (and deserializes from) the same keys in JSON and TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerMetric<T> {
    pub pl_rade: T,
    pub pl_bmasse: T,
    pub pl_insol: T,
    pub pl_eqt: T,
    pub st_teff: T,
    pub pl_orbeccen: T,
}

impl<T> PerMetric<T> {
    /// Build a container by evaluating `f` once per metric, in canonical order.
    pub fn from_fn(mut f: impl FnMut(MetricKey) -> T) -> Self {
        Self {
            pl_rade: f(MetricKey::Radius),
            pl_bmasse: f(MetricKey::Mass),
            pl_insol: f(MetricKey::Insolation),
            pl_eqt: f(MetricKey::EquilibriumTemperature),
            st_teff: f(MetricKey::StellarTemperature),
            pl_orbeccen: f(MetricKey::Eccentricity),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (MetricKey, &T)> {
        MetricKey::ALL.into_iter().map(move |key| (key, &self[key]))
    }

    pub fn map<U>(&self, mut f: impl FnMut(MetricKey, &T) -> U) -> PerMetric<U> {
        PerMetric::from_fn(|key| f(key, &self[key]))
    }
}

impl<T> Index<MetricKey> for PerMetric<T> {
    type Output = T;

    fn index(&self, key: MetricKey) -> &T {
        match key {
            MetricKey::Radius => &self.pl_rade,
            MetricKey::Mass => &self.pl_bmasse,
            MetricKey::Insolation => &self.pl_insol,
            MetricKey::EquilibriumTemperature => &self.pl_eqt,
            MetricKey::StellarTemperature => &self.st_teff,
            MetricKey::Eccentricity => &self.pl_orbeccen,
        }
    }
}

impl<T> IndexMut<MetricKey> for PerMetric<T> {
    fn index_mut(&mut self, key: MetricKey) -> &mut T {
        match key {
            MetricKey::Radius => &mut self.pl_rade,
            MetricKey::Mass => &mut self.pl_bmasse,
            MetricKey::Insolation => &mut self.pl_insol,
            MetricKey::EquilibriumTemperature => &mut self.pl_eqt,
            MetricKey::StellarTemperature => &mut self.st_teff,
            MetricKey::Eccentricity => &mut self.pl_orbeccen,
        }
    }
}
