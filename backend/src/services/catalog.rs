//! Catalog filtering: name search, habitability screen and metric sort.

use std::cmp::Ordering;

use crate::api::CatalogQuery;
use crate::config::{DomainRange, HospitableThresholds};
use crate::models::{MetricKey, PlanetProfile};

/// Whether radius, equilibrium temperature and eccentricity medians are all
/// known and inside their bands.
pub fn is_hospitable(profile: &PlanetProfile, thresholds: &HospitableThresholds) -> bool {
    let within = |key: MetricKey, range: &DomainRange| {
        profile.median(key).is_some_and(|v| range.contains(v))
    };
    within(MetricKey::Radius, &thresholds.radius)
        && within(MetricKey::EquilibriumTemperature, &thresholds.teq)
        && within(MetricKey::Eccentricity, &thresholds.ecc)
}

/// Apply `query` to `profiles`.
///
/// The sort is stable and ascending; planets without a median for the sort
/// metric go last.
pub fn filter_profiles(
    profiles: &[PlanetProfile],
    query: &CatalogQuery,
    thresholds: &HospitableThresholds,
) -> Vec<PlanetProfile> {
    let needle = query
        .q
        .as_deref()
        .map(|q| q.trim().to_lowercase())
        .filter(|q| !q.is_empty());

    let mut result: Vec<PlanetProfile> = profiles
        .iter()
        .filter(|p| {
            needle
                .as_deref()
                .map_or(true, |n| p.pl_name.to_lowercase().contains(n))
        })
        .filter(|p| !query.hospitable || is_hospitable(p, thresholds))
        .cloned()
        .collect();

    let key = query.sort.unwrap_or(MetricKey::Radius);
    result.sort_by(|a, b| match (a.median(key), b.median(key)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    result
}
