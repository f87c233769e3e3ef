//! Earth-similarity scoring.
//!
//! Each metric median is normalized against a fixed plausible range, the
//! reference (Earth) is normalized against the same range, and planets are
//! ranked by the Euclidean distance between the two normalized vectors.

use std::cmp::Ordering;

use crate::api::{AxisDifference, RankedPlanet};
use crate::config::DomainRange;
use crate::models::{MetricKey, PerMetric, PlanetProfile};

/// Per-axis comparison of `medians` against `reference`.
pub fn axis_differences(
    medians: &PerMetric<f64>,
    ranges: &PerMetric<DomainRange>,
    reference: &PerMetric<f64>,
) -> Vec<AxisDifference> {
    MetricKey::ALL
        .into_iter()
        .map(|key| {
            let range = ranges[key];
            let normalized = range.normalize(medians[key]);
            let reference_normalized = range.normalize(reference[key]);
            AxisDifference {
                metric: key,
                label: key.label().to_string(),
                raw: medians[key],
                normalized,
                reference_normalized,
                difference: (normalized - reference_normalized).abs(),
            }
        })
        .collect()
}

/// Euclidean distance between the normalized planet and reference vectors.
pub fn similarity_score(axes: &[AxisDifference]) -> f64 {
    axes.iter()
        .map(|a| {
            let d = a.normalized - a.reference_normalized;
            d * d
        })
        .sum::<f64>()
        .sqrt()
}

/// Rank complete profiles by distance to `reference`, closest first.
///
/// Profiles missing any median are left out. Equal scores are ordered by
/// name. Ring indices are left at 0; see [`assign_rings`].
pub fn rank(
    profiles: &[PlanetProfile],
    ranges: &PerMetric<DomainRange>,
    reference: &PerMetric<f64>,
) -> Vec<RankedPlanet> {
    let mut ranked: Vec<RankedPlanet> = profiles
        .iter()
        .filter_map(|profile| {
            let medians = profile.complete_medians()?;
            let axes = axis_differences(&medians, ranges, reference);
            let score = similarity_score(&axes);
            Some(RankedPlanet {
                name: profile.pl_name.clone(),
                hostname: profile.hostname.clone(),
                axes,
                score,
                ring: 0,
            })
        })
        .collect();

    ranked.sort_by(|a, b| {
        a.score
            .partial_cmp(&b.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });
    ranked
}

/// Spread ranked planets over `ring_count` concentric rings by score.
///
/// The best score lands on ring 0 and the worst on the outermost ring.
pub fn assign_rings(ranked: &mut [RankedPlanet], ring_count: usize) {
    let ring_count = ring_count.max(1);
    let (Some(first), Some(last)) = (ranked.first(), ranked.last()) else {
        return;
    };
    let min_score = first.score;
    let score_range = (last.score - min_score).max(1e-9);

    for planet in ranked.iter_mut() {
        let t = ((planet.score - min_score) / score_range).clamp(0.0, 1.0);
        planet.ring = ((t * ring_count as f64).floor() as usize).min(ring_count - 1);
    }
}
