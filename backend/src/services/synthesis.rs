//! Synthetic planet generation.
//!
//! Every metric is sampled independently from a normal distribution centred
//! on the source planet's median and truncated to the metric's plausible
//! range. Correlations between metrics are not modelled.

use rand::Rng;
use std::f64::consts::PI;

use crate::config::{DomainRange, SamplerConfig};
use crate::models::{MetricKey, PerMetric, PlanetProfile, SyntheticPlanet};

/// One draw from the standard normal distribution (Box–Muller).
pub fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let mut u = 0.0;
    while u == 0.0 {
        u = rng.gen::<f64>();
    }
    let mut v = 0.0;
    while v == 0.0 {
        v = rng.gen::<f64>();
    }
    (-2.0 * u.ln()).sqrt() * (2.0 * PI * v).cos()
}

/// Draw from `N(mean, std)` until the value falls inside `range`.
///
/// After `max_attempts` misses the mean clamped to `range` is returned.
pub fn sample_truncated_normal<R: Rng + ?Sized>(
    rng: &mut R,
    mean: f64,
    std: f64,
    range: DomainRange,
    max_attempts: u32,
) -> f64 {
    for _ in 0..max_attempts {
        let x = mean + standard_normal(rng) * std;
        if range.contains(x) {
            return x;
        }
    }
    range.clamp(mean)
}

/// Generate `count` variants of `profile`, numbered from 1.
///
/// Metrics without a median stay `None` in every variant.
pub fn synthesize_similar<R: Rng + ?Sized>(
    profile: &PlanetProfile,
    count: usize,
    ranges: &PerMetric<DomainRange>,
    config: &SamplerConfig,
    rng: &mut R,
) -> Vec<SyntheticPlanet> {
    (1..=count)
        .map(|index| {
            let mut values = PerMetric::<Option<f64>>::default();
            for key in MetricKey::ALL {
                let Some(median) = profile.median(key) else {
                    continue;
                };
                let std = (median.abs() * config.std_factor).max(config.epsilon);
                let mut value =
                    sample_truncated_normal(rng, median, std, ranges[key], config.max_attempts);
                if key == MetricKey::Eccentricity {
                    value = config.eccentricity_clamp.clamp(value);
                }
                values[key] = Some(value);
            }

            SyntheticPlanet {
                id: format!("{}#{}", profile.pl_name, index),
                source: profile.pl_name.clone(),
                index,
                values,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::analysis::default_domain_ranges;
    use crate::models::MetricStat;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn profile_with(medians: &[(MetricKey, f64)]) -> PlanetProfile {
        let mut metrics = PerMetric::<MetricStat>::default();
        for &(key, median) in medians {
            metrics[key].median = Some(median);
        }
        PlanetProfile {
            pl_name: "TOI-1266 c".to_string(),
            hostname: Some("TOI-1266".to_string()),
            metrics,
        }
    }

    #[test]
    fn test_standard_normal_is_roughly_centred() {
        let mut rng = StdRng::seed_from_u64(7);
        let n = 20_000;
        let draws: Vec<f64> = (0..n).map(|_| standard_normal(&mut rng)).collect();
        let mean = draws.iter().sum::<f64>() / n as f64;
        let var = draws.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;
        assert!(mean.abs() < 0.05, "mean {}", mean);
        assert!((var - 1.0).abs() < 0.05, "variance {}", var);
    }

    #[test]
    fn test_generated_values_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let profile = profile_with(&[(MetricKey::Radius, 1.0)]);
        let cohort = synthesize_similar(
            &profile,
            10,
            &default_domain_ranges(),
            &SamplerConfig::default(),
            &mut rng,
        );
        assert_eq!(cohort.len(), 10);
        for planet in &cohort {
            let r = planet.values.pl_rade.unwrap();
            assert!((0.0..=5.0).contains(&r), "radius {}", r);
            assert!(planet.values.pl_bmasse.is_none());
        }
    }

    #[test]
    fn test_ids_follow_generation_order() {
        let mut rng = StdRng::seed_from_u64(1);
        let profile = profile_with(&[(MetricKey::Mass, 2.0)]);
        let cohort = synthesize_similar(
            &profile,
            3,
            &default_domain_ranges(),
            &SamplerConfig::default(),
            &mut rng,
        );
        let ids: Vec<&str> = cohort.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["TOI-1266 c#1", "TOI-1266 c#2", "TOI-1266 c#3"]);
        assert!(cohort.iter().all(|p| p.source == "TOI-1266 c"));
        assert_eq!(cohort[2].index, 3);
    }

    #[test]
    fn test_unreachable_range_falls_back_to_clamped_mean() {
        let mut rng = StdRng::seed_from_u64(3);
        // N(50, 5) essentially never lands in [0, 5].
        let x = sample_truncated_normal(&mut rng, 50.0, 5.0, DomainRange::new(0.0, 5.0), 10);
        assert_eq!(x, 5.0);
    }

    #[test]
    fn test_zero_attempts_returns_clamped_mean() {
        let mut rng = StdRng::seed_from_u64(3);
        let x = sample_truncated_normal(&mut rng, 1.0, 0.1, DomainRange::new(0.0, 5.0), 0);
        assert_eq!(x, 1.0);
    }

    #[test]
    fn test_eccentricity_is_hard_clamped() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut ranges = default_domain_ranges();
        ranges.pl_orbeccen = DomainRange::new(0.0, 2.0);
        let profile = profile_with(&[(MetricKey::Eccentricity, 0.94)]);
        let cohort = synthesize_similar(&profile, 50, &ranges, &SamplerConfig::default(), &mut rng);
        assert!(cohort
            .iter()
            .all(|p| (0.0..=0.95).contains(&p.values.pl_orbeccen.unwrap())));
    }

    #[test]
    fn test_zero_median_uses_epsilon_spread() {
        let mut rng = StdRng::seed_from_u64(5);
        let profile = profile_with(&[(MetricKey::Eccentricity, 0.0)]);
        let cohort = synthesize_similar(
            &profile,
            5,
            &default_domain_ranges(),
            &SamplerConfig::default(),
            &mut rng,
        );
        for planet in cohort {
            let e = planet.values.pl_orbeccen.unwrap();
            assert!(e.abs() < 1e-6);
        }
    }

    #[test]
    fn test_same_seed_same_cohort() {
        let profile = profile_with(&[(MetricKey::Radius, 1.2), (MetricKey::StellarTemperature, 4000.0)]);
        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            synthesize_similar(&profile, 4, &default_domain_ranges(), &SamplerConfig::default(), &mut rng)
        };
        assert_eq!(run(9), run(9));
    }
}
