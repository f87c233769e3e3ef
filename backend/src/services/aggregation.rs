//! Per-planet metric aggregation.
//!
//! Archive exports carry several observational rows per planet. Rows are
//! grouped by trimmed planet name and each tracked metric is reduced to a
//! median with 5th/95th percentiles over its valid samples.

use log::debug;
use std::collections::BTreeMap;

use super::statistics::{median, percentile, to_number};
use crate::config::AggregationConfig;
use crate::models::{MetricKey, MetricStat, PerMetric, PlanetProfile, RawRecord};

/// Build the statistics for one metric from its cleaned samples.
pub fn metric_stat(samples: Vec<f64>) -> MetricStat {
    MetricStat {
        median: median(&samples),
        p05: percentile(&samples, 0.05),
        p95: percentile(&samples, 0.95),
        samples,
    }
}

/// Finite numeric values of `column` across `rows`; everything else is dropped.
pub fn extract_samples(rows: &[&RawRecord], column: &str) -> Vec<f64> {
    rows.iter()
        .filter_map(|r| r.get(column).and_then(to_number))
        .collect()
}

/// Group rows by planet name, keeping allowed, non-empty names only.
///
/// The map is ordered by name (case-sensitive), rows keep file order.
fn group_by_name<'a>(
    records: &'a [RawRecord],
    config: &AggregationConfig,
) -> BTreeMap<String, Vec<&'a RawRecord>> {
    let allowed = config.allowed_names();
    let mut groups: BTreeMap<String, Vec<&RawRecord>> = BTreeMap::new();

    for record in records {
        let name = record.trimmed(&config.name_column);
        if name.is_empty() {
            continue;
        }
        if let Some(allowed) = &allowed {
            if !allowed.contains(name) {
                continue;
            }
        }
        groups.entry(name.to_string()).or_default().push(record);
    }
    groups
}

/// Aggregate `metrics` for every in-scope planet.
///
/// Metrics not listed in `metrics` are left empty. A planet with no valid
/// sample for a metric still appears, with an empty [`MetricStat`].
pub fn aggregate(
    records: &[RawRecord],
    metrics: &[MetricKey],
    config: &AggregationConfig,
) -> Vec<PlanetProfile> {
    let groups = group_by_name(records, config);

    let profiles: Vec<PlanetProfile> = groups
        .into_iter()
        .map(|(pl_name, rows)| {
            let mut stats = PerMetric::<MetricStat>::default();
            for &key in metrics {
                stats[key] = metric_stat(extract_samples(&rows, key.column()));
            }

            let hostname = rows
                .iter()
                .map(|r| r.trimmed(&config.host_column))
                .find(|h| !h.is_empty())
                .map(str::to_string);

            PlanetProfile {
                pl_name,
                hostname,
                metrics: stats,
            }
        })
        .collect();

    debug!(
        "Aggregated {} rows into {} planet profiles",
        records.len(),
        profiles.len()
    );
    profiles
}

/// Aggregate all six tracked metrics.
pub fn consolidate_profiles(records: &[RawRecord], config: &AggregationConfig) -> Vec<PlanetProfile> {
    aggregate(records, &MetricKey::ALL, config)
}

/// Whether the archive marks this row as its preferred measurement.
pub fn is_default_row(record: &RawRecord, flag_column: &str) -> bool {
    let value = record.trimmed(flag_column);
    if value.eq_ignore_ascii_case("true") {
        return true;
    }
    to_number(value).is_some_and(|v| v != 0.0)
}

/// Pick one row per planet.
///
/// Within each planet, rows are stably ordered default-flagged first and the
/// first one accepted by `predicate` is returned. Planets without an accepted
/// row are skipped. Output is ordered by planet name.
pub fn select_primary_rows<'a, F>(
    records: &'a [RawRecord],
    name_column: &str,
    flag_column: &str,
    predicate: F,
) -> Vec<&'a RawRecord>
where
    F: Fn(&RawRecord) -> bool,
{
    let mut groups: BTreeMap<&str, Vec<&RawRecord>> = BTreeMap::new();
    for record in records {
        let name = record.trimmed(name_column);
        if !name.is_empty() {
            groups.entry(name).or_default().push(record);
        }
    }

    groups
        .into_values()
        .filter_map(|mut rows| {
            rows.sort_by_key(|r| !is_default_row(r, flag_column));
            rows.into_iter().find(|r| predicate(r))
        })
        .collect()
}
