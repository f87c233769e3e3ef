//! Small numeric helpers shared by the analysis services.

use std::cmp::Ordering;

/// Parse a CSV field as a finite number.
///
/// Surrounding whitespace is ignored; empty, non-numeric and non-finite
/// values (`inf`, `NaN`) yield `None`. The whole field must parse: a numeric
/// prefix such as `1.5abc` is rejected rather than read as `1.5`.
pub fn to_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    sorted
}

/// Median of `values`; the mean of the two middle values for even counts.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sorted = sorted(values);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Percentile `p` (in `[0, 1]`) with linear interpolation between the two
/// nearest ranks: index = `(n - 1) * p`.
pub fn percentile(values: &[f64], p: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sorted = sorted(values);
    let idx = (sorted.len() - 1) as f64 * p.clamp(0.0, 1.0);
    let lo = idx.floor() as usize;
    let hi = idx.ceil() as usize;
    if lo == hi {
        return Some(sorted[lo]);
    }
    let w = idx - lo as f64;
    Some(sorted[lo] * (1.0 - w) + sorted[hi] * w)
}

/// Position of `value` within `[min, max]`, clamped to `[0, 1]`.
///
/// A zero-width range maps everything to 0.
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if !(span > 0.0) {
        return 0.0;
    }
    ((value - min) / span).clamp(0.0, 1.0)
}
