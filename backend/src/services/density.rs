//! Bulk-density classification and histogram binning.

use log::debug;
use qtty::length::nominal::EarthRadii;
use qtty::{Kilograms, Meter};
use std::f64::consts::PI;

use super::statistics::to_number;
use crate::api::{DensityBin, DensityHistogram, DensitySeries, PlanetClass};
use crate::config::DensityConfig;
use crate::models::RawRecord;

/// Earth mass in kilograms.
pub const EARTH_MASS_KG: f64 = 5.972e24;

/// Bulk density in g/cm³ from mass (Earth masses) and radius (Earth radii).
///
/// Returns `None` for non-positive radii or a non-finite result.
pub fn bulk_density(mass_earth: f64, radius_earth: f64) -> Option<f64> {
    if !(radius_earth > 0.0) {
        return None;
    }
    let mass = Kilograms::new(mass_earth * EARTH_MASS_KG);
    let radius = EarthRadii::new(radius_earth).to::<Meter>();
    let volume_m3 = 4.0 / 3.0 * PI * radius.value().powi(3);
    // kg/m³ -> g/cm³
    let density = mass.value() / volume_m3 / 1000.0;
    density.is_finite().then_some(density)
}

pub fn classify_density(density: f64, threshold: f64) -> PlanetClass {
    if density >= threshold {
        PlanetClass::Terrestrial
    } else {
        PlanetClass::Gaseous
    }
}

/// Density of one row, read from the configured mass and radius columns.
pub fn record_density(record: &RawRecord, config: &DensityConfig) -> Option<f64> {
    let mass = record.get(&config.mass_column).and_then(to_number)?;
    let radius = record.get(&config.radius_column).and_then(to_number)?;
    bulk_density(mass, radius)
}

/// Split `[min, max]` of the values into `bin_count` equal-width bins and
/// count each class per bin.
///
/// With no values the axis defaults to `[0, 1]`; a zero-width axis is widened
/// to `[min, min + 1]`.
pub fn bin_densities(samples: &[(f64, PlanetClass)], bin_count: usize) -> Vec<DensityBin> {
    let bin_count = bin_count.max(1);
    let finite = samples.iter().map(|(v, _)| *v).filter(|v| v.is_finite());

    let min = finite.clone().fold(f64::INFINITY, f64::min);
    let min = if min.is_finite() { min } else { 0.0 };
    let max = finite.fold(f64::NEG_INFINITY, f64::max);
    let max = if max > min { max } else { min + 1.0 };
    let width = (max - min) / bin_count as f64;

    let mut bins: Vec<DensityBin> = (0..bin_count)
        .map(|i| {
            let bin_start = min + i as f64 * width;
            let bin_end = if i == bin_count - 1 {
                max
            } else {
                min + (i + 1) as f64 * width
            };
            DensityBin {
                bin_label: format!("{:.2}-{:.2}", bin_start, bin_end),
                bin_start,
                bin_end,
                terrestrial: 0,
                gaseous: 0,
            }
        })
        .collect();

    for &(value, class) in samples {
        if !value.is_finite() {
            continue;
        }
        let index = if value >= max {
            bin_count - 1
        } else {
            (((value - min) / width).floor().max(0.0) as usize).min(bin_count - 1)
        };
        match class {
            PlanetClass::Terrestrial => bins[index].terrestrial += 1,
            PlanetClass::Gaseous => bins[index].gaseous += 1,
        }
    }
    bins
}

/// Classify every usable row and build the histogram.
///
/// Rows with a missing or non-numeric mass/radius, a non-positive radius or
/// a non-finite density are skipped. Densities are clamped to the configured
/// range before classification and binning.
pub fn classify<'a, I>(records: I, config: &DensityConfig, bin_count: usize) -> DensityHistogram
where
    I: IntoIterator<Item = &'a RawRecord>,
{
    let mut series = DensitySeries::default();
    let mut samples = Vec::new();
    let mut skipped = 0;

    for record in records {
        let Some(density) = record_density(record, config) else {
            skipped += 1;
            continue;
        };
        let density = config.clamp.clamp(density);
        let class = classify_density(density, config.threshold);
        match class {
            PlanetClass::Terrestrial => series.terrestrial.push(density),
            PlanetClass::Gaseous => series.gaseous.push(density),
        }
        samples.push((density, class));
    }

    debug!(
        "Classified {} densities ({} terrestrial, {} gaseous, {} skipped)",
        samples.len(),
        series.terrestrial.len(),
        series.gaseous.len(),
        skipped
    );

    DensityHistogram {
        bins: bin_densities(&samples, bin_count),
        series,
        threshold: config.threshold,
        skipped,
    }
}
