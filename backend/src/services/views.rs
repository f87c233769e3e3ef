//! Page-level views over the source files.
//!
//! Every view re-reads its source file and returns a [`ViewState`]. Missing
//! files, read errors and empty results become `Unavailable` with a reason;
//! nothing here fails the request.

use log::warn;
use rand::Rng;

use super::aggregation::{consolidate_profiles, select_primary_rows};
use super::catalog::{filter_profiles, is_hospitable};
use super::dataset::{load_dataset, Dataset};
use super::density::{classify, record_density};
use super::orbits::extract_orbit_points;
use super::similarity::{assign_rings, rank};
use super::synthesis::synthesize_similar;
use crate::api::{
    CatalogQuery, DensityData, MetricDescriptor, OrbitPoint, PlanetCatalogData, PlanetDetailData,
    SimilarityData, SyntheticCohortData, ViewState,
};
use crate::config::AnalysisConfig;
use crate::error::DatasetResult;
use crate::models::{MetricKey, PlanetProfile, RawRecord};
use crate::parsing::DataSource;

fn load_or_reason(source: &DataSource) -> Result<Dataset, String> {
    load_dataset(source).map_err(|e| {
        warn!("Dataset {} unavailable: {}", source.file_name, e);
        e.to_string()
    })
}

fn unavailable<T>(reason: String) -> ViewState<T> {
    warn!("View unavailable: {}", reason);
    ViewState::unavailable(reason)
}

fn find_profile(profiles: Vec<PlanetProfile>, name: &str) -> Option<PlanetProfile> {
    let name = name.trim();
    profiles.into_iter().find(|p| p.pl_name == name)
}

/// Planet catalog, filtered and sorted by `query`.
pub fn catalog_view(
    config: &AnalysisConfig,
    source: &DataSource,
    query: &CatalogQuery,
) -> ViewState<PlanetCatalogData> {
    let dataset = match load_or_reason(source) {
        Ok(dataset) => dataset,
        Err(reason) => return ViewState::unavailable(reason),
    };

    let profiles = consolidate_profiles(&dataset.records, &config.aggregation);
    if profiles.is_empty() {
        return unavailable("No planets with valid data in the dataset".to_string());
    }

    let hospitable_count = profiles
        .iter()
        .filter(|p| is_hospitable(p, &config.hospitable))
        .count();
    let planets = filter_profiles(&profiles, query, &config.hospitable);

    ViewState::ready(PlanetCatalogData {
        dataset: dataset.info,
        metrics: MetricKey::ALL.into_iter().map(MetricDescriptor::from).collect(),
        total_count: profiles.len(),
        hospitable_count,
        planets,
    })
}

/// A single planet profile.
pub fn planet_view(
    config: &AnalysisConfig,
    source: &DataSource,
    name: &str,
) -> ViewState<PlanetDetailData> {
    let dataset = match load_or_reason(source) {
        Ok(dataset) => dataset,
        Err(reason) => return ViewState::unavailable(reason),
    };

    let profiles = consolidate_profiles(&dataset.records, &config.aggregation);
    match find_profile(profiles, name) {
        Some(planet) => ViewState::ready(PlanetDetailData {
            dataset: dataset.info,
            hospitable: is_hospitable(&planet, &config.hospitable),
            planet,
        }),
        None => unavailable(format!("Planet '{}' not found", name.trim())),
    }
}

/// Earth-similarity ranking with radar ring placement.
pub fn similarity_view(config: &AnalysisConfig, source: &DataSource) -> ViewState<SimilarityData> {
    let dataset = match load_or_reason(source) {
        Ok(dataset) => dataset,
        Err(reason) => return ViewState::unavailable(reason),
    };

    let profiles = consolidate_profiles(&dataset.records, &config.aggregation);
    let mut planets = rank(&profiles, &config.domain_ranges, &config.reference);
    if planets.is_empty() {
        return unavailable("No planets with complete metric data to compare".to_string());
    }
    assign_rings(&mut planets, config.radar_rings);

    let excluded = profiles
        .iter()
        .filter(|p| p.complete_medians().is_none())
        .map(|p| p.pl_name.clone())
        .collect();

    ViewState::ready(SimilarityData {
        dataset: dataset.info,
        reference: config.reference.clone(),
        ring_count: config.radar_rings,
        planets,
        excluded,
    })
}

/// Bulk-density histogram over `bin_count` bins.
pub fn density_view(
    config: &AnalysisConfig,
    source: &DataSource,
    bin_count: usize,
) -> ViewState<DensityData> {
    let dataset = match load_or_reason(source) {
        Ok(dataset) => dataset,
        Err(reason) => return ViewState::unavailable(reason),
    };

    let density = &config.density;
    let rows: Vec<&RawRecord> = if density.primary_rows_only {
        select_primary_rows(
            &dataset.records,
            &config.aggregation.name_column,
            &config.aggregation.default_flag_column,
            |r| record_density(r, density).is_some(),
        )
    } else {
        dataset.records.iter().collect()
    };

    let histogram = classify(rows, density, bin_count);
    if histogram.series.is_empty() {
        return unavailable("No planets with a usable mass and radius".to_string());
    }

    ViewState::ready(DensityData {
        dataset: dataset.info,
        histogram,
    })
}

/// `count` synthetic variants of the named planet.
pub fn synthetic_view<R: Rng + ?Sized>(
    config: &AnalysisConfig,
    source: &DataSource,
    name: &str,
    count: usize,
    rng: &mut R,
) -> ViewState<SyntheticCohortData> {
    let dataset = match load_or_reason(source) {
        Ok(dataset) => dataset,
        Err(reason) => return ViewState::unavailable(reason),
    };

    let profiles = consolidate_profiles(&dataset.records, &config.aggregation);
    let Some(profile) = find_profile(profiles, name) else {
        return unavailable(format!("Planet '{}' not found", name.trim()));
    };

    let planets = synthesize_similar(
        &profile,
        count,
        &config.domain_ranges,
        &config.sampler,
        rng,
    );
    ViewState::ready(SyntheticCohortData {
        source: profile.pl_name,
        count: planets.len(),
        planets,
    })
}

/// Orbit scatter rows. Unlike the page views, failures are returned to the
/// caller.
pub fn orbit_points(source: &DataSource) -> DatasetResult<Vec<OrbitPoint>> {
    let dataset = load_dataset(source)?;
    Ok(extract_orbit_points(&dataset.records))
}
