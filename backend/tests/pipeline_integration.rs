//! End-to-end tests of the analysis pipeline over on-disk fixtures.

mod support;

use rand::rngs::StdRng;
use rand::SeedableRng;

use second_earth::api::{CatalogQuery, PlanetClass, ViewState};
use second_earth::config::analysis::{default_domain_ranges, earth_reference};
use second_earth::config::{AggregationConfig, AppConfig, DensityConfig, CONFIG_PATH_ENV};
use second_earth::models::{MetricKey, SyntheticPlanet};
use second_earth::parsing::{parse_csv, to_csv, DataSource};
use second_earth::services::{self, views};
use support::{with_scoped_env, DataDir, SELECTED_CSV};

#[test]
fn earth_row_ranks_first_with_zero_score() {
    let csv = "\
pl_name,pl_rade,pl_bmasse,pl_insol,pl_eqt,st_teff,pl_orbeccen
Earth,1,1,1,255,5772,0.0167
GJ 1132 b,1.13,1.66,19.1,584,3270,0.22
";
    let records = parse_csv(csv);
    let profiles = services::consolidate_profiles(&records, &AggregationConfig::unfiltered());
    let ranked = services::rank(&profiles, &default_domain_ranges(), &earth_reference());

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].name, "Earth");
    assert_eq!(ranked[0].score, 0.0);
    assert!(ranked[0].axes.iter().all(|a| a.difference == 0.0));
    assert!(ranked[1].score > 0.0);
}

#[test]
fn similarity_view_over_fixture_files() {
    let data = DataDir::new();
    let config = data.config();
    let view = views::similarity_view(&config.analysis, &config.data.selected_source());

    let similarity = view.data().expect("similarity view ready");
    let names: Vec<&str> = similarity.planets.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names[0], "Quoted, b");
    assert_eq!(similarity.planets[0].score, 0.0);
    assert!(!names.contains(&"Kepler-138 c"));
    assert_eq!(similarity.excluded, vec!["Kepler-138 c".to_string()]);
    assert!(similarity
        .planets
        .windows(2)
        .all(|w| w[0].score <= w[1].score));
    assert_eq!(similarity.dataset.rows, 6);
}

#[test]
fn default_allow_list_only_keeps_curated_planets() {
    let data = DataDir::new();
    let mut config = data.config();
    config.analysis.aggregation = AggregationConfig::default();

    let view = views::catalog_view(
        &config.analysis,
        &config.data.selected_source(),
        &CatalogQuery::default(),
    );
    let catalog = view.data().expect("catalog ready");
    let names: Vec<&str> = catalog.planets.iter().map(|p| p.pl_name.as_str()).collect();
    assert_eq!(names, vec!["GJ 367 b", "Kepler-138 c", "TOI-1266 c", "K2-3 c"]);
}

#[test]
fn catalog_aggregates_repeated_rows() {
    let data = DataDir::new();
    let config = data.config();
    let view = views::planet_view(&config.analysis, &config.data.selected_source(), "K2-3 c");
    let detail = view.data().expect("planet ready");

    let radius = &detail.planet.metrics[MetricKey::Radius];
    assert_eq!(radius.samples, vec![1.58, 1.60]);
    assert!((radius.median.unwrap() - 1.59).abs() < 1e-12);
    assert!(radius.p05.unwrap() < radius.p95.unwrap());
    assert!(detail.hospitable);
}

#[test]
fn density_view_classifies_primary_rows() {
    let data = DataDir::new();
    let config = data.config();
    let view = views::density_view(&config.analysis, &config.data.raw_source(), 30);
    let density = view.data().expect("density ready");
    let histogram = &density.histogram;

    // One row per planet: K2-3 c, GJ 367 b, Kepler-51 b, HAT-P-11 b.
    assert_eq!(histogram.series.len(), 4);
    assert_eq!(histogram.bins.len(), 30);
    let total: usize = histogram.bins.iter().map(|b| b.total()).sum();
    assert_eq!(total, 4);
    for pair in histogram.bins.windows(2) {
        assert_eq!(pair[0].bin_end, pair[1].bin_start);
    }
    assert_eq!(histogram.series.gaseous.len(), 2);
}

#[test]
fn density_classification_of_reference_bodies() {
    let records = parse_csv("pl_name,pl_rade,pl_bmasse\nEarth,1,1\nPuffy,4,1\n");
    let histogram = services::classify(&records, &DensityConfig::default(), 30);
    assert_eq!(histogram.series.terrestrial.len(), 1);
    assert!((histogram.series.terrestrial[0] - 5.51).abs() < 0.01);
    assert_eq!(histogram.series.gaseous.len(), 1);
    assert_eq!(
        second_earth::services::density::classify_density(histogram.series.gaseous[0], 3.0),
        PlanetClass::Gaseous
    );
}

#[test]
fn synthetic_cohort_exports_to_csv() {
    let data = DataDir::new();
    let config = data.config();
    let mut rng = StdRng::seed_from_u64(2024);
    let view = views::synthetic_view(
        &config.analysis,
        &config.data.selected_source(),
        "Kepler-138 c",
        10,
        &mut rng,
    );
    let cohort = view.data().expect("cohort ready");
    assert_eq!(cohort.count, 10);
    assert!(cohort.planets.iter().all(|p| {
        let r = p.values.pl_rade.unwrap();
        (0.0..=5.0).contains(&r) && p.values.pl_insol.is_none()
    }));

    let rows: Vec<_> = cohort.planets.iter().map(SyntheticPlanet::to_flat_record).collect();
    let csv = to_csv(&rows);
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("id,source,index,pl_rade,pl_bmasse,pl_insol,pl_eqt,st_teff,pl_orbeccen")
    );
    let first: Vec<&str> = lines.next().unwrap().split(',').collect();
    assert_eq!(first[0], "Kepler-138 c#1");
    assert_eq!(first[2], "1");
    assert_eq!(first[5], "");
    assert_eq!(csv.lines().count(), 11);
}

#[test]
fn missing_data_files_degrade_to_unavailable() {
    let data = DataDir::with_files(None, None);
    let config = data.config();

    match views::catalog_view(
        &config.analysis,
        &config.data.selected_source(),
        &CatalogQuery::default(),
    ) {
        ViewState::Unavailable { reason } => {
            assert!(reason.starts_with("Data file not found"));
            assert!(reason.contains("selected_planets_full.csv"));
        }
        ViewState::Ready { .. } => panic!("expected unavailable"),
    }
    assert!(!views::density_view(&config.analysis, &config.data.raw_source(), 30).is_ready());
    assert!(views::orbit_points(&config.data.raw_source()).is_err());
}

#[test]
fn env_override_takes_priority_over_data_root() {
    let data = DataDir::new();
    let other = DataDir::with_files(Some("pl_name,pl_rade\nOnly b,1.0\n"), None);
    let override_path = other.selected_path();
    let override_str = override_path.to_string_lossy().to_string();

    with_scoped_env(&[("SECOND_EARTH_SELECTED_CSV", Some(override_str.as_str()))], || {
        let source = DataSource::new(data.path(), "selected_planets_full.csv")
            .with_env_override("SECOND_EARTH_SELECTED_CSV");
        assert_eq!(source.resolve(), Some(override_path.clone()));

        let analysis = data.config().analysis;
        let view = views::catalog_view(&analysis, &source, &CatalogQuery::default());
        let catalog = view.data().expect("catalog ready");
        assert_eq!(catalog.total_count, 1);
        assert_eq!(catalog.dataset.path, override_path);
    });
}

#[test]
fn config_file_from_env() {
    let data = DataDir::new();
    let path = data.path().join("second-earth.toml");
    std::fs::write(
        &path,
        "[server]\nport = 9090\n\n[analysis]\nradar_rings = 4\n\n[analysis.density]\nbins = 12\n",
    )
    .unwrap();
    let path_str = path.to_string_lossy().to_string();

    let config = with_scoped_env(&[(CONFIG_PATH_ENV, Some(path_str.as_str()))], AppConfig::load).unwrap();
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.analysis.radar_rings, 4);
    assert_eq!(config.analysis.density.bins, 12);
    assert_eq!(config.analysis.density.threshold, 3.0);
}

#[test]
fn orbit_points_from_raw_export() {
    let data = DataDir::new();
    let config = data.config();
    let points = views::orbit_points(&config.data.raw_source()).unwrap();
    let names: Vec<&str> = points.iter().map(|p| p.name.as_str()).collect();
    // Kepler-51 b has no insolation.
    assert_eq!(names, vec!["K2-3 c", "K2-3 c", "GJ 367 b", "HAT-P-11 b"]);
}

#[test]
fn fixture_checksum_matches_content() {
    let data = DataDir::new();
    let config = data.config();
    let dataset = services::load_dataset(&config.data.selected_source()).unwrap();
    assert_eq!(
        dataset.info.checksum,
        second_earth::parsing::calculate_checksum(SELECTED_CSV)
    );
}
