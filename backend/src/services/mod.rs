//! Service layer: the analysis pipeline and the page views built on it.
//!
//! The pure stages ([`aggregation`], [`similarity`], [`density`],
//! [`synthesis`], [`catalog`], [`orbits`]) take parsed records and explicit
//! configuration. [`views`] wires them to the data files.

pub mod aggregation;
pub mod catalog;
pub mod dataset;
pub mod density;
pub mod orbits;
pub mod similarity;
pub mod statistics;
pub mod synthesis;
pub mod views;

pub use aggregation::{aggregate, consolidate_profiles, select_primary_rows};
pub use catalog::{filter_profiles, is_hospitable};
pub use dataset::{load_dataset, Dataset};
pub use density::{bin_densities, bulk_density, classify};
pub use orbits::extract_orbit_points;
pub use similarity::{assign_rings, rank};
pub use synthesis::synthesize_similar;
pub use views::{
    catalog_view, density_view, orbit_points, planet_view, similarity_view, synthetic_view,
};
