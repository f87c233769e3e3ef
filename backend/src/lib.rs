//! # Second Earth
//!
//! Exoplanet habitability analysis over NASA Exoplanet Archive CSV exports.
//!
//! Observational rows are grouped per planet and reduced to robust per-metric
//! statistics. Planets are then ranked by similarity to Earth, split into
//! terrestrial and gaseous classes by bulk density, and used as seeds for
//! synthetic look-alike cohorts. An optional axum server exposes the results.
//!
//! ## Architecture
//!
//! - [`parsing`]: CSV reading, data file discovery, CSV export
//! - [`models`]: Metric keys, raw records and aggregated planet profiles
//! - [`config`]: `second-earth.toml` loading and the analysis tables
//! - [`services`]: Aggregation, similarity, density, sampling and page views
//! - [`routes`]: Response DTOs and route paths for each view
//! - [`api`]: Re-exports of the DTOs
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod parsing;
pub mod routes;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

pub use error::{ConfigError, DatasetError, DatasetResult};
