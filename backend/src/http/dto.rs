//! Data Transfer Objects for the HTTP API.
//!
//! Page DTOs are re-exported from the routes module since they already derive
//! Serialize/Deserialize.

use serde::{Deserialize, Serialize};

pub use crate::api::{
    // Catalog
    CatalogQuery, MetricDescriptor, PlanetCatalogData, PlanetDetailData,
    // Density
    DensityData, DensityQuery,
    // Orbits
    OrbitPoint,
    // Similarity
    SimilarityData,
    // Synthetic
    SyntheticCohortData, SyntheticQuery,
    // Shared
    DatasetInfo, ViewState,
};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Whether the selected-planets file was found
    pub selected_data: String,
    /// Whether the raw archive file was found
    pub raw_data: String,
}
