//! Public API surface.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::catalog::CatalogQuery;
pub use crate::routes::catalog::MetricDescriptor;
pub use crate::routes::catalog::PlanetCatalogData;
pub use crate::routes::catalog::PlanetDetailData;
pub use crate::routes::density::DensityBin;
pub use crate::routes::density::DensityData;
pub use crate::routes::density::DensityHistogram;
pub use crate::routes::density::DensityQuery;
pub use crate::routes::density::DensitySeries;
pub use crate::routes::density::PlanetClass;
pub use crate::routes::orbits::OrbitPoint;
pub use crate::routes::similarity::AxisDifference;
pub use crate::routes::similarity::RankedPlanet;
pub use crate::routes::similarity::SimilarityData;
pub use crate::routes::synthetic::SyntheticCohortData;
pub use crate::routes::synthetic::SyntheticQuery;
pub use crate::routes::view::DatasetInfo;
pub use crate::routes::view::ViewState;
