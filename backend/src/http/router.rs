//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;
use crate::routes::{catalog, density, orbits, similarity, synthetic};

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // The API is read-only, so any origin may call it.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        .route(catalog::PLANETS_PATH, get(handlers::list_planets))
        .route(catalog::PLANET_PATH, get(handlers::get_planet))
        .route(synthetic::SYNTHETIC_PATH, get(handlers::get_synthetic))
        .route(synthetic::SYNTHETIC_CSV_PATH, get(handlers::get_synthetic_csv))
        .route(similarity::SIMILARITY_PATH, get(handlers::get_similarity))
        .route(density::DENSITY_PATH, get(handlers::get_density));

    Router::new()
        .route("/health", get(handlers::health_check))
        .route(orbits::ORBIT_DATA_PATH, get(handlers::get_orbit_data))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
