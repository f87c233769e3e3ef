//! HTTP handlers for the REST API.
//!
//! Each handler validates its query, then runs the matching view on the
//! blocking pool since every view reads and parses a CSV file.

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::dto::{
    CatalogQuery, DensityData, DensityQuery, HealthResponse, OrbitPoint, PlanetCatalogData,
    PlanetDetailData, SimilarityData, SyntheticCohortData, SyntheticQuery, ViewState,
};
use super::error::AppError;
use super::state::AppState;
use crate::config::AppConfig;
use crate::models::FlatRecord;
use crate::parsing::{to_csv, DataSource};
use crate::services::views;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Run `f` on the blocking pool.
async fn blocking<T, F>(f: F) -> Result<T, AppError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))
}

/// Reject zero and values above `max`; `None` falls back to `default`.
fn bounded(name: &str, value: Option<usize>, default: usize, max: usize) -> Result<usize, AppError> {
    let value = value.unwrap_or(default);
    if value == 0 {
        return Err(AppError::BadRequest(format!("{} must be at least 1", name)));
    }
    if value > max {
        return Err(AppError::BadRequest(format!(
            "{} must be at most {} (got {})",
            name, max, value
        )));
    }
    Ok(value)
}

fn data_status(source: &DataSource) -> String {
    match source.resolve() {
        Some(path) => format!("found: {}", path.display()),
        None => "missing".to_string(),
    }
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        selected_data: data_status(&state.config.data.selected_source()),
        raw_data: data_status(&state.config.data.raw_source()),
    }))
}

// =============================================================================
// Page Views
// =============================================================================

/// GET /v1/planets
///
/// Planet catalog with optional name search, hospitable screen and sort.
pub async fn list_planets(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> HandlerResult<ViewState<PlanetCatalogData>> {
    let config = state.config.clone();
    let view = blocking(move || {
        views::catalog_view(&config.analysis, &config.data.selected_source(), &query)
    })
    .await?;
    Ok(Json(view))
}

/// GET /v1/planets/{name}
pub async fn get_planet(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> HandlerResult<ViewState<PlanetDetailData>> {
    let config = state.config.clone();
    let view = blocking(move || {
        views::planet_view(&config.analysis, &config.data.selected_source(), &name)
    })
    .await?;
    Ok(Json(view))
}

/// GET /v1/similarity
///
/// Earth-similarity ranking over the selected planets.
pub async fn get_similarity(State(state): State<AppState>) -> HandlerResult<ViewState<SimilarityData>> {
    let config = state.config.clone();
    let view = blocking(move || {
        views::similarity_view(&config.analysis, &config.data.selected_source())
    })
    .await?;
    Ok(Json(view))
}

/// GET /v1/density
///
/// Bulk-density histogram over the raw archive export.
pub async fn get_density(
    State(state): State<AppState>,
    Query(query): Query<DensityQuery>,
) -> HandlerResult<ViewState<DensityData>> {
    let config = state.config.clone();
    let bins = bounded(
        "bins",
        query.bins,
        config.analysis.density.bins,
        config.server.max_density_bins,
    )?;
    let view = blocking(move || {
        views::density_view(&config.analysis, &config.data.raw_source(), bins)
    })
    .await?;
    Ok(Json(view))
}

// =============================================================================
// Synthetic Cohorts
// =============================================================================

fn generate_cohort(
    config: &AppConfig,
    name: &str,
    query: &SyntheticQuery,
) -> Result<ViewState<SyntheticCohortData>, AppError> {
    let count = bounded(
        "count",
        query.count,
        config.analysis.sampler.default_count,
        config.server.max_synthetic_count,
    )?;
    let mut rng = match query.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    Ok(views::synthetic_view(
        &config.analysis,
        &config.data.selected_source(),
        name,
        count,
        &mut rng,
    ))
}

/// GET /v1/planets/{name}/synthetic
pub async fn get_synthetic(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<SyntheticQuery>,
) -> HandlerResult<ViewState<SyntheticCohortData>> {
    let config = state.config.clone();
    let view = blocking(move || generate_cohort(&config, &name, &query)).await??;
    Ok(Json(view))
}

/// GET /v1/planets/{name}/synthetic.csv
///
/// Same cohort as [`get_synthetic`], as a CSV download. An unknown planet or
/// missing data file is a 404 here since there is no page to degrade to.
pub async fn get_synthetic_csv(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<SyntheticQuery>,
) -> Result<Response, AppError> {
    let config = state.config.clone();
    let cohort = match blocking(move || generate_cohort(&config, &name, &query)).await?? {
        ViewState::Ready { data } => data,
        ViewState::Unavailable { reason } => return Err(AppError::NotFound(reason)),
    };

    let rows: Vec<FlatRecord> = cohort.planets.iter().map(|p| p.to_flat_record()).collect();
    let filename = cohort
        .source
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect::<String>();

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}_synthetic.csv\"", filename),
            ),
        ],
        to_csv(&rows),
    )
        .into_response())
}

// =============================================================================
// Orbit Data
// =============================================================================

/// GET /api/data
///
/// Orbit scatter rows from the raw export. Read failures are 500s.
pub async fn get_orbit_data(State(state): State<AppState>) -> HandlerResult<Vec<OrbitPoint>> {
    let config = state.config.clone();
    let points = blocking(move || views::orbit_points(&config.data.raw_source())).await??;
    Ok(Json(points))
}
