//! Second Earth HTTP Server Binary
//!
//! Serves the planet catalog, Earth-similarity ranking, density histogram,
//! synthetic cohorts and orbit data as a JSON API.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin second-earth-server
//!
//! # Point at explicit data files
//! SECOND_EARTH_SELECTED_CSV=/data/selected_planets_full.csv \
//! SECOND_EARTH_RAW_CSV=/data/rawdata.csv \
//!   cargo run --bin second-earth-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (overrides `[server] host`, default: 0.0.0.0)
//! - `PORT`: Server port (overrides `[server] port`, default: 8080)
//! - `SECOND_EARTH_CONFIG`: Path to `second-earth.toml`
//! - `SECOND_EARTH_SELECTED_CSV` / `SECOND_EARTH_RAW_CSV`: Data file overrides
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use second_earth::config::AppConfig;
use second_earth::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Second Earth HTTP Server");

    let mut config = AppConfig::load()?;
    if let Ok(host) = env::var("HOST") {
        config.server.host = host;
    }
    if let Some(port) = env::var("PORT").ok().and_then(|s| s.parse().ok()) {
        config.server.port = port;
    }

    for source in [config.data.selected_source(), config.data.raw_source()] {
        match source.resolve() {
            Some(path) => info!("Using {} at {}", source.file_name, path.display()),
            None => warn!(
                "{} not found yet; views will report it as unavailable",
                source.file_name
            ),
        }
    }

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    let state = AppState::new(config);
    let app = create_router(state);

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
