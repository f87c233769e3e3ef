//! HTTP server module.
//!
//! An axum server exposing the analysis views as a JSON API.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Query parsing and limit validation                     │
//! │  - JSON / CSV responses                                   │
//! │  - CORS, compression, error handling                      │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │  spawn_blocking
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Views (services::views)                                  │
//! │  - Aggregation, ranking, density, sampling                │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Parsing (parsing/)                                       │
//! │  - File discovery and CSV reading                         │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
