//! Axum-based HTTP server for the translation gateway.
//!
//! Exposes `POST /translate/{provider}` plus provider listings, health and
//! Prometheus metrics. All translation logic lives in [`crate::gateway`];
//! handlers only decode bodies and encode results.
//!
//! # Components
//!
//! - `handlers`: Implementation of individual API endpoints.
//! - `middleware`: Request ID tracking and per-route metrics.
//! - `routes`: The main router configuration that ties everything together.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod handlers;
mod middleware;
mod routes;

pub use handlers::{HealthResponse, HealthStatus, ProvidersResponse};
pub use routes::{create_router, AppState};
