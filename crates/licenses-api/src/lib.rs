//! # licenses-api: Axum API Service for the License Catalog
//!
//! Serves a catalog of software licenses loaded once at startup from a
//! directory of definition files (see `licenses-core`).
//!
//! ## API Surface
//!
//! | Path                  | Module                 | Content                   |
//! |-----------------------|------------------------|---------------------------|
//! | `/licenses`           | [`routes::licenses`]   | All licenses (JSON)       |
//! | `/licenses/{id}`      | [`routes::licenses`]   | One license (JSON)        |
//! | `/licenses/{id}/raw`  | [`routes::licenses`]   | License text download     |
//! | `/`                   | [`routes::browse`]     | HTML browse page          |
//! | `/static/main.js`     | [`routes::browse`]     | Browse page script        |
//! | `/openapi.json`       | [`openapi`]            | OpenAPI 3.1 document      |
//! | `/health/*`           | this module            | Liveness and readiness    |
//!
//! Every route is wrapped in `tower_http::trace::TraceLayer`.

pub mod cli;
pub mod error;
pub mod logging;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::licenses::router())
        .merge(routes::browse::router())
        .merge(openapi::router())
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness probe. Always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe. The router only exists once the catalog has loaded.
async fn readiness() -> &'static str {
    "ready"
}
