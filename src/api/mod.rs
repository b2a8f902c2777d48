//! HTTP API handlers served next to the app

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::app::ROUTE_TABLE;

/// General status response
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub service: &'static str,
    pub version: &'static str,
    /// Number of declared page routes
    pub routes: usize,
}

/// API routes, to be merged in front of the app router.
pub fn router() -> Router {
    Router::new().route("/status", get(status_handler))
}

/// GET /status - Service health check
pub async fn status_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        service: "real-world-events",
        version: env!("CARGO_PKG_VERSION"),
        routes: ROUTE_TABLE.len(),
    })
}
