use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use super::HttpResponse;
use crate::AppState;

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    status: &'static str,
    service: &'static str,
    version: &'static str,
}

async fn health() -> Json<HttpResponse<HealthStatus>> {
    Json(
        HealthStatus {
            status: "healthy",
            service: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }
        .into(),
    )
}
