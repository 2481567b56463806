use axum::Router;
use axum::http::StatusCode;
use serde::Serialize;

use crate::AppState;

pub mod analyze;
pub mod health;
pub mod profile;

#[derive(Debug, Serialize)]
pub struct HttpResponse<B> {
    ok: bool,
    status: u16,
    #[serde(rename = "statusText")]
    status_text: String,
    body: B,
}

impl<B> From<B> for HttpResponse<B> {
    fn from(body: B) -> Self {
        Self {
            ok: true,
            status: StatusCode::OK.as_u16(),
            status_text: StatusCode::OK
                .canonical_reason()
                .unwrap_or_default()
                .to_string(),
            body,
        }
    }
}

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(analyze::analyze_routes())
        .merge(profile::profile_routes())
        .merge(health::health_routes())
}
