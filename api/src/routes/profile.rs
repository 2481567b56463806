use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Json, Router};

use super::HttpResponse;
use crate::error::AppError;
use crate::models::health_profile::HealthProfile;
use crate::{AppState, handlers};

pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/save-health-profile", post(save_health_profile))
}

async fn save_health_profile(
    State(state): State<AppState>,
    payload: Result<Json<HealthProfile>, JsonRejection>,
) -> Result<Json<HttpResponse<&'static str>>, AppError> {
    let Json(profile) = payload?;
    handlers::profile::save_profile(&state, profile).await?;
    Ok(Json("Health profile saved successfully".into()))
}
