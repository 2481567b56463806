use axum::extract::multipart::MultipartRejection;
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::routing::post;
use axum::{Json, Router};

use super::HttpResponse;
use crate::error::AppError;
use crate::handlers::analyze::UploadedImage;
use crate::models::food_analysis::FoodAnalysis;
use crate::models::health_profile::UserId;
use crate::{AppState, handlers};

const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024; // 10MB
const DEFAULT_CONTENT_TYPE: &str = "image/jpeg";

pub fn analyze_routes() -> Router<AppState> {
    Router::new()
        .route("/analyze-food", post(analyze_food))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
}

async fn analyze_food(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<HttpResponse<FoodAnalysis>>, AppError> {
    let mut multipart = multipart?;
    let mut image = None;
    let mut user_id = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(ToOwned::to_owned);

        match name.as_deref() {
            Some("foodImage") => {
                let file_name = field.file_name().unwrap_or("food-image").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or(DEFAULT_CONTENT_TYPE)
                    .to_string();
                let bytes = field.bytes().await?;

                if !bytes.is_empty() {
                    image = Some(UploadedImage {
                        bytes: bytes.to_vec(),
                        file_name,
                        content_type,
                    });
                }
            }
            Some("userId") => user_id = Some(field.text().await?),
            other => tracing::debug!(field = ?other, "ignoring multipart field"),
        }
    }

    let Some(image) = image else {
        return Err(AppError::BadRequest(String::from("No image file provided")));
    };

    let user_id = UserId::from_optional(user_id);
    let analysis = handlers::analyze::analyze_food(&state, image, user_id).await?;

    Ok(Json(analysis.into()))
}
