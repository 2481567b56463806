use nutrition::NutritionRecord;

use crate::AppState;
use crate::error::AppError;
use crate::models::food_analysis::{FoodAnalysis, UNKNOWN_FOOD};
use crate::models::health_profile::{HealthProfile, UserId};

#[derive(Debug)]
pub struct UploadedImage {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub content_type: String,
}

/// Recognizes the dish in `image`, resolves its nutrition and asks for recommendations tailored
/// to the user's saved profile.
///
/// Only a failed recognition call is an error. Nutrition and recommendations always degrade to
/// local fallbacks.
#[tracing::instrument(skip_all, fields(user_id = %user_id, file = %image.file_name))]
pub async fn analyze_food(
    state: &AppState,
    image: UploadedImage,
    user_id: UserId,
) -> Result<FoodAnalysis, AppError> {
    let recognized = state
        .logmeal
        .recognize_dish(image.bytes, image.file_name, &image.content_type)
        .await?;

    let (name, nutrition) = match recognized {
        Some(food) => {
            let nutrition = state.resolver.resolve(food.id, &food.name).await;
            (food.name, nutrition)
        }
        None => (String::from(UNKNOWN_FOOD), NutritionRecord::unavailable()),
    };

    let profile = state
        .profiles
        .get(&user_id)
        .await
        .unwrap_or_else(|| HealthProfile::empty(user_id.clone()));

    let recommendations = state
        .recommendations
        .recommend(&name, &nutrition, &profile)
        .await;

    Ok(FoodAnalysis::new(name, nutrition, recommendations))
}
