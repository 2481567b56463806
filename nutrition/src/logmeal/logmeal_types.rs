use serde::Deserialize;

use crate::models::food::{FoodId, RecognizedFood};
use crate::models::nutrition::NutritionRecord;

#[derive(Debug, Deserialize)]
pub struct DishRecognitionResponse {
    #[serde(default)]
    pub recognition_results: Vec<DishRecognitionResult>,
}

impl DishRecognitionResponse {
    /// LogMeal sorts results by probability, so the first one is the best guess.
    pub fn best_match(self) -> Option<RecognizedFood> {
        self.recognition_results
            .into_iter()
            .next()
            .map(|result| RecognizedFood::new(result.id, result.name))
    }
}

#[derive(Debug, Deserialize)]
pub struct DishRecognitionResult {
    pub id: FoodId,
    pub name: String,
    #[serde(default)]
    pub prob: Option<f32>,
}

#[derive(Debug, Deserialize)]
pub struct NutritionResponse {
    #[serde(default)]
    pub nutrition: Option<NutritionRecord>,
}
