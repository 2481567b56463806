use nutrition::NutritionRecord;
use serde::Serialize;

pub const UNKNOWN_FOOD: &str = "Unknown Food";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodAnalysis {
    pub name: String,
    pub calories: String,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
    pub recommendations: String,
}

impl FoodAnalysis {
    pub fn new(name: String, nutrition: NutritionRecord, recommendations: String) -> Self {
        Self {
            name,
            calories: nutrition.calories,
            protein: nutrition.protein,
            carbs: nutrition.carbohydrates,
            fat: nutrition.fat,
            recommendations,
        }
    }
}
