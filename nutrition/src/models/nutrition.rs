use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Placeholder for a nutrient the provider did not report.
pub const NOT_AVAILABLE: &str = "N/A";

/// Calorie and macro summary of a food, every value kept as the provider rendered it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionRecord {
    #[serde(default = "not_available", deserialize_with = "nutrient_value")]
    pub calories: String,
    #[serde(default = "not_available", deserialize_with = "nutrient_value")]
    pub protein: String,
    #[serde(default = "not_available", deserialize_with = "nutrient_value")]
    pub carbohydrates: String,
    #[serde(default = "not_available", deserialize_with = "nutrient_value")]
    pub fat: String,
}

impl NutritionRecord {
    pub fn new(
        calories: impl Into<String>,
        protein: impl Into<String>,
        carbohydrates: impl Into<String>,
        fat: impl Into<String>,
    ) -> Self {
        Self {
            calories: calories.into(),
            protein: protein.into(),
            carbohydrates: carbohydrates.into(),
            fat: fat.into(),
        }
    }

    pub fn unavailable() -> Self {
        Self::new(NOT_AVAILABLE, NOT_AVAILABLE, NOT_AVAILABLE, NOT_AVAILABLE)
    }
}

impl Default for NutritionRecord {
    fn default() -> Self {
        Self::unavailable()
    }
}

fn not_available() -> String {
    String::from(NOT_AVAILABLE)
}

// Providers are inconsistent: values come as numbers, numeric strings, empty strings or null.
fn nutrient_value<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;

    let rendered = match value {
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::String(text)) if !text.trim().is_empty() => text,
        _ => not_available(),
    };

    Ok(rendered)
}
