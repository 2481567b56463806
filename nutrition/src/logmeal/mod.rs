mod logmeal_client;
mod logmeal_types;

use std::sync::Arc;

pub use logmeal_client::{LogMealClient, LogMealConfig};
pub use logmeal_types::{DishRecognitionResponse, DishRecognitionResult, NutritionResponse};

use crate::error::RemoteError;
use crate::models::food::FoodId;
use crate::models::nutrition::NutritionRecord;
use crate::{BoxFuture, NutritionTier};

/// The two LogMeal endpoints that can answer with nutrition data for a dish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NutritionEndpoint {
    RecipeInfo,
    RecipeNutrition,
}

impl NutritionEndpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            NutritionEndpoint::RecipeInfo => "logmeal_recipe_info",
            NutritionEndpoint::RecipeNutrition => "logmeal_nutrition_recipe",
        }
    }

    fn path(&self, food_id: FoodId) -> String {
        match self {
            NutritionEndpoint::RecipeInfo => format!("v2/recipe/info/{food_id}"),
            NutritionEndpoint::RecipeNutrition => format!("v2/nutrition/recipe/{food_id}"),
        }
    }
}

#[derive(Debug)]
pub struct LogMealNutritionTier {
    client: Arc<LogMealClient>,
    endpoint: NutritionEndpoint,
}

impl LogMealNutritionTier {
    pub fn new(client: Arc<LogMealClient>, endpoint: NutritionEndpoint) -> Self {
        Self { client, endpoint }
    }
}

impl NutritionTier for LogMealNutritionTier {
    fn name(&self) -> &str {
        self.endpoint.as_str()
    }

    fn lookup(&self, food_id: FoodId) -> BoxFuture<'_, Result<NutritionRecord, RemoteError>> {
        Box::pin(self.client.nutrition(self.endpoint, food_id))
    }
}

/// Remote tiers in the order they should be tried: recipe info first, then the nutrition
/// endpoint.
pub fn nutrition_tiers(client: Arc<LogMealClient>) -> Vec<Box<dyn NutritionTier>> {
    vec![
        Box::new(LogMealNutritionTier::new(
            client.clone(),
            NutritionEndpoint::RecipeInfo,
        )),
        Box::new(LogMealNutritionTier::new(
            client,
            NutritionEndpoint::RecipeNutrition,
        )),
    ]
}
