use std::time::Duration;

use nutrition::{NOT_AVAILABLE, NutritionRecord};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::health_profile::HealthProfile;

const MAX_TOKENS: u32 = 150;

pub const NOT_CONFIGURED_MESSAGE: &str = "For personalized recommendations, please complete your health profile. Generally, this food can be part of a balanced diet when consumed in appropriate portions.";

pub const FALLBACK_MESSAGE: &str = "Based on this food's nutritional profile, consider balancing this meal with additional vegetables. Watch your portion size and be mindful of preparation methods to ensure a healthy meal.";

#[derive(Debug, Error)]
pub enum RecommendationError {
    #[error("completion request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("completion endpoint responded with status {0}")]
    Status(StatusCode),

    #[error("completion response has no text")]
    EmptyCompletion,
}

#[derive(Debug, Clone)]
pub struct RecommendationConfig {
    pub api_url: Option<String>,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            api_key: None,
            timeout: nutrition::config::DEFAULT_HTTP_TIMEOUT,
        }
    }
}

impl RecommendationConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let non_empty = |name: &str| dotenvy::var(name).ok().filter(|v| !v.trim().is_empty());

        Ok(Self {
            api_url: non_empty("GROK_API_URL"),
            api_key: non_empty("GROK_API_KEY"),
            timeout: nutrition::config::http_timeout()?,
        })
    }
}

#[derive(Debug)]
struct CompletionEndpoint {
    url: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    prompt: &'a str,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    #[serde(default)]
    text: Option<String>,
}

/// Asks a completion endpoint for dietary advice about an analyzed food.
///
/// Never fails: when the endpoint is not configured or the call goes wrong, a canned message is
/// returned instead.
#[derive(Debug)]
pub struct RecommendationService {
    http: reqwest::Client,
    endpoint: Option<CompletionEndpoint>,
}

impl RecommendationService {
    pub fn new(config: RecommendationConfig) -> Result<Self, RecommendationError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;

        let endpoint = match (config.api_url, config.api_key) {
            (Some(url), Some(api_key)) => Some(CompletionEndpoint { url, api_key }),
            _ => None,
        };

        Ok(Self { http, endpoint })
    }

    pub fn is_configured(&self) -> bool {
        self.endpoint.is_some()
    }

    #[tracing::instrument(skip(self, nutrition, profile), fields(user_id = %profile.user_id))]
    pub async fn recommend(
        &self,
        food_name: &str,
        nutrition: &NutritionRecord,
        profile: &HealthProfile,
    ) -> String {
        let Some(endpoint) = &self.endpoint else {
            tracing::debug!("completion endpoint not configured");
            return String::from(NOT_CONFIGURED_MESSAGE);
        };

        let prompt = build_prompt(food_name, nutrition, profile);

        match self.complete(endpoint, &prompt).await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(error = %e, "failed to get recommendations");
                String::from(FALLBACK_MESSAGE)
            }
        }
    }

    async fn complete(
        &self,
        endpoint: &CompletionEndpoint,
        prompt: &str,
    ) -> Result<String, RecommendationError> {
        let response = self
            .http
            .post(&endpoint.url)
            .bearer_auth(&endpoint.api_key)
            .json(&CompletionRequest {
                prompt,
                max_tokens: MAX_TOKENS,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RecommendationError::Status(status));
        }

        let completion = response.json::<CompletionResponse>().await?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.text)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or(RecommendationError::EmptyCompletion)
    }
}

fn nutrient(value: &str) -> &str {
    if value == NOT_AVAILABLE { "unknown" } else { value }
}

fn or_unknown<T: ToString>(value: Option<&T>) -> String {
    value
        .map(ToString::to_string)
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| String::from("unknown"))
}

fn or_unspecified(value: Option<&String>) -> &str {
    match value {
        Some(value) if !value.trim().is_empty() => value,
        _ => "none specified",
    }
}

pub fn build_prompt(
    food_name: &str,
    nutrition: &NutritionRecord,
    profile: &HealthProfile,
) -> String {
    format!(
        "Analyze this food: {food_name}

Nutritional information:
- Calories: {calories} kcal
- Protein: {protein} g
- Carbohydrates: {carbohydrates} g
- Fat: {fat} g

User health profile:
- Age: {age}
- Gender: {gender}
- Weight: {weight} kg
- Height: {height} cm
- Health conditions: {conditions}
- Dietary preferences: {preferences}
- Allergies: {allergies}

You are a nutritional advisor. Provide helpful health recommendations for the identified food \
considering the user's health condition. Keep the advice concise, practical, and informative. \
Focus on nutritional benefits or concerns, portion recommendations, and healthy preparation methods.",
        calories = nutrient(&nutrition.calories),
        protein = nutrient(&nutrition.protein),
        carbohydrates = nutrient(&nutrition.carbohydrates),
        fat = nutrient(&nutrition.fat),
        age = or_unknown(profile.age.as_ref()),
        gender = or_unknown(profile.gender.as_ref()),
        weight = or_unknown(profile.weight.as_ref()),
        height = or_unknown(profile.height.as_ref()),
        conditions = or_unspecified(profile.health_conditions.as_ref()),
        preferences = or_unspecified(profile.dietary_preferences.as_ref()),
        allergies = or_unspecified(profile.allergies.as_ref()),
    )
}
