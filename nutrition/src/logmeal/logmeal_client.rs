use std::num::NonZeroU32;
use std::time::Duration;

use anyhow::Context;
use governor::clock::QuantaClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use reqwest::RequestBuilder;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;

use super::NutritionEndpoint;
use super::logmeal_types::{DishRecognitionResponse, NutritionResponse};
use crate::config;
use crate::error::RemoteError;
use crate::models::food::{FoodId, RecognizedFood};
use crate::models::nutrition::NutritionRecord;

const DEFAULT_API_URL: &str = "https://api.logmeal.es";
const DEFAULT_REQUESTS_PER_MINUTE: NonZeroU32 = NonZeroU32::new(60).unwrap();

#[derive(Debug, Clone)]
pub struct LogMealConfig {
    pub api_url: String,
    pub api_key: String,
    pub requests_per_minute: NonZeroU32,
    pub timeout: Duration,
}

impl LogMealConfig {
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            api_key: api_key.into(),
            requests_per_minute: DEFAULT_REQUESTS_PER_MINUTE,
            timeout: config::DEFAULT_HTTP_TIMEOUT,
        }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        let api_key =
            dotenvy::var("LOGMEAL_API_KEY").context("LOGMEAL_API_KEY env var must be set")?;
        let api_url = config::var_or("LOGMEAL_API_URL", DEFAULT_API_URL.to_string())?;
        let requests_per_minute =
            config::var_or("LOGMEAL_RATE_PER_MINUTE", DEFAULT_REQUESTS_PER_MINUTE)?;
        let timeout = config::http_timeout()?;

        Ok(Self {
            api_url,
            api_key,
            requests_per_minute,
            timeout,
        })
    }
}

#[derive(Debug)]
pub struct LogMealClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
    limiter: RateLimiter<NotKeyed, InMemoryState, QuantaClock>,
}

impl LogMealClient {
    pub fn new(config: LogMealConfig) -> Result<Self, RemoteError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        let limiter = RateLimiter::direct(Quota::per_minute(config.requests_per_minute));

        Ok(Self {
            http,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            limiter,
        })
    }

    /// Sends the image to the dish recognition endpoint and returns the most probable dish, if
    /// LogMeal recognized anything at all.
    #[tracing::instrument(skip(self, image), fields(bytes = image.len()))]
    pub async fn recognize_dish(
        &self,
        image: Vec<u8>,
        file_name: String,
        content_type: &str,
    ) -> Result<Option<RecognizedFood>, RemoteError> {
        let part = Part::bytes(image)
            .file_name(file_name)
            .mime_str(content_type)
            .map_err(|e| RemoteError::InvalidUpload(e.to_string()))?;
        let form = Form::new().part("image", part);

        tracing::info!("sending image to LogMeal");
        let request = self
            .http
            .post(self.url("v2/image/recognition/dish"))
            .multipart(form);
        let response: DishRecognitionResponse = self.send(request).await?;

        if let Some(best) = response.recognition_results.first() {
            tracing::info!(food_id = %best.id, name = %best.name, prob = ?best.prob, "dish recognized");
        } else {
            tracing::warn!("LogMeal returned no recognition results");
        }

        Ok(response.best_match())
    }

    #[tracing::instrument(skip(self, endpoint), fields(endpoint = endpoint.as_str()))]
    pub async fn nutrition(
        &self,
        endpoint: NutritionEndpoint,
        food_id: FoodId,
    ) -> Result<NutritionRecord, RemoteError> {
        let url = self.url(&endpoint.path(food_id));
        tracing::debug!(%url, "fetching nutrition data");

        let response: NutritionResponse = self.send(self.http.get(url)).await?;

        response
            .nutrition
            .ok_or_else(|| RemoteError::Malformed(String::from("missing nutrition payload")))
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.api_url)
    }

    async fn send<T>(&self, request: RequestBuilder) -> Result<T, RemoteError>
    where
        T: DeserializeOwned,
    {
        if self.limiter.check().is_err() {
            tracing::warn!("LogMeal rate limit reached, skipping request");
            return Err(RemoteError::RateLimited);
        }

        let response = request.bearer_auth(&self.api_key).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status(status));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
