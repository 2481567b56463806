pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::Router;
use nutrition::logmeal::nutrition_tiers;
use nutrition::{LogMealClient, NutritionResolver};

use crate::config::AppConfig;
use crate::services::profile_store::{InMemoryProfileStore, ProfileStore};
use crate::services::recommendations::RecommendationService;

#[derive(Clone)]
pub struct AppState {
    pub logmeal: Arc<LogMealClient>,
    pub resolver: Arc<NutritionResolver>,
    pub recommendations: Arc<RecommendationService>,
    pub profiles: Arc<dyn ProfileStore>,
}

impl AppState {
    pub fn new(
        logmeal: Arc<LogMealClient>,
        recommendations: RecommendationService,
        profiles: Arc<dyn ProfileStore>,
    ) -> Self {
        let resolver = NutritionResolver::new(nutrition_tiers(logmeal.clone()));

        Self {
            logmeal,
            resolver: Arc::new(resolver),
            recommendations: Arc::new(recommendations),
            profiles,
        }
    }

    pub fn from_config(config: AppConfig) -> anyhow::Result<Self> {
        let logmeal = Arc::new(LogMealClient::new(config.logmeal)?);
        let recommendations = RecommendationService::new(config.recommendations)?;
        let profiles = Arc::new(InMemoryProfileStore::new());

        Ok(Self::new(logmeal, recommendations, profiles))
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::<AppState>::new()
        .nest("/api", routes::api_routes())
        .with_state(state)
}
