use nutrition::LogMealConfig;
use nutrition::config::var_or;

use crate::services::recommendations::RecommendationConfig;

const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub logmeal: LogMealConfig,
    pub recommendations: RecommendationConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            port: var_or("PORT", DEFAULT_PORT)?,
            logmeal: LogMealConfig::from_env()?,
            recommendations: RecommendationConfig::from_env()?,
        })
    }
}
