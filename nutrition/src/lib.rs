pub mod config;
mod error;
mod fallback_table;
mod resolver;

pub mod logmeal;
pub mod models;

use std::pin::Pin;

pub use error::RemoteError;
pub use fallback_table::{FALLBACK_TABLE, FallbackEntry, FallbackTable};
pub use logmeal::{LogMealClient, LogMealConfig, NutritionEndpoint};
pub use models::food::{FoodId, RecognizedFood};
pub use models::nutrition::{NOT_AVAILABLE, NutritionRecord};
pub use resolver::NutritionResolver;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// One remote source in the resolution chain.
///
/// Tiers are tried in order by [`NutritionResolver`]; an error from a tier only means "try the
/// next one" and is never surfaced to callers.
pub trait NutritionTier: Send + Sync {
    fn name(&self) -> &str;

    fn lookup(&self, food_id: FoodId) -> BoxFuture<'_, Result<NutritionRecord, RemoteError>>;
}
