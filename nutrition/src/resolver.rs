use crate::NutritionTier;
use crate::fallback_table::{FALLBACK_TABLE, FallbackTable};
use crate::models::food::FoodId;
use crate::models::nutrition::NutritionRecord;

/// Resolves nutrition for a recognized food by trying each remote tier in order and falling
/// back to the local table when all of them fail.
///
/// Resolution never fails: remote errors are logged and swallowed, and the local table always
/// has at least its `default` entry to offer.
pub struct NutritionResolver {
    tiers: Vec<Box<dyn NutritionTier>>,
    table: &'static FallbackTable,
}

impl NutritionResolver {
    pub fn new(tiers: Vec<Box<dyn NutritionTier>>) -> Self {
        Self {
            tiers,
            table: &FALLBACK_TABLE,
        }
    }

    /// Resolver that only consults the local table.
    pub fn local_only() -> Self {
        Self::new(Vec::new())
    }

    pub fn tier_names(&self) -> impl Iterator<Item = &str> {
        self.tiers.iter().map(|tier| tier.name())
    }

    #[tracing::instrument(skip(self))]
    pub async fn resolve(&self, food_id: FoodId, food_label: &str) -> NutritionRecord {
        for tier in &self.tiers {
            match tier.lookup(food_id).await {
                Ok(record) => {
                    tracing::info!(tier = tier.name(), "nutrition data retrieved");
                    return record;
                }
                Err(e) => tracing::warn!(
                    tier = tier.name(),
                    unavailable = e.is_unavailable(),
                    error = %e,
                    "nutrition tier failed, falling back"
                ),
            }
        }

        let entry = self.table.entry(food_label);
        tracing::info!(key = entry.key, "using local nutrition table");
        entry.record()
    }
}

impl std::fmt::Debug for NutritionResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NutritionResolver")
            .field("tiers", &self.tier_names().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
