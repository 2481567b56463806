use std::collections::HashMap;

use nutrition::BoxFuture;
use tokio::sync::RwLock;

use crate::models::health_profile::{HealthProfile, UserId};

/// Storage for user health profiles, handed to request handlers through `AppState`.
pub trait ProfileStore: Send + Sync {
    /// Saves `profile`, replacing any profile previously saved for the same user.
    fn save(&self, profile: HealthProfile) -> BoxFuture<'_, ()>;

    fn get<'a>(&'a self, user_id: &'a UserId) -> BoxFuture<'a, Option<HealthProfile>>;
}

/// Profiles kept in process memory; everything is lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    profiles: RwLock<HashMap<UserId, HealthProfile>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileStore for InMemoryProfileStore {
    fn save(&self, profile: HealthProfile) -> BoxFuture<'_, ()> {
        Box::pin(async move {
            let mut profiles = self.profiles.write().await;
            profiles.insert(profile.user_id.clone(), profile);
        })
    }

    fn get<'a>(&'a self, user_id: &'a UserId) -> BoxFuture<'a, Option<HealthProfile>> {
        Box::pin(async move { self.profiles.read().await.get(user_id).cloned() })
    }
}
