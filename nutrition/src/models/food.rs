use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Display, From, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct FoodId(i64);

impl FoodId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }
}

/// Top recognition result for an uploaded image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognizedFood {
    pub id: FoodId,
    pub name: String,
}

impl RecognizedFood {
    pub fn new(id: FoodId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
