use serde::Serialize;

// === HTTP DTOs ===

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}

/// Query string for `POST /predict?food_name=...`.
#[derive(Debug, PartialEq)]
pub struct PredictParams {
    pub food_name: String,
}

impl PredictParams {
    /// Picks `food_name` out of raw query pairs. A repeated key resolves to
    /// its last occurrence.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Option<Self> {
        pairs
            .into_iter()
            .rev()
            .find(|(key, _)| key == "food_name")
            .map(|(_, food_name)| Self { food_name })
    }
}
