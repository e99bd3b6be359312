use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use foodie_core::FoodRecord;
use tracing::warn;

use crate::dto::PredictParams;
use crate::error::AppError;
use crate::services::nutrition;
use crate::state::ServerState;

/// POST /predict?food_name=... - Look up protein content for a food.
pub async fn predict(
    State(state): State<ServerState>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<FoodRecord>, AppError> {
    let Query(pairs) = pairs.map_err(|e| {
        warn!("Rejected predict request: {}", e);
        e
    })?;

    let params = PredictParams::from_pairs(pairs).ok_or_else(|| {
        warn!("Rejected predict request: missing food_name");
        AppError::Validation("missing query parameter `food_name`".into())
    })?;

    Ok(Json(nutrition::predict(&state, &params.food_name)))
}
