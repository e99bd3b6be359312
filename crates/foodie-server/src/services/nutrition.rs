//! Nutrition lookup service.

use foodie_core::FoodRecord;
use tracing::debug;

use crate::state::ServerState;

/// Resolves a food name against the table, falling back to the unknown record.
pub fn predict(state: &ServerState, food_name: &str) -> FoodRecord {
    let record = state.foods.predict(food_name);
    debug!(
        food_name = %food_name,
        known = record.protein.is_known(),
        "Resolved food lookup"
    );
    record
}
