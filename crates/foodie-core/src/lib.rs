//! Core domain types for the foodie nutrition API.
//!
//! - [`NutrientValue`] — a nutrient amount that is either known or unknown
//! - [`FoodRecord`] — nutrient values for a single food
//! - [`FoodTable`] — the fixed, case-insensitive food lookup table
//! - [`FoodError`] — errors raised while building a table
//!
//! # Example
//!
//! ```rust
//! use foodie_core::{FoodTable, NutrientValue};
//!
//! let table = FoodTable::builtin();
//! assert_eq!(table.predict("EGG").protein, NutrientValue::Known(13.0));
//! assert_eq!(table.predict("tofu").protein, NutrientValue::Unknown);
//! ```

mod table;

pub use table::FoodTable;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Wire form of [`NutrientValue::Unknown`].
const UNKNOWN_SENTINEL: &str = "unknown";

/// Errors that can occur while building a [`FoodTable`].
#[derive(Error, Debug, PartialEq)]
pub enum FoodError {
    /// Two entries collapse to the same key once lowercased.
    #[error("Duplicate food name: {0}")]
    DuplicateName(String),

    /// Nutrient amounts must be finite and non-negative.
    #[error("Invalid nutrient value for {name}: {value}")]
    InvalidValue { name: String, value: f64 },
}

/// A single nutrient amount.
///
/// Serializes as a JSON number when known and as the string `"unknown"`
/// otherwise. Whole amounts are written as integers (`13`, not `13.0`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NutrientValue {
    /// Amount in grams per 100g.
    Known(f64),
    /// No data for this food.
    Unknown,
}

impl NutrientValue {
    pub fn is_known(&self) -> bool {
        matches!(self, NutrientValue::Known(_))
    }
}

// Largest magnitude where every integer is exactly representable in an f64.
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

impl Serialize for NutrientValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            NutrientValue::Known(v) if v.fract() == 0.0 && v.abs() <= MAX_EXACT_INT => {
                serializer.serialize_i64(v as i64)
            }
            NutrientValue::Known(v) => serializer.serialize_f64(v),
            NutrientValue::Unknown => serializer.serialize_str(UNKNOWN_SENTINEL),
        }
    }
}

/// Nutrient values for one food.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FoodRecord {
    pub protein: NutrientValue,
}

impl FoodRecord {
    pub fn new(protein: f64) -> Self {
        Self {
            protein: NutrientValue::Known(protein),
        }
    }

    /// The record returned for names missing from the table.
    pub fn unknown() -> Self {
        Self {
            protein: NutrientValue::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_whole_values_serialize_as_integers() {
        let value = serde_json::to_value(FoodRecord::new(13.0)).unwrap();
        assert_eq!(value, json!({ "protein": 13 }));
        assert_eq!(serde_json::to_string(&FoodRecord::new(27.0)).unwrap(), r#"{"protein":27}"#);
    }

    #[test]
    fn test_fractional_values_serialize_as_floats() {
        assert_eq!(serde_json::to_string(&FoodRecord::new(2.7)).unwrap(), r#"{"protein":2.7}"#);
    }

    #[test]
    fn test_unknown_serializes_as_sentinel() {
        let value = serde_json::to_value(FoodRecord::unknown()).unwrap();
        assert_eq!(value, json!({ "protein": "unknown" }));
    }

    #[test]
    fn test_is_known() {
        assert!(NutrientValue::Known(0.0).is_known());
        assert!(!NutrientValue::Unknown.is_known());
    }
}
