use std::collections::HashMap;
use std::sync::LazyLock;

use crate::{FoodError, FoodRecord};

/// Protein per 100g for the foods the service knows about.
const BUILTIN_FOODS: &[(&str, f64)] = &[("egg", 13.0), ("chicken", 27.0), ("rice", 2.7)];

static BUILTIN: LazyLock<FoodTable> = LazyLock::new(|| FoodTable {
    foods: BUILTIN_FOODS
        .iter()
        .map(|(name, protein)| (name.to_string(), FoodRecord::new(*protein)))
        .collect(),
});

/// Read-only lookup table keyed by lowercase food name.
#[derive(Debug, Clone, Default)]
pub struct FoodTable {
    foods: HashMap<String, FoodRecord>,
}

impl FoodTable {
    /// The process-wide table, initialized on first use.
    pub fn builtin() -> &'static FoodTable {
        &BUILTIN
    }

    /// Builds a table from `(name, protein)` pairs. Names are lowercased.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, FoodError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut foods = HashMap::new();
        for (name, protein) in entries {
            let key = name.as_ref().to_lowercase();
            if !protein.is_finite() || protein < 0.0 {
                return Err(FoodError::InvalidValue { name: key, value: protein });
            }
            if foods.insert(key.clone(), FoodRecord::new(protein)).is_some() {
                return Err(FoodError::DuplicateName(key));
            }
        }
        Ok(Self { foods })
    }

    /// Case-insensitive lookup. Surrounding whitespace is significant.
    pub fn lookup(&self, name: &str) -> Option<&FoodRecord> {
        self.foods.get(&name.to_lowercase())
    }

    /// Like [`lookup`](Self::lookup), falling back to [`FoodRecord::unknown`].
    pub fn predict(&self, name: &str) -> FoodRecord {
        self.lookup(name).copied().unwrap_or_else(FoodRecord::unknown)
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    /// Known food names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.foods.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}
