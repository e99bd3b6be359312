use foodie_core::FoodTable;

/// Shared, read-only state handed to every handler.
#[derive(Debug, Clone, Copy)]
pub struct ServerState {
    pub foods: &'static FoodTable,
}

impl ServerState {
    pub fn new(foods: &'static FoodTable) -> Self {
        Self { foods }
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new(FoodTable::builtin())
    }
}
