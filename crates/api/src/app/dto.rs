use serde::Deserialize;

// -------------------------
// Request DTOs
// -------------------------
//
// Create/update bodies are the `Item` wire shape itself (all three fields
// required), deserialized directly in the handlers.

/// Query parameters for `GET /items/price-range/`. Both bounds required.
#[derive(Debug, Deserialize)]
pub struct PriceRangeQuery {
    pub min_price: f64,
    pub max_price: f64,
}
