//! The in-memory item collection and its operations.

use crate::error::{StoreError, StoreResult};
use crate::item::Item;

/// Ordered, process-lifetime collection of [`Item`]s.
///
/// Insertion order is preserved and reflected by [`ItemStore::list`]. Every
/// operation is a linear scan with first-match semantics; id uniqueness is
/// enforced on create only. `update` deliberately replaces the record
/// wholesale (including its id) without re-checking uniqueness, so a store
/// can hold duplicate ids after an id-drifting update — lookups then resolve
/// to the earliest record in sequence order.
///
/// The store has no interior locking. Callers running operations from
/// concurrent tasks must serialize access themselves (the API layer wraps
/// the store in a mutex held for each complete operation).
#[derive(Debug, Default)]
pub struct ItemStore {
    items: Vec<Item>,
}

impl ItemStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items, in insertion order. Never fails; an empty store lists `[]`.
    pub fn list(&self) -> &[Item] {
        &self.items
    }

    /// First item whose id equals `id`.
    pub fn get_by_id(&self, id: i64) -> StoreResult<&Item> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .ok_or_else(|| StoreError::not_found("Item not found"))
    }

    /// Case-insensitive substring search over item names, in sequence order.
    ///
    /// Zero matches is an error, not an empty list; callers distinguish
    /// "nothing matched" from "matched" by the result variant.
    pub fn search_by_name(&self, query: &str) -> StoreResult<Vec<Item>> {
        if query.is_empty() {
            return Err(StoreError::invalid_argument("Name parameter is required"));
        }

        let needle = query.to_lowercase();
        let matches: Vec<Item> = self
            .items
            .iter()
            .filter(|item| item.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        if matches.is_empty() {
            return Err(StoreError::not_found("No items found matching the name"));
        }
        Ok(matches)
    }

    /// Append `item`, rejecting a duplicate id anywhere in the sequence.
    ///
    /// On failure the store is untouched. Name and price are not validated.
    pub fn create(&mut self, item: Item) -> StoreResult<Item> {
        if self.items.iter().any(|existing| existing.id == item.id) {
            return Err(StoreError::conflict("Item with this ID already exists"));
        }

        self.items.push(item.clone());
        Ok(item)
    }

    /// Replace the first item whose id equals the path `id` with `new_item`,
    /// at the same sequence position.
    ///
    /// The replacement is wholesale: the stored id becomes `new_item.id`,
    /// which may differ from `id` and may collide with another record (not
    /// checked). Returns the item as stored.
    pub fn update(&mut self, id: i64, new_item: Item) -> StoreResult<Item> {
        let slot = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| StoreError::not_found("Item not found"))?;

        *slot = new_item.clone();
        Ok(new_item)
    }

    /// Remove the first item whose id equals `id`, preserving the relative
    /// order of the remaining items.
    pub fn delete(&mut self, id: i64) -> StoreResult<()> {
        let position = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| StoreError::not_found("Item not found"))?;

        self.items.remove(position);
        Ok(())
    }

    /// All items with `min <= price <= max` (inclusive both ends), in
    /// sequence order. Bounds must be non-negative and ordered.
    pub fn search_by_price_range(&self, min: f64, max: f64) -> StoreResult<Vec<Item>> {
        if min < 0.0 || max < 0.0 {
            return Err(StoreError::invalid_argument("Price values must be non-negative"));
        }
        if min > max {
            return Err(StoreError::invalid_argument(
                "Minimum price cannot be greater than maximum price",
            ));
        }

        let matches: Vec<Item> = self
            .items
            .iter()
            .filter(|item| min <= item.price && item.price <= max)
            .cloned()
            .collect();

        if matches.is_empty() {
            return Err(StoreError::not_found(
                "No items found in the specified price range",
            ));
        }
        Ok(matches)
    }
}
