//! `itemstore-core` — pure domain: the item record and its in-memory store.
//!
//! This crate contains **pure domain** state and operations (no HTTP, no
//! runtime concerns). The HTTP layer lives in `itemstore-api`.

pub mod error;
pub mod item;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use item::Item;
pub use store::ItemStore;
