//! HTTP application wiring (Axum router + shared store).
//!
//! Layout:
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs
//! - `errors.rs`: consistent error responses

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum::{Extension, Router};
use tower::ServiceBuilder;

use itemstore_core::ItemStore;

pub mod dto;
pub mod errors;
pub mod routes;

/// The store shared by all handlers.
///
/// The mutex is held for the duration of each store operation, so requests
/// observe the sequential semantics the store is specified against even when
/// the runtime dispatches them concurrently.
pub type SharedStore = Arc<Mutex<ItemStore>>;

/// Acquire the store lock.
///
/// A poisoned lock only means some handler panicked between requests; no
/// store operation mutates before it has finished validating, so the data is
/// still consistent and the poison flag can be ignored.
pub(crate) fn lock(store: &SharedStore) -> MutexGuard<'_, ItemStore> {
    store.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Build the full HTTP router over a fresh, empty store (public entrypoint
/// used by `main.rs` and the black-box tests).
pub fn build_app() -> Router {
    let store: SharedStore = Arc::new(Mutex::new(ItemStore::new()));

    routes::router().layer(ServiceBuilder::new().layer(Extension(store)))
}
