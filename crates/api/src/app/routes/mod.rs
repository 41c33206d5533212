use axum::{routing::get, Router};

pub mod items;
pub mod system;

/// Router for the full HTTP surface.
pub fn router() -> Router {
    Router::new()
        .route("/", get(system::welcome))
        .merge(items::router())
}
