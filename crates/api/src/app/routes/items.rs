use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};

use itemstore_core::Item;

use crate::app::{dto, errors, lock, SharedStore};

pub fn router() -> Router {
    // Paths are spelled out in full (and merged, not nested) because the
    // spec's collection route is `/items/` with a trailing slash, which
    // axum's `nest` + `"/"` cannot express.
    Router::new()
        .route("/items/", get(list_items).post(create_item))
        .route("/items/search/id/:item_id", get(get_item_by_id))
        .route("/items/search/name/:name", get(search_items_by_name))
        .route("/items/price-range/", get(items_in_price_range))
        .route("/items/:item_id", put(update_item).delete(delete_item))
}

pub async fn list_items(Extension(store): Extension<SharedStore>) -> axum::response::Response {
    let store = lock(&store);
    (StatusCode::OK, Json(store.list().to_vec())).into_response()
}

pub async fn get_item_by_id(
    Extension(store): Extension<SharedStore>,
    Path(item_id): Path<i64>,
) -> axum::response::Response {
    let store = lock(&store);
    match store.get_by_id(item_id) {
        Ok(item) => (StatusCode::OK, Json(item.clone())).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn search_items_by_name(
    Extension(store): Extension<SharedStore>,
    Path(name): Path<String>,
) -> axum::response::Response {
    let store = lock(&store);
    match store.search_by_name(&name) {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn create_item(
    Extension(store): Extension<SharedStore>,
    Json(body): Json<Item>,
) -> axum::response::Response {
    let mut store = lock(&store);
    match store.create(body) {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn update_item(
    Extension(store): Extension<SharedStore>,
    Path(item_id): Path<i64>,
    Json(body): Json<Item>,
) -> axum::response::Response {
    let mut store = lock(&store);
    match store.update(item_id, body) {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn delete_item(
    Extension(store): Extension<SharedStore>,
    Path(item_id): Path<i64>,
) -> axum::response::Response {
    let mut store = lock(&store);
    match store.delete(item_id) {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({"detail": "Item deleted successfully"})),
        )
            .into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn items_in_price_range(
    Extension(store): Extension<SharedStore>,
    Query(range): Query<dto::PriceRangeQuery>,
) -> axum::response::Response {
    let store = lock(&store);
    match store.search_by_price_range(range.min_price, range.max_price) {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}
