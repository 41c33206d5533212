use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use itemstore_core::StoreError;

/// Map a store failure to its HTTP response.
///
/// The original service mapped Conflict to 400 alongside validation
/// failures; callers distinguish the cases by detail string only.
pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    match err {
        StoreError::InvalidArgument(msg) => json_detail(StatusCode::BAD_REQUEST, msg),
        StoreError::Conflict(msg) => json_detail(StatusCode::BAD_REQUEST, msg),
        StoreError::NotFound(msg) => json_detail(StatusCode::NOT_FOUND, msg),
    }
}

pub fn json_detail(status: StatusCode, detail: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "detail": detail.into(),
        })),
    )
        .into_response()
}
