use axum::{response::IntoResponse, Json};

/// Liveness/welcome route.
pub async fn welcome() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Welcome to the Test Item Store API!",
    }))
}
