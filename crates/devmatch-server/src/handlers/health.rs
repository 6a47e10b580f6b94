use axum::Json;

use devmatch_core::Health;

/// Health check endpoint.
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}
