use axum::Json;

use devmatch_core::Welcome;

/// API root greeting.
pub async fn welcome() -> Json<Welcome> {
    Json(Welcome::greeting())
}
