mod health;
mod root;

pub use health::health;
pub use root::welcome;

use crate::error::ApiError;

/// Fallback for any path without a route.
pub async fn not_found() -> ApiError {
    ApiError::not_found()
}
