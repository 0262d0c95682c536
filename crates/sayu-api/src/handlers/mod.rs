pub mod apt;
pub mod cache;
pub mod health;
pub mod matching;
pub mod quiz;

pub use apt::*;
pub use cache::*;
pub use health::*;
pub use matching::*;
pub use quiz::*;

use axum::Json;
use serde::Serialize;

/// Success envelope shared by every JSON endpoint.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data,
        })
    }
}
