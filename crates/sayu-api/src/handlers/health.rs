use crate::{ApiResult, AppState};
use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use prometheus::{Encoder, TextEncoder};
use serde::Serialize;

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: i64,
    pub uptime_seconds: i64,
    pub cache: CacheHealth,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CacheHealth {
    pub entries: usize,
    pub warmups_in_flight: usize,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let now = Utc::now();
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: now.timestamp(),
        uptime_seconds: (now - state.started_at).num_seconds(),
        cache: CacheHealth {
            entries: state.cache.len(),
            warmups_in_flight: state.warmup.in_flight(),
        },
    })
}

pub async fn metrics(State(state): State<AppState>) -> ApiResult<Response> {
    let body = state.metrics.render(state.cache.len())?;
    let mut response = body.into_response();
    if let Ok(content_type) = HeaderValue::from_str(TextEncoder::new().format_type()) {
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, content_type);
    }
    Ok(response)
}
