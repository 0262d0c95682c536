use super::ApiResponse;
use crate::auth::{require_permission, AuthUser, Permission};
use crate::{ApiError, ApiResult, AppState};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use sayu_cache::{CacheStats, WarmupTarget};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarmupRequest {
    pub apt_type: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WarmupAccepted {
    pub success: bool,
    pub status: &'static str,
    pub job_id: Uuid,
    pub target: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidateResponse {
    pub apt_type: String,
    pub removed: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetResponse {
    pub reset: bool,
}

pub async fn cache_stats(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> ApiResult<Json<ApiResponse<CacheStats>>> {
    require_permission(
        &state,
        &user,
        Permission::ReadCacheStats,
        "GET",
        "/api/apt/cache/stats",
    )?;
    Ok(ApiResponse::ok(state.cache.stats()))
}

pub async fn reset_cache_stats(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> ApiResult<Json<ApiResponse<ResetResponse>>> {
    require_permission(
        &state,
        &user,
        Permission::ManageCache,
        "POST",
        "/api/apt/cache/stats/reset",
    )?;
    state.cache.reset_stats();
    Ok(ApiResponse::ok(ResetResponse { reset: true }))
}

/// Dispatches a background warmup and answers 202 immediately. An empty body
/// or a missing `aptType` warms every archetype.
pub async fn warmup_cache(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<WarmupAccepted>)> {
    require_permission(
        &state,
        &user,
        Permission::ManageCache,
        "POST",
        "/api/apt/cache/warmup",
    )?;

    let request: WarmupRequest = if body.iter().all(u8::is_ascii_whitespace) {
        WarmupRequest::default()
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| ApiError::Validation(format!("Invalid request body: {e}")))?
    };
    let target = match request.apt_type.as_deref() {
        Some(raw) => WarmupTarget::One(state.registry.parse(raw)?),
        None => WarmupTarget::All,
    };

    let job_id = Uuid::new_v4();
    // The handle is dropped on purpose; the task outlives this request.
    let _ = state.warmup.spawn_job(target, &job_id.to_string());
    state.metrics.record_warmup_request();
    info!(%job_id, target = %target, user_id = %user.user_id, "Cache warmup dispatched");

    Ok((
        StatusCode::ACCEPTED,
        Json(WarmupAccepted {
            success: true,
            status: "accepted",
            job_id,
            target: target.to_string(),
        }),
    ))
}

pub async fn invalidate_cache(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(apt_type): Path<String>,
) -> ApiResult<Json<ApiResponse<InvalidateResponse>>> {
    require_permission(
        &state,
        &user,
        Permission::ManageCache,
        "DELETE",
        "/api/apt/cache/{aptType}",
    )?;
    let code = state.registry.parse(&apt_type)?;
    let removed = state.cache.invalidate(code);
    Ok(ApiResponse::ok(InvalidateResponse {
        apt_type: code.to_string(),
        removed,
    }))
}
