use super::ApiResponse;
use crate::auth::AuthUser;
use crate::{ApiResult, AppState};
use axum::{
    extract::{Path, State},
    Json,
};
use sayu_core::{CompatibilityScore, PersonalityComparison, SayuError};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCompatibilityResponse {
    pub user_apt_type: String,
    pub target_apt_type: String,
    pub compatibility: CompatibilityScore,
    pub comparison: PersonalityComparison,
}

/// Scores the caller against `target`. The caller's archetype comes from the
/// token when present, otherwise from their stored profile.
pub async fn apt_compatibility(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(target): Path<String>,
) -> ApiResult<Json<ApiResponse<UserCompatibilityResponse>>> {
    let target = state.registry.parse(&target)?;
    let source = match user.apt_type {
        Some(code) => code,
        None => state
            .profiles
            .archetype_of(&user.user_id)
            .await?
            .ok_or_else(|| {
                SayuError::NotFound(format!(
                    "No APT type recorded for user {}",
                    user.user_id
                ))
            })?,
    };

    let compatibility = state.scorer.score(source, target);
    let comparison = state.scorer.compare(source, target);
    Ok(ApiResponse::ok(UserCompatibilityResponse {
        user_apt_type: source.to_string(),
        target_apt_type: target.to_string(),
        compatibility,
        comparison,
    }))
}
