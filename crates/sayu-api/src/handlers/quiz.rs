use super::ApiResponse;
use crate::auth::{ApiKeyAuth, SecurityEvent, SecurityLogger};
use crate::share::{format_share, SharePayload, SharePlatform};
use crate::usage::UsageSnapshot;
use crate::{ApiError, ApiResult, AppState};
use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Query, State},
    Json,
};
use chrono::Utc;
use sayu_cache::{CacheState, Page};
use sayu_core::{
    BasicAnalysis, ContentType, FullAnalysis, Language, PublicType, PublicTypeProfile,
    RecommendationContext, RecommendedItem,
};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Artwork recommendations attached to a full analysis.
pub const FULL_ANALYSIS_RECOMMENDATIONS: usize = 5;

#[derive(Debug, Deserialize)]
pub struct LanguageQuery {
    #[serde(default, alias = "lang")]
    pub language: Language,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub responses: Vec<String>,
    #[serde(default)]
    pub language: Language,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareRequest {
    pub apt_type: String,
    pub platform: String,
    #[serde(default)]
    pub language: Language,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FullAnalysisRecommendations {
    pub cache_state: CacheState,
    pub artworks: Vec<RecommendedItem>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FullAnalysisData {
    #[serde(flatten)]
    pub analysis: FullAnalysis,
    pub recommendations: FullAnalysisRecommendations,
}

#[derive(Serialize)]
pub struct FullAnalysisResponse {
    pub success: bool,
    pub data: FullAnalysisData,
    pub usage: UsageSnapshot,
}

pub async fn public_types(
    query: Result<Query<LanguageQuery>, QueryRejection>,
) -> ApiResult<Json<ApiResponse<Vec<PublicTypeProfile>>>> {
    let Query(query) = query?;
    Ok(ApiResponse::ok(
        PublicType::ALL
            .iter()
            .map(|t| t.profile(query.language))
            .collect(),
    ))
}

pub async fn analyze_basic(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> ApiResult<Json<ApiResponse<BasicAnalysis>>> {
    let Json(request) = payload?;
    let analysis = state
        .basic_analyzer
        .analyze(&request.responses, request.language)?;
    state.metrics.record_analysis("basic");
    Ok(ApiResponse::ok(analysis))
}

pub async fn analyze_full(
    State(state): State<AppState>,
    ApiKeyAuth(identity): ApiKeyAuth,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> ApiResult<Json<FullAnalysisResponse>> {
    let Json(request) = payload?;
    let now = Utc::now();
    state
        .usage
        .ensure_available(&identity.key_id, now)
        .inspect_err(|_| {
            SecurityLogger::log_event(SecurityEvent::QuotaExceeded {
                key_fingerprint: identity.fingerprint().to_string(),
                limit: state.usage.limit(),
            })
        })?;

    let analysis = state.full_analyzer.analyze(&request.responses).await?;
    let read = state.cache.get_recommendations(
        analysis.archetype.code,
        ContentType::Artwork,
        RecommendationContext::General,
        Page::new(Some(FULL_ANALYSIS_RECOMMENDATIONS), None),
    );
    state.metrics.record_cache_read(read.is_cold());

    let usage = state.usage.record(&identity.key_id, now)?;
    state.metrics.record_analysis("full");
    info!(
        key = identity.fingerprint(),
        apt_type = %analysis.archetype.code,
        used = usage.used,
        remaining = usage.remaining,
        "Full analysis served"
    );

    Ok(Json(FullAnalysisResponse {
        success: true,
        data: FullAnalysisData {
            analysis,
            recommendations: FullAnalysisRecommendations {
                cache_state: read.cache_state,
                artworks: read.items,
            },
        },
        usage,
    }))
}

pub async fn share_result(
    State(state): State<AppState>,
    payload: Result<Json<ShareRequest>, JsonRejection>,
) -> ApiResult<Json<ApiResponse<SharePayload>>> {
    let Json(request) = payload?;
    let platform: SharePlatform = request.platform.parse().map_err(ApiError::from)?;
    let code = state.registry.parse(&request.apt_type)?;
    Ok(ApiResponse::ok(format_share(
        &state.registry,
        code,
        platform,
        request.language,
    )))
}
