use super::ApiResponse;
use crate::auth::{require_permission, AuthUser, Permission};
use crate::{ApiError, ApiResult, AppState};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use sayu_cache::{CacheRead, Page};
use sayu_core::{
    Archetype, ArtworkMatch, BehaviorEvent, BehaviorOutcome, CompatibilityScore, ContentType,
    MatchSummary, PersonalityComparison, RecommendationContext, SayuError, ShareableCard,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_BEST_MATCHES: usize = 5;
pub const DEFAULT_CHALLENGING_MATCHES: usize = 3;
pub const MAX_BEHAVIOR_BATCH: usize = 100;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeListResponse {
    pub types: Vec<Archetype>,
    pub total: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDetailResponse {
    #[serde(flatten)]
    pub archetype: Archetype,
    pub shareable_card: ShareableCard,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeMatchesResponse {
    pub apt_type: String,
    pub best_matches: Vec<MatchSummary>,
    pub challenging_matches: Vec<MatchSummary>,
}

#[derive(Debug, Deserialize)]
pub struct MatchesQuery {
    pub best: Option<usize>,
    pub challenging: Option<usize>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityResponse {
    pub compatibility: CompatibilityScore,
    pub comparison: PersonalityComparison,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkMatchQuery {
    pub apt_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub context: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

/// A single event or a batch under `events`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum BehaviorPayload {
    Batch { events: Vec<BehaviorEvent> },
    Single(BehaviorEvent),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BehaviorResponse {
    pub recorded: usize,
    pub outcomes: Vec<BehaviorOutcome>,
}

pub async fn list_types(State(state): State<AppState>) -> Json<ApiResponse<TypeListResponse>> {
    let types = state.registry.all().to_vec();
    ApiResponse::ok(TypeListResponse {
        total: types.len(),
        types,
    })
}

pub async fn get_type(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> ApiResult<Json<ApiResponse<TypeDetailResponse>>> {
    let archetype = state.registry.get(&code)?.clone();
    let shareable_card = state.registry.shareable_card(archetype.code);
    Ok(ApiResponse::ok(TypeDetailResponse {
        archetype,
        shareable_card,
    }))
}

pub async fn type_matches(
    State(state): State<AppState>,
    Path(code): Path<String>,
    query: Result<Query<MatchesQuery>, QueryRejection>,
) -> ApiResult<Json<ApiResponse<TypeMatchesResponse>>> {
    let Query(query) = query?;
    let code = state.registry.parse(&code)?;
    Ok(ApiResponse::ok(TypeMatchesResponse {
        apt_type: code.to_string(),
        best_matches: state
            .scorer
            .best_matches(code, query.best.unwrap_or(DEFAULT_BEST_MATCHES)),
        challenging_matches: state.scorer.challenging_matches(
            code,
            query.challenging.unwrap_or(DEFAULT_CHALLENGING_MATCHES),
        ),
    }))
}

pub async fn get_compatibility(
    State(state): State<AppState>,
    Path((source, target)): Path<(String, String)>,
) -> ApiResult<Json<ApiResponse<CompatibilityResponse>>> {
    let compatibility = state.scorer.get_compatibility(&source, &target)?;
    let comparison = state
        .scorer
        .compare(compatibility.source, compatibility.target);
    Ok(ApiResponse::ok(CompatibilityResponse {
        compatibility,
        comparison,
    }))
}

pub async fn artwork_match(
    State(state): State<AppState>,
    Path(artwork_id): Path<String>,
    query: Result<Query<ArtworkMatchQuery>, QueryRejection>,
) -> ApiResult<Json<ApiResponse<ArtworkMatch>>> {
    let Query(query) = query?;
    let raw = query
        .apt_type
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| ApiError::Validation("aptType query parameter is required".to_string()))?;
    let archetype = state.registry.get(&raw)?;

    let artwork = state
        .catalog
        .artwork(&artwork_id)
        .await?
        .ok_or_else(|| SayuError::NotFound(format!("Artwork not found: {artwork_id}")))?;

    Ok(ApiResponse::ok(sayu_core::artwork_match(archetype, &artwork)))
}

pub async fn get_recommendations(
    State(state): State<AppState>,
    Path((apt_type, content_type)): Path<(String, String)>,
    query: Result<Query<RecommendationQuery>, QueryRejection>,
) -> ApiResult<Json<ApiResponse<CacheRead>>> {
    let Query(query) = query?;
    let code = state.registry.parse(&apt_type)?;
    let content_type: ContentType = content_type.parse()?;
    let context: RecommendationContext = query.context.as_deref().unwrap_or("").parse()?;

    let read = state.cache.get_recommendations(
        code,
        content_type,
        context,
        Page::new(query.limit, query.offset),
    );
    state.metrics.record_cache_read(read.is_cold());
    debug!(
        apt_type = %code,
        content_type = content_type.as_str(),
        context = context.as_str(),
        cache_state = ?read.cache_state,
        items = read.items.len(),
        "Served recommendations"
    );
    Ok(ApiResponse::ok(read))
}

pub async fn record_behavior(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    payload: Result<Json<BehaviorPayload>, JsonRejection>,
) -> ApiResult<Json<ApiResponse<BehaviorResponse>>> {
    let Json(payload) = payload?;
    require_permission(
        &state,
        &user,
        Permission::RecordBehavior,
        "POST",
        "/api/apt/behavior",
    )?;

    let events = match payload {
        BehaviorPayload::Batch { events } => events,
        BehaviorPayload::Single(event) => vec![event],
    };
    if events.is_empty() {
        return Err(ApiError::Validation("At least one event is required".to_string()));
    }
    if events.len() > MAX_BEHAVIOR_BATCH {
        return Err(ApiError::Validation(format!(
            "At most {MAX_BEHAVIOR_BATCH} events per request"
        )));
    }

    let outcomes = state.behavior.record_batch(&user.user_id, &events).await?;

    Ok(ApiResponse::ok(BehaviorResponse {
        recorded: outcomes.len(),
        outcomes,
    }))
}
