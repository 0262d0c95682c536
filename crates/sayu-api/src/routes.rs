use crate::{api_key_rate_limit, handlers, public_rate_limit, track_requests, AppState};
use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub fn create_router(state: AppState) -> Router {
    // Rate limits apply only to the analysis endpoints.
    let basic_analysis = Router::new()
        .route("/api/sayu-quiz/analyze-basic", post(handlers::analyze_basic))
        .route_layer(from_fn_with_state(state.clone(), public_rate_limit));

    let full_analysis = Router::new()
        .route("/api/sayu-quiz/analyze", post(handlers::analyze_full))
        .route_layer(from_fn_with_state(state.clone(), api_key_rate_limit));

    Router::new()
        // System
        .route("/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics))

        // Archetypes and compatibility
        .route("/api/apt/types", get(handlers::list_types))
        .route("/api/apt/types/{code}", get(handlers::get_type))
        .route("/api/apt/types/{code}/matches", get(handlers::type_matches))
        .route(
            "/api/apt/compatibility/{source}/{target}",
            get(handlers::get_compatibility),
        )
        .route("/api/apt/artwork/{artworkId}/match", get(handlers::artwork_match))

        // Recommendations and behaviour
        .route(
            "/api/apt/recommendations/{aptType}/{contentType}",
            get(handlers::get_recommendations),
        )
        .route("/api/apt/behavior", post(handlers::record_behavior))

        // Cache administration
        .route("/api/apt/cache/stats", get(handlers::cache_stats))
        .route("/api/apt/cache/stats/reset", post(handlers::reset_cache_stats))
        .route("/api/apt/cache/warmup", post(handlers::warmup_cache))
        .route("/api/apt/cache/{aptType}", delete(handlers::invalidate_cache))

        // Matching
        .route(
            "/api/matching/apt-compatibility/{targetAptType}",
            get(handlers::apt_compatibility),
        )

        // Quiz
        .route("/api/sayu-quiz/types", get(handlers::public_types))
        .route("/api/sayu-quiz/share", post(handlers::share_result))
        .merge(basic_analysis)
        .merge(full_analysis)

        .layer(from_fn_with_state(state.clone(), track_requests))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
