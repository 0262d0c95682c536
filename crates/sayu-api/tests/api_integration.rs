use axum::http::{HeaderName, HeaderValue};
use axum_test::TestServer;
use sayu_api::{create_router, AppState, Permission, ADMIN_ROLE};
use sayu_cache::WarmupTarget;
use sayu_core::{ArchetypeCode, ConfigManager, ContentType, SayuConfig};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

const TEST_KEY: &str = "sayu_integration_test_key_0001";

fn test_config() -> SayuConfig {
    let mut config = SayuConfig::default();
    config.auth.jwt_secret = "integration-test-secret".to_string();
    config.auth.api_keys = vec![TEST_KEY.to_string()];
    config
}

async fn server_with(config: SayuConfig) -> (TestServer, AppState) {
    let config = Arc::new(ConfigManager::from_config(config).expect("valid config"));
    let state = AppState::new(config).await.expect("app state");
    let server = TestServer::new(create_router(state.clone())).expect("test server");
    (server, state)
}

async fn server() -> (TestServer, AppState) {
    server_with(test_config()).await
}

fn code(raw: &str) -> ArchetypeCode {
    ArchetypeCode::parse(raw).unwrap()
}

fn admin_token(state: &AppState) -> String {
    state
        .jwt
        .issue("admin-1", "Admin", None, &[ADMIN_ROLE], &[])
        .unwrap()
}

fn user_token(state: &AppState, apt_type: Option<&str>) -> String {
    state
        .jwt
        .issue("user-1", "Visitor", apt_type.map(code), &["user"], &[])
        .unwrap()
}

fn api_key_header() -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("x-api-key"),
        HeaderValue::from_static(TEST_KEY),
    )
}

async fn wait_until_warm(state: &AppState, raw: &str) {
    for _ in 0..200 {
        if state.cache.is_warm(code(raw), ContentType::Artwork) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("{raw} never became warm");
}

#[tokio::test]
async fn health_reports_cache_status() {
    let (server, _) = server().await;

    let resp = server.get("/health").await;
    assert_eq!(resp.status_code(), 200);
    let body: Value = resp.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["cache"]["entries"], 0);
}

#[tokio::test]
async fn metrics_exposes_request_counters() {
    let (server, _) = server().await;

    server.get("/api/apt/types").await;
    let resp = server.get("/metrics").await;
    assert_eq!(resp.status_code(), 200);
    let text = resp.text();
    assert!(text.contains("sayu_http_requests_total"));
    assert!(text.contains("group=\"apt\""));
}

#[tokio::test]
async fn lists_all_sixteen_types() {
    let (server, _) = server().await;

    let body: Value = server.get("/api/apt/types").await.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["total"], 16);
    assert_eq!(body["data"]["types"].as_array().unwrap().len(), 16);
}

#[tokio::test]
async fn type_lookup_is_case_insensitive() {
    let (server, _) = server().await;

    let resp = server.get("/api/apt/types/laef").await;
    assert_eq!(resp.status_code(), 200);
    let body: Value = resp.json();
    assert_eq!(body["data"]["code"], "LAEF");
    assert!(body["data"]["shareableCard"]["url"]
        .as_str()
        .unwrap()
        .ends_with("LAEF.png"));
}

#[tokio::test]
async fn unknown_type_lists_valid_codes() {
    let (server, _) = server().await;

    let resp = server.get("/api/apt/types/XXXX").await;
    assert_eq!(resp.status_code(), 404);
    let body: Value = resp.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "UNKNOWN_APT_TYPE");
    assert_eq!(body["validTypes"].as_array().unwrap().len(), 16);
}

#[tokio::test]
async fn compatibility_is_symmetric_over_http() {
    let (server, _) = server().await;

    let forward: Value = server.get("/api/apt/compatibility/LAEF/SAEF").await.json();
    let reverse: Value = server.get("/api/apt/compatibility/SAEF/LAEF").await.json();
    assert_eq!(forward["data"]["compatibility"]["score"], 95);
    assert_eq!(
        forward["data"]["compatibility"]["score"],
        reverse["data"]["compatibility"]["score"]
    );
    assert!(forward["data"]["comparison"].is_object());
}

#[tokio::test]
async fn type_matches_honours_counts() {
    let (server, _) = server().await;

    let body: Value = server
        .get("/api/apt/types/SRMC/matches")
        .add_query_param("best", 2)
        .await
        .json();
    assert_eq!(body["data"]["aptType"], "SRMC");
    assert_eq!(body["data"]["bestMatches"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn artwork_match_requires_apt_type() {
    let (server, _) = server().await;

    let missing = server.get("/api/apt/artwork/art-starry-night/match").await;
    assert_eq!(missing.status_code(), 400);

    let unknown = server
        .get("/api/apt/artwork/does-not-exist/match")
        .add_query_param("aptType", "LAEF")
        .await;
    assert_eq!(unknown.status_code(), 404);

    let ok = server
        .get("/api/apt/artwork/art-starry-night/match")
        .add_query_param("aptType", "LAEF")
        .await;
    assert_eq!(ok.status_code(), 200);
    let body: Value = ok.json();
    assert!(body["data"].is_object());
}

#[tokio::test]
async fn recommendations_are_cold_until_warmed() {
    let (server, state) = server().await;

    let cold: Value = server
        .get("/api/apt/recommendations/LAEF/artwork")
        .await
        .json();
    assert_eq!(cold["data"]["cacheState"], "cold");
    assert_eq!(cold["data"]["items"].as_array().unwrap().len(), 0);

    state.cache.warmup(code("LAEF")).await.unwrap();

    let warm: Value = server
        .get("/api/apt/recommendations/LAEF/artworks")
        .add_query_param("limit", 5)
        .await
        .json();
    assert_eq!(warm["data"]["cacheState"], "warm");
    assert_eq!(warm["data"]["items"].as_array().unwrap().len(), 5);
    assert_eq!(warm["data"]["limit"], 5);
}

#[tokio::test]
async fn recommendations_reject_unknown_content_type() {
    let (server, _) = server().await;

    let resp = server.get("/api/apt/recommendations/LAEF/podcast").await;
    assert_eq!(resp.status_code(), 400);
    let body: Value = resp.json();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn cache_admin_routes_require_admin() {
    let (server, state) = server().await;

    let anonymous = server.get("/api/apt/cache/stats").await;
    assert_eq!(anonymous.status_code(), 401);

    let forbidden = server
        .get("/api/apt/cache/stats")
        .authorization_bearer(user_token(&state, None))
        .await;
    assert_eq!(forbidden.status_code(), 403);

    let ok = server
        .get("/api/apt/cache/stats")
        .authorization_bearer(admin_token(&state))
        .await;
    assert_eq!(ok.status_code(), 200);
    let body: Value = ok.json();
    assert_eq!(body["data"]["entries"], 0);
}

#[tokio::test]
async fn explicit_permission_grants_stats_access() {
    let (server, state) = server().await;
    let token = state
        .jwt
        .issue("ops-1", "Ops", None, &["user"], &[Permission::ReadCacheStats])
        .unwrap();

    let stats = server
        .get("/api/apt/cache/stats")
        .authorization_bearer(token.clone())
        .await;
    assert_eq!(stats.status_code(), 200);

    let reset = server
        .post("/api/apt/cache/stats/reset")
        .authorization_bearer(token)
        .await;
    assert_eq!(reset.status_code(), 403);
}

#[tokio::test]
async fn warmup_is_accepted_and_invalidate_cools() {
    let (server, state) = server().await;
    let token = admin_token(&state);

    let resp = server
        .post("/api/apt/cache/warmup")
        .authorization_bearer(token.clone())
        .json(&json!({ "aptType": "srmc" }))
        .await;
    assert_eq!(resp.status_code(), 202);
    let body: Value = resp.json();
    assert_eq!(body["status"], "accepted");
    assert_eq!(body["target"], "SRMC");
    assert!(body["jobId"].is_string());

    wait_until_warm(&state, "SRMC").await;

    let removed: Value = server
        .delete("/api/apt/cache/SRMC")
        .authorization_bearer(token)
        .await
        .json();
    assert_eq!(removed["data"]["removed"], 2);

    let read: Value = server
        .get("/api/apt/recommendations/SRMC/exhibition")
        .await
        .json();
    assert_eq!(read["data"]["cacheState"], "cold");
}

#[tokio::test]
async fn warmup_without_body_targets_everything() {
    let (server, state) = server().await;

    let resp = server
        .post("/api/apt/cache/warmup")
        .authorization_bearer(admin_token(&state))
        .await;
    assert_eq!(resp.status_code(), 202);
    let body: Value = resp.json();
    assert_eq!(body["target"], WarmupTarget::All.to_string());

    for raw in ["LAEF", "SRMC"] {
        wait_until_warm(&state, raw).await;
    }
}

#[tokio::test]
async fn warmup_rejects_unknown_type() {
    let (server, state) = server().await;

    let resp = server
        .post("/api/apt/cache/warmup")
        .authorization_bearer(admin_token(&state))
        .json(&json!({ "aptType": "ZZZZ" }))
        .await;
    assert_eq!(resp.status_code(), 404);
}

#[tokio::test]
async fn basic_analysis_is_public() {
    let (server, _) = server().await;

    let resp = server
        .post("/api/sayu-quiz/analyze-basic")
        .json(&json!({
            "responses": ["EXPLORE", "Adventure", "DIVERSE"],
            "language": "en"
        }))
        .await;
    assert_eq!(resp.status_code(), 200);
    let body: Value = resp.json();
    assert_eq!(body["data"]["primaryType"], "EXPLORER");
    assert_eq!(body["data"]["confidence"], 100);
}

#[tokio::test]
async fn basic_analysis_rejects_short_input() {
    let (server, _) = server().await;

    let resp = server
        .post("/api/sayu-quiz/analyze-basic")
        .json(&json!({ "responses": ["새로운", "다양한"] }))
        .await;
    assert_eq!(resp.status_code(), 400);

    let malformed = server
        .post("/api/sayu-quiz/analyze-basic")
        .json(&json!({ "answers": [] }))
        .await;
    assert_eq!(malformed.status_code(), 400);
}

#[tokio::test]
async fn public_types_follow_language() {
    let (server, _) = server().await;

    let body: Value = server
        .get("/api/sayu-quiz/types")
        .add_query_param("lang", "en")
        .await
        .json();
    let types = body["data"].as_array().unwrap();
    assert_eq!(types.len(), 4);
}

#[tokio::test]
async fn full_analysis_requires_api_key() {
    let (server, _) = server().await;
    let request = json!({ "responses": ["음", "글쎄요", "잘 모르겠어요"] });

    let missing = server.post("/api/sayu-quiz/analyze").json(&request).await;
    assert_eq!(missing.status_code(), 401);

    let (name, _) = api_key_header();
    let wrong = server
        .post("/api/sayu-quiz/analyze")
        .add_header(name, HeaderValue::from_static("sayu_not_a_configured_key"))
        .json(&request)
        .await;
    assert_eq!(wrong.status_code(), 401);
}

#[tokio::test]
async fn full_analysis_reports_usage() {
    let (server, state) = server().await;
    state.cache.warmup(code("SRMC")).await.unwrap();
    let (name, value) = api_key_header();

    let resp = server
        .post("/api/sayu-quiz/analyze")
        .add_header(name, value)
        .json(&json!({
            "responses": [
                "친구들과 함께 대화하며 보는 게 좋아요",
                "인물 초상화의 역사적 배경을 해석하는 걸 즐겨요",
                "계획을 세우고 순서대로 관람해요"
            ]
        }))
        .await;
    assert_eq!(resp.status_code(), 200);
    let body: Value = resp.json();
    assert_eq!(body["data"]["archetype"]["code"], "SRMC");
    assert_eq!(body["data"]["recommendations"]["cacheState"], "warm");
    assert_eq!(
        body["data"]["recommendations"]["artworks"]
            .as_array()
            .unwrap()
            .len(),
        5
    );
    assert_eq!(body["usage"]["used"], 1);
    assert_eq!(body["usage"]["remaining"], 9_999);
}

#[tokio::test]
async fn full_analysis_enforces_monthly_quota() {
    let mut config = test_config();
    config.auth.monthly_quota = 1;
    let (server, _) = server_with(config).await;
    let request = json!({ "responses": ["음", "글쎄요", "잘 모르겠어요"] });

    let (name, value) = api_key_header();
    let first = server
        .post("/api/sayu-quiz/analyze")
        .add_header(name.clone(), value.clone())
        .json(&request)
        .await;
    assert_eq!(first.status_code(), 200);

    let second = server
        .post("/api/sayu-quiz/analyze")
        .add_header(name, value)
        .json(&request)
        .await;
    assert_eq!(second.status_code(), 429);
    let body: Value = second.json();
    assert_eq!(body["error"]["code"], "QUOTA_EXCEEDED");
    assert_eq!(body["usage"]["remaining"], 0);
}

#[tokio::test]
async fn basic_analysis_is_rate_limited() {
    let mut config = test_config();
    config.rate_limit.public_per_window = 2;
    let (server, _) = server_with(config).await;
    let request = json!({ "responses": ["새로운", "혁신", "미래"] });

    for _ in 0..2 {
        let resp = server.post("/api/sayu-quiz/analyze-basic").json(&request).await;
        assert_eq!(resp.status_code(), 200);
    }
    let limited = server.post("/api/sayu-quiz/analyze-basic").json(&request).await;
    assert_eq!(limited.status_code(), 429);
    assert!(limited.headers().get("retry-after").is_some());

    // Other routes are not limited.
    assert_eq!(server.get("/api/apt/types").await.status_code(), 200);
}

fn forwarded_for(ip: &'static str) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("x-forwarded-for"),
        HeaderValue::from_static(ip),
    )
}

#[tokio::test]
async fn forwarded_for_is_ignored_without_trusted_proxy() {
    let mut config = test_config();
    config.rate_limit.public_per_window = 2;
    let (server, _) = server_with(config).await;
    let request = json!({ "responses": ["새로운", "혁신", "미래"] });

    // Rotating the header does not buy a fresh bucket.
    for ip in ["198.51.100.1", "198.51.100.2"] {
        let (name, value) = forwarded_for(ip);
        let resp = server
            .post("/api/sayu-quiz/analyze-basic")
            .add_header(name, value)
            .json(&request)
            .await;
        assert_eq!(resp.status_code(), 200);
    }
    let (name, value) = forwarded_for("198.51.100.3");
    let limited = server
        .post("/api/sayu-quiz/analyze-basic")
        .add_header(name, value)
        .json(&request)
        .await;
    assert_eq!(limited.status_code(), 429);
}

#[tokio::test]
async fn trusted_proxy_keys_limits_on_forwarded_for() {
    let mut config = test_config();
    config.rate_limit.public_per_window = 1;
    config.rate_limit.trusted_proxy = true;
    let (server, state) = server_with(config).await;
    let request = json!({ "responses": ["새로운", "혁신", "미래"] });

    for ip in ["198.51.100.1", "198.51.100.2"] {
        let (name, value) = forwarded_for(ip);
        let resp = server
            .post("/api/sayu-quiz/analyze-basic")
            .add_header(name, value)
            .json(&request)
            .await;
        assert_eq!(resp.status_code(), 200);
    }
    let (name, value) = forwarded_for("198.51.100.1");
    let repeat = server
        .post("/api/sayu-quiz/analyze-basic")
        .add_header(name, value)
        .json(&request)
        .await;
    assert_eq!(repeat.status_code(), 429);
    assert_eq!(state.rate_limiters.len(), 2);
}

#[tokio::test]
async fn behavior_requires_token_and_updates_profile() {
    let (server, state) = server().await;

    let anonymous = server
        .post("/api/apt/behavior")
        .json(&json!({ "type": "artwork_like", "artworkId": "art-starry-night" }))
        .await;
    assert_eq!(anonymous.status_code(), 401);

    let token = user_token(&state, None);
    let resp = server
        .post("/api/apt/behavior")
        .authorization_bearer(token.clone())
        .json(&json!({
            "events": [
                { "type": "quiz_completed", "aptType": "SAEF" },
                { "type": "artwork_view", "artworkId": "art-starry-night", "durationSecs": 30 }
            ]
        }))
        .await;
    assert_eq!(resp.status_code(), 200);
    let body: Value = resp.json();
    assert_eq!(body["data"]["recorded"], 2);

    // The stored profile now drives the matching endpoint.
    let matched: Value = server
        .get("/api/matching/apt-compatibility/LAEF")
        .authorization_bearer(token)
        .await
        .json();
    assert_eq!(matched["data"]["userAptType"], "SAEF");
    assert_eq!(matched["data"]["compatibility"]["score"], 95);
}

#[tokio::test]
async fn behavior_rejects_empty_batch() {
    let (server, state) = server().await;

    let resp = server
        .post("/api/apt/behavior")
        .authorization_bearer(user_token(&state, None))
        .json(&json!({ "events": [] }))
        .await;
    assert_eq!(resp.status_code(), 400);
}

#[tokio::test]
async fn behavior_batch_with_unknown_artwork_changes_nothing() {
    let (server, state) = server().await;
    let token = user_token(&state, None);

    let resp = server
        .post("/api/apt/behavior")
        .authorization_bearer(token.clone())
        .json(&json!({
            "events": [
                { "type": "quiz_completed", "aptType": "SAEF" },
                { "type": "artwork_view", "artworkId": "does-not-exist" }
            ]
        }))
        .await;
    assert_eq!(resp.status_code(), 404);

    // The quiz result in the rejected batch was not stored.
    let matched = server
        .get("/api/matching/apt-compatibility/LAEF")
        .authorization_bearer(token)
        .await;
    assert_eq!(matched.status_code(), 404);
    assert!(state.behavior.store().preferences("user-1").await.unwrap().is_none());
}

#[tokio::test]
async fn matching_uses_token_archetype() {
    let (server, state) = server().await;

    let with_claim: Value = server
        .get("/api/matching/apt-compatibility/SRMC")
        .authorization_bearer(user_token(&state, Some("LAEF")))
        .await
        .json();
    assert_eq!(with_claim["data"]["userAptType"], "LAEF");
    assert_eq!(with_claim["data"]["targetAptType"], "SRMC");
    assert_eq!(with_claim["data"]["compatibility"]["score"], 100);

    let without_profile = server
        .get("/api/matching/apt-compatibility/SRMC")
        .authorization_bearer(user_token(&state, None))
        .await;
    assert_eq!(without_profile.status_code(), 404);
}

#[tokio::test]
async fn share_formats_for_platform() {
    let (server, _) = server().await;

    let resp = server
        .post("/api/sayu-quiz/share")
        .json(&json!({ "aptType": "LAEF", "platform": "twitter", "language": "en" }))
        .await;
    assert_eq!(resp.status_code(), 200);
    let body: Value = resp.json();
    assert!(body["data"]["text"].as_str().unwrap().chars().count() <= 280);
    assert!(body["data"]["url"].as_str().unwrap().starts_with("https://sayu.art"));

    let unknown = server
        .post("/api/sayu-quiz/share")
        .json(&json!({ "aptType": "LAEF", "platform": "myspace" }))
        .await;
    assert_eq!(unknown.status_code(), 400);
}

#[tokio::test]
async fn configured_catalog_file_replaces_seed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    let catalog = json!({
        "artworks": [{
            "id": "art-local-1",
            "title": "Harbour at Dusk",
            "artist": "Local Painter",
            "genre": "landscape",
            "style": "Impressionism",
            "emotionalImpact": 7,
            "intellectualDepth": 4,
            "createdAt": "2024-05-01T00:00:00Z"
        }]
    });
    std::fs::write(&path, catalog.to_string()).unwrap();

    let mut config = test_config();
    config.catalog.path = Some(path);
    let (server, state) = server_with(config).await;

    let seeded = server
        .get("/api/apt/artwork/art-starry-night/match")
        .add_query_param("aptType", "LAEF")
        .await;
    assert_eq!(seeded.status_code(), 404);

    state.cache.warmup(code("LAEF")).await.unwrap();
    let read: Value = server
        .get("/api/apt/recommendations/LAEF/artwork")
        .await
        .json();
    assert_eq!(read["data"]["total"], 1);
    assert_eq!(read["data"]["items"][0]["artwork"]["id"], "art-local-1");
}
