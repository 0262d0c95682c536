use crate::auth::{client_ip, peer_addr, ApiKeyValidator, AuthorizationPort, ConfiguredApiKeys, JwtManager, PermissionAuthorization};
use crate::{ApiError, ApiMetrics, RateLimiters, UsageLedger};
use axum::http::{Extensions, HeaderMap};
use chrono::{DateTime, Utc};
use sayu_cache::{RecommendationCache, WarmupScheduler};
use sayu_core::{
    ArchetypeRegistry, AxisKeywordStrategy, BasicAnalyzer, BehaviorRecorder, CatalogSource,
    CompatibilityScorer, ConfigManager, FullAnalyzer, InMemoryProfileStore, ProfileStore,
    RecommendationEngine, RecommendationLimits, StaticCatalog,
};
use std::sync::Arc;
use tracing::info;

/// Everything a handler can reach. Built once, cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ConfigManager>,
    pub registry: Arc<ArchetypeRegistry>,
    pub scorer: Arc<CompatibilityScorer>,
    pub catalog: Arc<dyn CatalogSource>,
    pub cache: Arc<RecommendationCache>,
    pub warmup: WarmupScheduler,
    pub basic_analyzer: BasicAnalyzer,
    pub full_analyzer: Arc<FullAnalyzer>,
    pub profiles: Arc<dyn ProfileStore>,
    pub behavior: Arc<BehaviorRecorder>,
    pub jwt: Arc<JwtManager>,
    pub api_keys: Arc<dyn ApiKeyValidator>,
    pub authorization: Arc<dyn AuthorizationPort>,
    pub rate_limiters: Arc<RateLimiters>,
    pub usage: Arc<UsageLedger>,
    pub metrics: Arc<ApiMetrics>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Loads the configured catalog (or the bundled seed) and wires every component.
    pub async fn new(config: Arc<ConfigManager>) -> Result<Self, ApiError> {
        let catalog: Arc<dyn CatalogSource> = match &config.config().catalog.path {
            Some(path) => Arc::new(StaticCatalog::from_path(path).await?),
            None => Arc::new(StaticCatalog::seed()?),
        };
        Self::with_catalog(config, catalog)
    }

    pub fn with_catalog(
        config: Arc<ConfigManager>,
        catalog: Arc<dyn CatalogSource>,
    ) -> Result<Self, ApiError> {
        let settings = config.config().clone();

        let registry = Arc::new(ArchetypeRegistry::standard());
        let scorer = Arc::new(CompatibilityScorer::new(registry.clone()));

        let engine = RecommendationEngine::new(
            registry.clone(),
            catalog.clone(),
            RecommendationLimits {
                artworks: settings.cache.artwork_limit,
                exhibitions: settings.cache.exhibition_limit,
            },
        );
        let cache = Arc::new(RecommendationCache::new(Arc::new(engine)));
        let warmup = WarmupScheduler::new(cache.clone());

        let full_analyzer = Arc::new(FullAnalyzer::new(
            registry.clone(),
            scorer.clone(),
            Arc::new(AxisKeywordStrategy::new()),
        ));

        let profiles: Arc<dyn ProfileStore> = Arc::new(InMemoryProfileStore::new());
        let behavior = Arc::new(BehaviorRecorder::new(catalog.clone(), profiles.clone()));

        let metrics = ApiMetrics::new()
            .map_err(|e| ApiError::Internal(format!("Failed to register metrics: {e}")))?;

        info!(
            archetypes = registry.len(),
            strategy = full_analyzer.strategy_name(),
            configured_api_keys = settings.auth.api_keys.len(),
            "Application state initialised"
        );

        Ok(Self {
            jwt: Arc::new(JwtManager::new(
                &settings.auth.jwt_secret,
                settings.auth.token_ttl_secs,
            )),
            api_keys: Arc::new(ConfiguredApiKeys::new(
                &settings.auth.api_key_prefix,
                &settings.auth.api_keys,
            )),
            authorization: Arc::new(PermissionAuthorization),
            rate_limiters: Arc::new(RateLimiters::new(&settings.rate_limit)?),
            usage: Arc::new(UsageLedger::new(settings.auth.monthly_quota)),
            metrics: Arc::new(metrics),
            started_at: Utc::now(),
            config,
            registry,
            scorer,
            catalog,
            cache,
            warmup,
            basic_analyzer: BasicAnalyzer::new(),
            full_analyzer,
            profiles,
            behavior,
        })
    }
    /// Client address for this request under the configured proxy trust.
    pub fn client_ip(&self, headers: &HeaderMap, extensions: &Extensions) -> String {
        client_ip(
            headers,
            peer_addr(extensions),
            self.config.config().rate_limit.trusted_proxy,
        )
    }
}
