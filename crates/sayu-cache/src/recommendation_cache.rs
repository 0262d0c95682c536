use crate::cache::{CacheEntry, CacheKey, CacheStats, StatsRecorder};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use futures::future::join_all;
use sayu_core::{
    ArchetypeCode, ContentType, RecommendationContext, RecommendationEngine, RecommendedItem,
    Result,
};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

pub const DEFAULT_PAGE_LIMIT: usize = 20;
pub const MAX_PAGE_LIMIT: usize = 100;

/// Source of freshly computed recommendations used to populate the cache.
#[async_trait]
pub trait RecommendationProvider: Send + Sync {
    async fn recommend(
        &self,
        code: ArchetypeCode,
        content_type: ContentType,
        context: RecommendationContext,
    ) -> Result<Vec<RecommendedItem>>;
}

#[async_trait]
impl RecommendationProvider for RecommendationEngine {
    async fn recommend(
        &self,
        code: ArchetypeCode,
        content_type: ContentType,
        context: RecommendationContext,
    ) -> Result<Vec<RecommendedItem>> {
        self.compute(code, content_type, context).await
    }
}

/// Everything cached for one (archetype, content type) key.
#[derive(Debug, Clone, Default)]
pub struct RecommendationSet {
    pub by_context: HashMap<RecommendationContext, Vec<RecommendedItem>>,
}

impl RecommendationSet {
    pub fn items(&self, context: RecommendationContext) -> &[RecommendedItem] {
        self.by_context
            .get(&context)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn item_count(&self) -> usize {
        self.by_context.values().map(Vec::len).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheState {
    Warm,
    Cold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: usize,
    pub offset: usize,
}

impl Page {
    /// Missing limit means 20; anything above 100 is clamped.
    pub fn new(limit: Option<usize>, offset: Option<usize>) -> Self {
        Self {
            limit: limit
                .unwrap_or(DEFAULT_PAGE_LIMIT)
                .clamp(1, MAX_PAGE_LIMIT),
            offset: offset.unwrap_or(0),
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Result of a cache read. A cold read carries no items and no warmup metadata.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheRead {
    pub apt_type: ArchetypeCode,
    pub content_type: ContentType,
    pub context: RecommendationContext,
    pub cache_state: CacheState,
    pub items: Vec<RecommendedItem>,
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warmed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation: Option<u64>,
}

impl CacheRead {
    pub fn is_cold(&self) -> bool {
        self.cache_state == CacheState::Cold
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WarmupReport {
    pub apt_type: ArchetypeCode,
    pub generation: u64,
    pub entries: usize,
    pub items: usize,
    pub elapsed_ms: u64,
    /// Set when an invalidation landed while this warmup was computing.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub discarded: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WarmupSummary {
    pub warmed: Vec<WarmupReport>,
    pub failed: Vec<String>,
}

/// Recommendation cache partitioned by archetype and content type.
///
/// Entries live in a sharded map so a warmup of one archetype never blocks
/// reads of another. Each completed warmup replaces its entries wholesale and
/// is stamped with a generation taken at completion time. An entry is only
/// replaced by a newer generation, so concurrent warmups of the same archetype
/// converge on the one that finished last.
///
/// Invalidation draws from the same counter and records it per archetype. A
/// warmup that started before the most recent invalidation of its archetype
/// drops its results, so an invalidated key stays cold until the next warmup.
pub struct RecommendationCache {
    entries: DashMap<CacheKey, CacheEntry<RecommendationSet>>,
    invalidated_at: DashMap<ArchetypeCode, u64>,
    provider: Arc<dyn RecommendationProvider>,
    stats: StatsRecorder,
    generation: AtomicU64,
}

impl RecommendationCache {
    pub fn new(provider: Arc<dyn RecommendationProvider>) -> Self {
        Self {
            entries: DashMap::new(),
            invalidated_at: DashMap::new(),
            provider,
            stats: StatsRecorder::new(),
            generation: AtomicU64::new(0),
        }
    }

    /// Computes every content type and context for `code`, then stores them.
    /// Nothing is written when any computation fails.
    pub async fn warmup(&self, code: ArchetypeCode) -> Result<WarmupReport> {
        let started = Instant::now();
        let started_at = self.generation.load(Ordering::SeqCst);
        let mut computed = Vec::with_capacity(ContentType::ALL.len());

        for content_type in ContentType::ALL {
            let mut set = RecommendationSet::default();
            for context in RecommendationContext::ALL {
                match self.provider.recommend(code, content_type, context).await {
                    Ok(items) => {
                        set.by_context.insert(context, items);
                    }
                    Err(e) => {
                        self.stats.record_warmup(false);
                        warn!(
                            apt_type = %code,
                            content_type = content_type.as_str(),
                            context = context.as_str(),
                            error = %e,
                            "Cache warmup failed"
                        );
                        return Err(e);
                    }
                }
            }
            computed.push((content_type, set));
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let items: usize = computed.iter().map(|(_, set)| set.item_count()).sum();
        let mut entries = 0;
        let mut discarded = false;

        for (content_type, set) in computed {
            // Checked under the entry lock; invalidate records its epoch before removing.
            let entry = self.entries.entry(CacheKey::new(code, content_type));
            if self.invalidated_since(code, started_at) {
                discarded = true;
                break;
            }
            let fresh = CacheEntry::new(set, generation);
            match entry {
                Entry::Occupied(mut occupied) => {
                    if occupied.get().generation < generation {
                        occupied.insert(fresh);
                        entries += 1;
                    }
                }
                Entry::Vacant(vacant) => {
                    vacant.insert(fresh);
                    entries += 1;
                }
            }
        }

        self.stats.record_warmup(true);
        if discarded {
            info!(apt_type = %code, generation, "Warmup discarded after concurrent invalidation");
        }
        let report = WarmupReport {
            apt_type: code,
            generation,
            entries,
            items,
            elapsed_ms: started.elapsed().as_millis() as u64,
            discarded,
        };
        debug!(
            apt_type = %code,
            generation,
            items,
            elapsed_ms = report.elapsed_ms,
            "Cache warmed"
        );
        Ok(report)
    }

    /// Warms all sixteen archetypes concurrently. Failures are collected, not fatal.
    pub async fn warmup_all(&self) -> WarmupSummary {
        let results = join_all(ArchetypeCode::all().map(|code| async move {
            (code, self.warmup(code).await)
        }))
        .await;

        let mut summary = WarmupSummary::default();
        for (code, result) in results {
            match result {
                Ok(report) => summary.warmed.push(report),
                Err(_) => summary.failed.push(code.to_string()),
            }
        }
        info!(
            warmed = summary.warmed.len(),
            failed = summary.failed.len(),
            "Full cache warmup finished"
        );
        summary
    }

    /// Drops every entry of `code`. Returns how many entries were removed.
    pub fn invalidate(&self, code: ArchetypeCode) -> usize {
        let epoch = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.invalidated_at.insert(code, epoch);
        let removed = ContentType::ALL
            .iter()
            .filter(|ct| self.entries.remove(&CacheKey::new(code, **ct)).is_some())
            .count();
        self.stats.record_invalidation();
        info!(apt_type = %code, removed, "Cache invalidated");
        removed
    }

    pub fn get_recommendations(
        &self,
        code: ArchetypeCode,
        content_type: ContentType,
        context: RecommendationContext,
        page: Page,
    ) -> CacheRead {
        let key = CacheKey::new(code, content_type);
        let Some(entry) = self.entries.get(&key) else {
            self.stats.record_read(key, false);
            debug!(apt_type = %code, content_type = content_type.as_str(), "Cache miss");
            return CacheRead {
                apt_type: code,
                content_type,
                context,
                cache_state: CacheState::Cold,
                items: Vec::new(),
                total: 0,
                limit: page.limit,
                offset: page.offset,
                warmed_at: None,
                generation: None,
            };
        };

        self.stats.record_read(key, true);
        let all = entry.value.items(context);
        let items = all
            .iter()
            .skip(page.offset)
            .take(page.limit)
            .cloned()
            .collect();

        CacheRead {
            apt_type: code,
            content_type,
            context,
            cache_state: CacheState::Warm,
            items,
            total: all.len(),
            limit: page.limit,
            offset: page.offset,
            warmed_at: Some(entry.warmed_at),
            generation: Some(entry.generation),
        }
    }

    fn invalidated_since(&self, code: ArchetypeCode, generation: u64) -> bool {
        self.invalidated_at
            .get(&code)
            .is_some_and(|epoch| *epoch > generation)
    }

    pub fn is_warm(&self, code: ArchetypeCode, content_type: ContentType) -> bool {
        self.entries.contains_key(&CacheKey::new(code, content_type))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.snapshot(self.entries.len());
        stats.oldest_entry_age_secs = self.entries.iter().map(|e| e.age_secs()).max();
        stats
    }

    pub fn reset_stats(&self) {
        self.stats.reset();
        info!("Cache statistics reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sayu_core::SayuError;

    struct FailingProvider;

    #[async_trait]
    impl RecommendationProvider for FailingProvider {
        async fn recommend(
            &self,
            _code: ArchetypeCode,
            _content_type: ContentType,
            _context: RecommendationContext,
        ) -> Result<Vec<RecommendedItem>> {
            Err(SayuError::Catalog("catalog offline".into()))
        }
    }

    #[tokio::test]
    async fn failed_warmup_writes_nothing_and_is_counted() {
        let cache = RecommendationCache::new(Arc::new(FailingProvider));
        let code = ArchetypeCode::parse("LAEF").unwrap();

        assert!(cache.warmup(code).await.is_err());
        assert!(cache.is_empty());
        let stats = cache.stats();
        assert_eq!(stats.warmups, 0);
        assert_eq!(stats.warmup_failures, 1);

        let summary = cache.warmup_all().await;
        assert!(summary.warmed.is_empty());
        assert_eq!(summary.failed.len(), 16);
    }

    #[test]
    fn page_defaults_and_clamps() {
        assert_eq!(Page::default(), Page { limit: 20, offset: 0 });
        assert_eq!(Page::new(Some(500), Some(3)), Page { limit: 100, offset: 3 });
        assert_eq!(Page::new(Some(0), None).limit, 1);
    }

    #[test]
    fn cold_read_omits_warm_metadata() {
        let cache = RecommendationCache::new(Arc::new(FailingProvider));
        let read = cache.get_recommendations(
            ArchetypeCode::parse("SRMC").unwrap(),
            ContentType::Exhibition,
            RecommendationContext::Trending,
            Page::default(),
        );
        let json = serde_json::to_value(&read).unwrap();
        assert_eq!(json["cacheState"], "cold");
        assert_eq!(json["aptType"], "SRMC");
        assert_eq!(json["context"], "trending");
        assert!(json.get("warmedAt").is_none());
        assert!(json.get("generation").is_none());
    }
}
