use async_trait::async_trait;
use sayu_cache::{
    CacheState, Page, RecommendationCache, RecommendationProvider, WarmupScheduler, WarmupTarget,
};
use sayu_core::{
    ArchetypeCode, ArchetypeRegistry, ContentType, RecommendationContext, RecommendationEngine,
    RecommendationLimits, RecommendedItem, Result, StaticCatalog,
};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;

fn engine() -> RecommendationEngine {
    RecommendationEngine::new(
        Arc::new(ArchetypeRegistry::standard()),
        Arc::new(StaticCatalog::seed().unwrap()),
        RecommendationLimits::default(),
    )
}

fn code(raw: &str) -> ArchetypeCode {
    ArchetypeCode::parse(raw).unwrap()
}

/// Delays every computation so that warmups overlap.
struct SlowProvider {
    inner: RecommendationEngine,
    calls: AtomicUsize,
}

#[async_trait]
impl RecommendationProvider for SlowProvider {
    async fn recommend(
        &self,
        code: ArchetypeCode,
        content_type: ContentType,
        context: RecommendationContext,
    ) -> Result<Vec<RecommendedItem>> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(5 + (call % 3) as u64 * 7)).await;
        self.inner.recommend(code, content_type, context).await
    }
}

/// Parks the first computation after `hold` is set until `release` fires.
struct GatedProvider {
    inner: RecommendationEngine,
    hold: AtomicBool,
    entered: Notify,
    release: Notify,
}

#[async_trait]
impl RecommendationProvider for GatedProvider {
    async fn recommend(
        &self,
        code: ArchetypeCode,
        content_type: ContentType,
        context: RecommendationContext,
    ) -> Result<Vec<RecommendedItem>> {
        if self.hold.swap(false, Ordering::SeqCst) {
            self.entered.notify_one();
            self.release.notified().await;
        }
        self.inner.recommend(code, content_type, context).await
    }
}

#[tokio::test]
async fn warmup_then_read_returns_warm_items() {
    let cache = RecommendationCache::new(Arc::new(engine()));
    let laef = code("LAEF");

    let report = cache.warmup(laef).await.unwrap();
    assert_eq!(report.entries, 2);
    assert!(report.items > 0);

    let read = cache.get_recommendations(
        laef,
        ContentType::Artwork,
        RecommendationContext::General,
        Page::default(),
    );
    assert_eq!(read.cache_state, CacheState::Warm);
    assert!(!read.items.is_empty());
    assert_eq!(read.items.len(), 18.min(20));
    assert_eq!(read.total, 18);
    assert_eq!(read.generation, Some(report.generation));
}

#[tokio::test]
async fn invalidate_makes_reads_cold() {
    let cache = RecommendationCache::new(Arc::new(engine()));
    let srmc = code("SRMC");
    cache.warmup(srmc).await.unwrap();
    assert!(cache.is_warm(srmc, ContentType::Exhibition));

    assert_eq!(cache.invalidate(srmc), 2);
    let read = cache.get_recommendations(
        srmc,
        ContentType::Artwork,
        RecommendationContext::General,
        Page::default(),
    );
    assert!(read.is_cold());
    assert!(read.items.is_empty());
    assert_eq!(read.total, 0);
    assert!(read.warmed_at.is_none());

    // Invalidating an archetype with no entries still succeeds.
    assert_eq!(cache.invalidate(srmc), 0);
}

#[tokio::test]
async fn never_warmed_key_is_a_cold_miss() {
    let cache = RecommendationCache::new(Arc::new(engine()));
    let read = cache.get_recommendations(
        code("LREC"),
        ContentType::Exhibition,
        RecommendationContext::Trending,
        Page::default(),
    );
    assert!(read.is_cold());
    let stats = cache.stats();
    assert_eq!((stats.hits, stats.misses), (0, 1));
}

#[tokio::test]
async fn keys_are_partitioned_by_archetype() {
    let cache = RecommendationCache::new(Arc::new(engine()));
    cache.warmup(code("LAEF")).await.unwrap();

    let other = cache.get_recommendations(
        code("SAEF"),
        ContentType::Artwork,
        RecommendationContext::General,
        Page::default(),
    );
    assert!(other.is_cold());

    cache.invalidate(code("SAEF"));
    assert!(cache.is_warm(code("LAEF"), ContentType::Artwork));
    assert_eq!(cache.len(), 2);
}

#[tokio::test]
async fn pagination_slices_cached_list() {
    let cache = RecommendationCache::new(Arc::new(engine()));
    let laef = code("LAEF");
    cache.warmup(laef).await.unwrap();

    let full = cache.get_recommendations(
        laef,
        ContentType::Artwork,
        RecommendationContext::General,
        Page::new(Some(100), None),
    );
    let page = cache.get_recommendations(
        laef,
        ContentType::Artwork,
        RecommendationContext::General,
        Page::new(Some(5), Some(5)),
    );
    assert_eq!(page.items.len(), 5);
    assert_eq!(page.items[0].id(), full.items[5].id());

    let past_end = cache.get_recommendations(
        laef,
        ContentType::Artwork,
        RecommendationContext::General,
        Page::new(Some(5), Some(500)),
    );
    assert_eq!(past_end.cache_state, CacheState::Warm);
    assert!(past_end.items.is_empty());
}

#[tokio::test]
async fn concurrent_warmups_converge_on_last_completed() {
    let provider = Arc::new(SlowProvider {
        inner: engine(),
        calls: AtomicUsize::new(0),
    });
    let cache = Arc::new(RecommendationCache::new(provider));
    let laef = code("LAEF");

    let (a, b, c) = tokio::join!(cache.warmup(laef), cache.warmup(laef), cache.warmup(laef));
    let last = [a.unwrap(), b.unwrap(), c.unwrap()]
        .iter()
        .map(|r| r.generation)
        .max()
        .unwrap();

    for content_type in ContentType::ALL {
        let read = cache.get_recommendations(
            laef,
            content_type,
            RecommendationContext::General,
            Page::default(),
        );
        assert_eq!(read.generation, Some(last));
    }
    assert_eq!(cache.len(), 2);
    assert_eq!(cache.stats().warmups, 3);
}

#[tokio::test]
async fn stats_track_reads_and_reset() {
    let cache = RecommendationCache::new(Arc::new(engine()));
    let laef = code("LAEF");
    assert_eq!(cache.stats().oldest_entry_age_secs, None);
    cache.warmup(laef).await.unwrap();

    for _ in 0..2 {
        cache.get_recommendations(
            laef,
            ContentType::Artwork,
            RecommendationContext::General,
            Page::default(),
        );
    }
    cache.get_recommendations(
        code("SRMC"),
        ContentType::Artwork,
        RecommendationContext::General,
        Page::default(),
    );
    cache.invalidate(code("SRMC"));

    let stats = cache.stats();
    assert_eq!(stats.hits, 2);
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.hit_rate, 67);
    assert_eq!(stats.entries, 2);
    assert_eq!(stats.warmups, 1);
    assert_eq!(stats.invalidations, 1);
    assert_eq!(stats.by_apt_type["LAEF"].hits, 2);
    assert_eq!(stats.by_content_type["artwork"].misses, 1);
    assert!(stats.oldest_entry_age_secs.is_some_and(|age| age >= 0));

    cache.reset_stats();
    let stats = cache.stats();
    assert_eq!(stats.hits + stats.misses + stats.warmups, 0);
    assert_eq!(stats.entries, 2);
}

#[tokio::test]
async fn scheduler_runs_detached_warmups() {
    let cache = Arc::new(RecommendationCache::new(Arc::new(engine())));
    let scheduler = WarmupScheduler::new(cache.clone());

    scheduler.spawn(WarmupTarget::All).await.unwrap();
    assert_eq!(cache.len(), 32);
    assert_eq!(scheduler.in_flight(), 0);

    cache.invalidate(code("LAEF"));
    scheduler.spawn(WarmupTarget::One(code("LAEF"))).await.unwrap();
    assert!(cache.is_warm(code("LAEF"), ContentType::Artwork));

    assert!(scheduler.spawn_periodic(Duration::ZERO).is_none());
}

#[tokio::test]
async fn labelled_job_warms_its_target() {
    let cache = Arc::new(RecommendationCache::new(Arc::new(engine())));
    let scheduler = WarmupScheduler::new(cache.clone());

    scheduler
        .spawn_job(WarmupTarget::One(code("SREC")), "job-7")
        .await
        .unwrap();
    assert!(cache.is_warm(code("SREC"), ContentType::Exhibition));
    assert_eq!(cache.len(), 2);
    assert_eq!(scheduler.in_flight(), 0);
}

#[tokio::test]
async fn invalidate_during_warmup_keeps_key_cold() {
    let provider = Arc::new(GatedProvider {
        inner: engine(),
        hold: AtomicBool::new(false),
        entered: Notify::new(),
        release: Notify::new(),
    });
    let cache = Arc::new(RecommendationCache::new(provider.clone()));
    let laef = code("LAEF");
    cache.warmup(laef).await.unwrap();

    provider.hold.store(true, Ordering::SeqCst);
    let in_flight = tokio::spawn({
        let cache = cache.clone();
        async move { cache.warmup(laef).await }
    });
    provider.entered.notified().await;

    assert_eq!(cache.invalidate(laef), 2);
    provider.release.notify_one();
    let report = in_flight.await.unwrap().unwrap();

    assert!(report.discarded);
    assert_eq!(report.entries, 0);
    for content_type in ContentType::ALL {
        assert!(!cache.is_warm(laef, content_type));
    }

    // A warmup started after the invalidation is stored normally.
    let fresh = cache.warmup(laef).await.unwrap();
    assert!(!fresh.discarded);
    assert!(cache.is_warm(laef, ContentType::Artwork));
}
