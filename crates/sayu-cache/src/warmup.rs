use crate::recommendation_cache::RecommendationCache;
use sayu_core::ArchetypeCode;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{info, info_span, warn, Instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarmupTarget {
    All,
    One(ArchetypeCode),
}

impl fmt::Display for WarmupTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarmupTarget::All => f.write_str("all"),
            WarmupTarget::One(code) => write!(f, "{code}"),
        }
    }
}

/// Runs warmups as detached tasks so callers never wait on population.
#[derive(Clone)]
pub struct WarmupScheduler {
    cache: Arc<RecommendationCache>,
    in_flight: Arc<AtomicUsize>,
}

impl WarmupScheduler {
    pub fn new(cache: Arc<RecommendationCache>) -> Self {
        Self {
            cache,
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn cache(&self) -> &Arc<RecommendationCache> {
        &self.cache
    }

    /// Number of warmups currently running.
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Starts a warmup in the background. Dropping the handle does not cancel it.
    pub fn spawn(&self, target: WarmupTarget) -> JoinHandle<()> {
        let scheduler = self.clone();
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        tokio::spawn(async move {
            scheduler.run(target).await;
            scheduler.in_flight.fetch_sub(1, Ordering::SeqCst);
        })
    }

    /// Like [`spawn`](Self::spawn), with every log line of the run tagged with
    /// `job_id` so a dispatch can be matched to its completion.
    pub fn spawn_job(&self, target: WarmupTarget, job_id: &str) -> JoinHandle<()> {
        let scheduler = self.clone();
        let span = info_span!("warmup_job", job_id = %job_id, target = %target);
        let job_id = job_id.to_string();
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        tokio::spawn(
            async move {
                let started = Instant::now();
                scheduler.run(target).await;
                scheduler.in_flight.fetch_sub(1, Ordering::SeqCst);
                info!(
                    %job_id,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Warmup job finished"
                );
            }
            .instrument(span),
        )
    }

    /// Re-warms every archetype on a fixed period. A zero period disables the loop.
    pub fn spawn_periodic(&self, every: Duration) -> Option<JoinHandle<()>> {
        if every.is_zero() {
            return None;
        }
        let scheduler = self.clone();
        Some(tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + every, every);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            info!(interval_secs = every.as_secs(), "Periodic cache warmup scheduled");
            loop {
                ticker.tick().await;
                scheduler.in_flight.fetch_add(1, Ordering::SeqCst);
                scheduler.run(WarmupTarget::All).await;
                scheduler.in_flight.fetch_sub(1, Ordering::SeqCst);
            }
        }))
    }

    async fn run(&self, target: WarmupTarget) {
        match target {
            WarmupTarget::All => {
                let summary = self.cache.warmup_all().await;
                if !summary.failed.is_empty() {
                    warn!(failed = ?summary.failed, "Some archetypes failed to warm");
                }
            }
            WarmupTarget::One(code) => match self.cache.warmup(code).await {
                Ok(report) => info!(
                    apt_type = %code,
                    generation = report.generation,
                    items = report.items,
                    "Cache warmup complete"
                ),
                Err(e) => warn!(apt_type = %code, error = %e, "Cache warmup failed"),
            },
        }
    }
}
