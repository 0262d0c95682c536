use chrono::{DateTime, Utc};
use dashmap::DashMap;
use parking_lot::RwLock;
use sayu_core::{ArchetypeCode, ContentType};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Partition key. Each (archetype, content type) pair is an independent entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey {
    pub apt_type: ArchetypeCode,
    pub content_type: ContentType,
}

impl CacheKey {
    pub fn new(apt_type: ArchetypeCode, content_type: ContentType) -> Self {
        Self {
            apt_type,
            content_type,
        }
    }
}

/// Cache entry metadata
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    pub value: T,
    pub warmed_at: DateTime<Utc>,
    /// Completion order of the warmup that produced this entry.
    pub generation: u64,
}

impl<T> CacheEntry<T> {
    pub fn new(value: T, generation: u64) -> Self {
        Self {
            value,
            warmed_at: Utc::now(),
            generation,
        }
    }

    pub fn age_secs(&self) -> i64 {
        (Utc::now() - self.warmed_at).num_seconds()
    }
}

#[derive(Debug, Default)]
struct HitMissCounters {
    hits: AtomicU64,
    misses: AtomicU64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HitMiss {
    pub hits: u64,
    pub misses: u64,
    pub hit_rate: u8,
}

impl HitMiss {
    fn new(hits: u64, misses: u64) -> Self {
        Self {
            hits,
            misses,
            hit_rate: hit_rate_percent(hits, misses),
        }
    }
}

/// `round(hits / (hits + misses) * 100)`, 0 when nothing was read.
pub fn hit_rate_percent(hits: u64, misses: u64) -> u8 {
    let total = hits + misses;
    if total == 0 {
        0
    } else {
        ((hits as f64 / total as f64) * 100.0).round() as u8
    }
}

/// Cache performance statistics
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub hit_rate: u8,
    pub entries: usize,
    pub warmups: u64,
    pub warmup_failures: u64,
    pub invalidations: u64,
    /// Seconds since the stalest live entry was warmed. Absent when the cache is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oldest_entry_age_secs: Option<i64>,
    pub by_content_type: BTreeMap<String, HitMiss>,
    pub by_apt_type: BTreeMap<String, HitMiss>,
    pub since: DateTime<Utc>,
}

/// Process-lifetime counters. Reset only explicitly.
#[derive(Debug)]
pub(crate) struct StatsRecorder {
    hits: AtomicU64,
    misses: AtomicU64,
    warmups: AtomicU64,
    warmup_failures: AtomicU64,
    invalidations: AtomicU64,
    by_content_type: DashMap<ContentType, HitMissCounters>,
    by_apt_type: DashMap<ArchetypeCode, HitMissCounters>,
    since: RwLock<DateTime<Utc>>,
}

impl StatsRecorder {
    pub(crate) fn new() -> Self {
        Self {
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            warmups: AtomicU64::new(0),
            warmup_failures: AtomicU64::new(0),
            invalidations: AtomicU64::new(0),
            by_content_type: DashMap::new(),
            by_apt_type: DashMap::new(),
            since: RwLock::new(Utc::now()),
        }
    }

    pub(crate) fn record_read(&self, key: CacheKey, hit: bool) {
        let bump = |c: &HitMissCounters| {
            if hit {
                c.hits.fetch_add(1, Ordering::Relaxed);
            } else {
                c.misses.fetch_add(1, Ordering::Relaxed);
            }
        };
        if hit {
            self.hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }
        bump(&self.by_content_type.entry(key.content_type).or_default());
        bump(&self.by_apt_type.entry(key.apt_type).or_default());
    }

    pub(crate) fn record_warmup(&self, success: bool) {
        if success {
            self.warmups.fetch_add(1, Ordering::Relaxed);
        } else {
            self.warmup_failures.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub(crate) fn record_invalidation(&self) {
        self.invalidations.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        self.warmups.store(0, Ordering::Relaxed);
        self.warmup_failures.store(0, Ordering::Relaxed);
        self.invalidations.store(0, Ordering::Relaxed);
        self.by_content_type.clear();
        self.by_apt_type.clear();
        *self.since.write() = Utc::now();
    }

    pub(crate) fn snapshot(&self, entries: usize) -> CacheStats {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let read = |c: &HitMissCounters| {
            HitMiss::new(
                c.hits.load(Ordering::Relaxed),
                c.misses.load(Ordering::Relaxed),
            )
        };

        CacheStats {
            hits,
            misses,
            hit_rate: hit_rate_percent(hits, misses),
            entries,
            warmups: self.warmups.load(Ordering::Relaxed),
            warmup_failures: self.warmup_failures.load(Ordering::Relaxed),
            invalidations: self.invalidations.load(Ordering::Relaxed),
            oldest_entry_age_secs: None,
            by_content_type: self
                .by_content_type
                .iter()
                .map(|e| (e.key().to_string(), read(e.value())))
                .collect(),
            by_apt_type: self
                .by_apt_type
                .iter()
                .map(|e| (e.key().to_string(), read(e.value())))
                .collect(),
            since: *self.since.read(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_rate_rounds() {
        assert_eq!(hit_rate_percent(0, 0), 0);
        assert_eq!(hit_rate_percent(2, 1), 67);
        assert_eq!(hit_rate_percent(1, 2), 33);
        assert_eq!(hit_rate_percent(5, 0), 100);
    }

    #[test]
    fn recorder_tracks_partitions_and_resets() {
        let recorder = StatsRecorder::new();
        let laef = CacheKey::new(ArchetypeCode::parse("LAEF").unwrap(), ContentType::Artwork);
        let srmc = CacheKey::new(ArchetypeCode::parse("SRMC").unwrap(), ContentType::Exhibition);
        recorder.record_read(laef, true);
        recorder.record_read(laef, false);
        recorder.record_read(srmc, false);
        recorder.record_invalidation();

        let stats = recorder.snapshot(3);
        assert_eq!((stats.hits, stats.misses, stats.hit_rate), (1, 2, 33));
        assert_eq!(stats.by_apt_type["LAEF"], HitMiss::new(1, 1));
        assert_eq!(stats.by_content_type["exhibition"].misses, 1);
        assert_eq!(stats.invalidations, 1);
        assert_eq!(stats.entries, 3);

        recorder.reset();
        let stats = recorder.snapshot(0);
        assert_eq!(stats.hits + stats.misses, 0);
        assert!(stats.by_apt_type.is_empty());
    }
}
