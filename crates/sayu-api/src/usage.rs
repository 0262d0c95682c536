use crate::ApiError;
use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use dashmap::DashMap;
use serde::Serialize;

/// Usage figures attached to every full-analysis response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UsageSnapshot {
    pub used: u64,
    pub limit: u64,
    pub remaining: u64,
    pub resets_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy)]
struct MonthlyUsage {
    period: (i32, u32),
    used: u64,
}

fn period_of(now: DateTime<Utc>) -> (i32, u32) {
    (now.year(), now.month())
}

/// First instant of the calendar month after `now`, in UTC.
pub fn next_month_start(now: DateTime<Utc>) -> DateTime<Utc> {
    let (year, month) = if now.month() == 12 {
        (now.year() + 1, 1)
    } else {
        (now.year(), now.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
        .unwrap_or(now)
}

/// Per-credential monthly request counter.
pub struct UsageLedger {
    limit: u64,
    entries: DashMap<String, MonthlyUsage>,
}

impl UsageLedger {
    pub fn new(limit: u64) -> Self {
        Self {
            limit,
            entries: DashMap::new(),
        }
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    fn snapshot(&self, used: u64, now: DateTime<Utc>) -> UsageSnapshot {
        UsageSnapshot {
            used,
            limit: self.limit,
            remaining: self.limit.saturating_sub(used),
            resets_at: next_month_start(now),
        }
    }

    /// Current month's usage for `key` without charging it.
    pub fn peek(&self, key: &str, now: DateTime<Utc>) -> UsageSnapshot {
        let used = self
            .entries
            .get(key)
            .filter(|u| u.period == period_of(now))
            .map(|u| u.used)
            .unwrap_or(0);
        self.snapshot(used, now)
    }

    /// Fails when the key has no requests left this month.
    pub fn ensure_available(&self, key: &str, now: DateTime<Utc>) -> Result<UsageSnapshot, ApiError> {
        let snapshot = self.peek(key, now);
        if snapshot.remaining == 0 {
            return Err(ApiError::QuotaExceeded {
                limit: self.limit,
                resets_at: snapshot.resets_at,
            });
        }
        Ok(snapshot)
    }

    /// Charges one request. The counter starts over when the month changes.
    pub fn record(&self, key: &str, now: DateTime<Utc>) -> Result<UsageSnapshot, ApiError> {
        let period = period_of(now);
        let mut entry = self
            .entries
            .entry(key.to_string())
            .or_insert(MonthlyUsage { period, used: 0 });
        if entry.period != period {
            *entry = MonthlyUsage { period, used: 0 };
        }
        if entry.used >= self.limit {
            return Err(ApiError::QuotaExceeded {
                limit: self.limit,
                resets_at: next_month_start(now),
            });
        }
        entry.used += 1;
        let used = entry.used;
        drop(entry);
        Ok(self.snapshot(used, now))
    }
}
