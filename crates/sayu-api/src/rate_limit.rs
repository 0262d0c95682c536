use crate::auth::{api_key_digest, SecurityEvent, SecurityLogger, API_KEY_HEADER};
use crate::{ApiError, AppState};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use governor::{
    clock::{Clock, DefaultClock},
    DefaultKeyedRateLimiter, Quota, RateLimiter,
};
use sayu_core::RateLimitSettings;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitTier {
    Public,
    ApiKey,
}

impl RateLimitTier {
    pub fn as_str(self) -> &'static str {
        match self {
            RateLimitTier::Public => "public",
            RateLimitTier::ApiKey => "api_key",
        }
    }
}

/// Keyed limiters for the two request tiers.
pub struct RateLimiters {
    public: DefaultKeyedRateLimiter<String>,
    api_key: DefaultKeyedRateLimiter<String>,
    clock: DefaultClock,
}

fn quota(per_window: u32, window: Duration) -> Result<Quota, ApiError> {
    let burst = NonZeroU32::new(per_window)
        .ok_or_else(|| ApiError::Internal("Rate limit must be at least 1".to_string()))?;
    let period = window / per_window;
    Quota::with_period(period)
        .map(|q| q.allow_burst(burst))
        .ok_or_else(|| ApiError::Internal("Rate limit window must be non-zero".to_string()))
}

impl RateLimiters {
    pub fn new(settings: &RateLimitSettings) -> Result<Self, ApiError> {
        let window = Duration::from_secs(settings.window_secs);
        Ok(Self {
            public: RateLimiter::keyed(quota(settings.public_per_window, window)?),
            api_key: RateLimiter::keyed(quota(settings.api_key_per_window, window)?),
            clock: DefaultClock::default(),
        })
    }

    pub fn check(&self, tier: RateLimitTier, key: &str) -> Result<(), ApiError> {
        let limiter = match tier {
            RateLimitTier::Public => &self.public,
            RateLimitTier::ApiKey => &self.api_key,
        };
        limiter.check_key(&key.to_string()).map_err(|not_until| {
            let wait = not_until.wait_time_from(self.clock.now());
            ApiError::RateLimited {
                retry_after_secs: wait.as_secs().max(1),
            }
        })
    }

    /// Number of client and key states currently tracked.
    pub fn len(&self) -> usize {
        self.public.len() + self.api_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forgets keys whose buckets have fully refilled. Returns how many were dropped.
    pub fn retain_recent(&self) -> usize {
        let before = self.len();
        for limiter in [&self.public, &self.api_key] {
            limiter.retain_recent();
            limiter.shrink_to_fit();
        }
        before.saturating_sub(self.len())
    }
}

/// Sweeps idle limiter keys on a fixed period. A zero period disables the loop.
pub fn spawn_limiter_cleanup(limiters: Arc<RateLimiters>, every: Duration) -> Option<JoinHandle<()>> {
    if every.is_zero() {
        return None;
    }
    Some(tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let dropped = limiters.retain_recent();
            debug!(dropped, remaining = limiters.len(), "Rate limiter keys swept");
        }
    }))
}

fn reject(tier: RateLimitTier, key: String, err: ApiError) -> ApiError {
    SecurityLogger::log_event(SecurityEvent::RateLimitExceeded {
        tier: tier.as_str(),
        key,
    });
    err
}

/// Rate limiting middleware for unauthenticated routes, keyed by client address.
pub async fn public_rate_limit(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let key = state.client_ip(req.headers(), req.extensions());
    state
        .rate_limiters
        .check(RateLimitTier::Public, &key)
        .map_err(|e| reject(RateLimitTier::Public, key, e))?;
    Ok(next.run(req).await)
}

/// Rate limiting middleware for credential-gated routes, keyed by key digest.
/// Requests without a key fall through to the public tier.
pub async fn api_key_rate_limit(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let api_key = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|k| api_key_digest(k.trim()));

    let (tier, key) = match api_key {
        Some(digest) => (RateLimitTier::ApiKey, digest),
        None => (
            RateLimitTier::Public,
            state.client_ip(req.headers(), req.extensions()),
        ),
    };
    state
        .rate_limiters
        .check(tier, &key)
        .map_err(|e| reject(tier, key, e))?;
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(public: u32, api_key: u32) -> RateLimitSettings {
        RateLimitSettings {
            public_per_window: public,
            api_key_per_window: api_key,
            window_secs: 900,
            trusted_proxy: false,
        }
    }

    #[test]
    fn burst_is_the_window_quota() {
        let limiters = RateLimiters::new(&settings(3, 5)).unwrap();
        for _ in 0..3 {
            assert!(limiters.check(RateLimitTier::Public, "1.2.3.4").is_ok());
        }
        let err = limiters.check(RateLimitTier::Public, "1.2.3.4").unwrap_err();
        assert!(matches!(err, ApiError::RateLimited { retry_after_secs } if retry_after_secs >= 1));

        // Other clients and tiers are tracked separately.
        assert!(limiters.check(RateLimitTier::Public, "5.6.7.8").is_ok());
        assert!(limiters.check(RateLimitTier::ApiKey, "1.2.3.4").is_ok());
    }

    #[test]
    fn zero_limit_is_rejected() {
        assert!(RateLimiters::new(&settings(0, 5)).is_err());
    }

    #[test]
    fn retain_recent_keeps_limiting_active_keys() {
        let limiters = RateLimiters::new(&settings(2, 5)).unwrap();
        for ip in ["10.0.0.1", "10.0.0.2", "10.0.0.3"] {
            limiters.check(RateLimitTier::Public, ip).unwrap();
        }
        limiters.check(RateLimitTier::Public, "10.0.0.1").unwrap();
        assert_eq!(limiters.len(), 3);

        // Nothing has refilled within a 900s window, so every key is kept.
        assert_eq!(limiters.retain_recent(), 0);
        assert_eq!(limiters.len(), 3);
        assert!(limiters.check(RateLimitTier::Public, "10.0.0.1").is_err());
    }

    #[tokio::test]
    async fn cleanup_loop_is_optional() {
        let limiters = Arc::new(RateLimiters::new(&settings(2, 5)).unwrap());
        assert!(spawn_limiter_cleanup(limiters.clone(), Duration::ZERO).is_none());
        let handle = spawn_limiter_cleanup(limiters, Duration::from_secs(60)).unwrap();
        handle.abort();
    }
}
