use crate::{ApiError, AppState};
use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};
use prometheus::{Encoder, IntCounter, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};

/// Prometheus collectors owned by the application state.
pub struct ApiMetrics {
    registry: Registry,
    http_requests_total: IntCounterVec,
    analyses_total: IntCounterVec,
    cache_reads_total: IntCounterVec,
    warmup_requests_total: IntCounter,
    cache_entries: IntGauge,
}

impl ApiMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new_custom(Some("sayu".to_string()), None)?;

        let http_requests_total = IntCounterVec::new(
            Opts::new("http_requests_total", "HTTP requests by route group and status"),
            &["group", "status"],
        )?;
        let analyses_total = IntCounterVec::new(
            Opts::new("analyses_total", "Completed personality analyses by tier"),
            &["tier"],
        )?;
        let cache_reads_total = IntCounterVec::new(
            Opts::new("cache_reads_total", "Recommendation cache reads by result"),
            &["result"],
        )?;
        let warmup_requests_total = IntCounter::with_opts(Opts::new(
            "cache_warmup_requests_total",
            "Warmups dispatched to the background",
        ))?;
        let cache_entries = IntGauge::with_opts(Opts::new(
            "cache_entries",
            "Warm recommendation cache entries",
        ))?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(analyses_total.clone()))?;
        registry.register(Box::new(cache_reads_total.clone()))?;
        registry.register(Box::new(warmup_requests_total.clone()))?;
        registry.register(Box::new(cache_entries.clone()))?;

        #[cfg(target_os = "linux")]
        registry.register(Box::new(prometheus::process_collector::ProcessCollector::for_self()))?;

        Ok(Self {
            registry,
            http_requests_total,
            analyses_total,
            cache_reads_total,
            warmup_requests_total,
            cache_entries,
        })
    }

    pub fn record_request(&self, group: &str, status: u16) {
        let status = status.to_string();
        self.http_requests_total
            .with_label_values(&[group, status.as_str()])
            .inc();
    }

    pub fn record_analysis(&self, tier: &str) {
        self.analyses_total.with_label_values(&[tier]).inc();
    }

    pub fn record_cache_read(&self, cold: bool) {
        let result = if cold { "miss" } else { "hit" };
        self.cache_reads_total.with_label_values(&[result]).inc();
    }

    pub fn record_warmup_request(&self) {
        self.warmup_requests_total.inc();
    }

    pub fn render(&self, cache_entries: usize) -> Result<String, ApiError> {
        self.cache_entries.set(cache_entries as i64);
        let mut buffer = Vec::new();
        TextEncoder::new()
            .encode(&self.registry.gather(), &mut buffer)
            .map_err(|e| ApiError::Internal(format!("Failed to encode metrics: {e}")))?;
        String::from_utf8(buffer)
            .map_err(|e| ApiError::Internal(format!("Metrics are not valid UTF-8: {e}")))
    }
}

fn route_group(path: &str) -> &'static str {
    if path.starts_with("/api/apt/cache") {
        "cache"
    } else if path.starts_with("/api/apt") {
        "apt"
    } else if path.starts_with("/api/matching") {
        "matching"
    } else if path.starts_with("/api/sayu-quiz") {
        "quiz"
    } else if path == "/health" || path == "/metrics" {
        "system"
    } else {
        "other"
    }
}

/// Counts every request by route group and response status.
pub async fn track_requests(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let group = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| route_group(p.as_str()))
        .unwrap_or_else(|| route_group(req.uri().path()));
    let response = next.run(req).await;
    state
        .metrics
        .record_request(group, response.status().as_u16());
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_includes_recorded_series() {
        let metrics = ApiMetrics::new().unwrap();
        metrics.record_request("quiz", 200);
        metrics.record_analysis("basic");
        metrics.record_cache_read(true);
        metrics.record_warmup_request();

        let text = metrics.render(7).unwrap();
        assert!(text.contains("sayu_http_requests_total"));
        assert!(text.contains("tier=\"basic\""));
        assert!(text.contains("result=\"miss\""));
        assert!(text.contains("sayu_cache_entries 7"));
    }

    #[test]
    fn groups_follow_path_prefix() {
        assert_eq!(route_group("/api/apt/cache/stats"), "cache");
        assert_eq!(route_group("/api/apt/types/{code}"), "apt");
        assert_eq!(route_group("/api/sayu-quiz/analyze"), "quiz");
        assert_eq!(route_group("/nope"), "other");
    }
}
