use crate::{create_router, spawn_limiter_cleanup, ApiError, AppState};
use sayu_cache::WarmupTarget;
use sayu_core::ConfigManager;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{info, warn};

pub struct Server {
    state: AppState,
    addr: SocketAddr,
    periodic_warmup: Option<JoinHandle<()>>,
    limiter_cleanup: Option<JoinHandle<()>>,
}

impl Server {
    pub async fn new(config: Arc<ConfigManager>) -> Result<Self, ApiError> {
        let settings = config.config().clone();
        let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
            .parse()
            .map_err(|e| {
                ApiError::Validation(format!(
                    "Invalid listen address {}:{}: {e}",
                    settings.server.host, settings.server.port
                ))
            })?;

        let state = AppState::new(config).await?;

        if settings.cache.warmup_on_start {
            info!("Scheduling startup warmup for all archetypes");
            // Startup warmup runs detached; the listener binds without waiting.
            let _ = state.warmup.spawn(WarmupTarget::All);
        }
        let periodic_warmup = state
            .warmup
            .spawn_periodic(Duration::from_secs(settings.cache.warmup_interval_secs));
        if periodic_warmup.is_some() {
            info!(
                interval_secs = settings.cache.warmup_interval_secs,
                "Periodic cache warmup enabled"
            );
        }

        // Idle client buckets refill within one window, so sweep at that cadence.
        let limiter_cleanup = spawn_limiter_cleanup(
            state.rate_limiters.clone(),
            Duration::from_secs(settings.rate_limit.window_secs),
        );
        if !settings.rate_limit.trusted_proxy {
            info!("Rate limits keyed on socket peer; forwarding headers ignored");
        }

        Ok(Self {
            state,
            addr,
            periodic_warmup,
            limiter_cleanup,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub async fn run(self) -> Result<(), ApiError> {
        let router = create_router(self.state);

        info!("Starting SAYU API server on {}", self.addr);
        let listener = tokio::net::TcpListener::bind(self.addr).await?;

        info!("Server listening on http://{}", self.addr);
        info!("  GET  /health - Liveness and cache status");
        info!("  GET  /metrics - Prometheus metrics");
        info!("  GET  /api/apt/types - Archetype catalogue");
        info!("  GET  /api/apt/compatibility/{{source}}/{{target}} - Compatibility score");
        info!("  GET  /api/apt/recommendations/{{aptType}}/{{contentType}} - Cached recommendations");
        info!("  POST /api/apt/cache/warmup - Admin cache warmup");
        info!("  POST /api/sayu-quiz/analyze-basic - Basic analysis (public)");
        info!("  POST /api/sayu-quiz/analyze - Full analysis (x-api-key)");

        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await?;

        for handle in [self.periodic_warmup, self.limiter_cleanup].into_iter().flatten() {
            handle.abort();
        }
        info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down gracefully");
        },
        _ = terminate => {
            info!("Received SIGTERM, shutting down gracefully");
        },
    }
}
