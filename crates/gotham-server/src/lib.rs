//! Gotham Server
//!
//! HTTP front for the content service: the access gate, the JSON pages,
//! the wisdom function and the background refresh of every widget.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;
pub mod pages;
pub mod session;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    response::{IntoResponse, Response},
    Router,
};
use config::GothamConfig;
use gotham_feeds::{FeedError, Feeds, RefreshWorker, SharedMetrics};
use gotham_gate::{GateError, GateStore};
use gotham_llm::{LlmError, OpenAiProvider};
use gotham_oracle::Oracle;
use handlers::{create_router, AppState};
use session::SessionManager;
use std::any::Any;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Body served when a handler panics
pub const CRASH_MESSAGE: &str = "SYSTEM ERROR DETECTED\nRedirecting to Batcave...";

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),

    /// Gate store error
    #[error("Gate error: {0}")]
    Gate(#[from] GateError),

    /// Feed setup error
    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),

    /// Completion provider setup error
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

/// Build the shared state and the refresh worker from configuration
///
/// Nothing is fetched here; every widget starts on its fallback until the
/// worker is started.
pub fn build_state(config: &GothamConfig) -> Result<(AppState, RefreshWorker), ServerError> {
    config.validate()?;

    let provider = OpenAiProvider::with_timeout(
        &config.llm.base_url,
        config.llm.api_key.clone(),
        &config.llm.model,
        config.llm.timeout(),
    )?;
    if !provider.has_api_key() {
        warn!("No completion API key configured; generated content will use fallbacks");
    }

    let oracle = Oracle::new(Arc::new(provider), config.llm.oracle.clone());
    let gate = GateStore::new(config.gate_config())?;
    let sessions = SessionManager::new(&config.gate.session_secret, config.gate.session_expiry_secs);
    let (feeds, worker) = Feeds::new(&config.feeds, oracle.clone())?;

    let state = AppState {
        gate: Arc::new(gate),
        sessions: Arc::new(sessions),
        oracle,
        feeds,
        announcements: Arc::new(RwLock::new(Vec::new())),
    };

    Ok((state, worker))
}

/// Wrap a router with the crash boundary, request tracing and CORS
///
/// A panicking handler answers 500 with [`CRASH_MESSAGE`] and a `Refresh`
/// header pointing back home.
pub fn with_crash_boundary(router: Router) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            header::CONTENT_TYPE,
        ]);

    router
        .layer(CatchPanicLayer::custom(crash_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

fn crash_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    error!("Request handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [("refresh", "1; url=/")],
        CRASH_MESSAGE,
    )
        .into_response()
}

/// Start the Gotham HTTP server
///
/// Builds the state, starts the refresh worker and serves until ctrl-c or
/// SIGTERM.
pub async fn start_server(config: GothamConfig) -> Result<(), ServerError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    info!("Starting Gotham server");
    info!("Bind address: {}", config.bind_addr());

    let (state, worker) = build_state(&config)?;
    info!("Refreshing {} feeds", worker.len());
    let metrics = state.feeds.metrics.clone();

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let handles = worker.start(shutdown_rx);

    let app = with_crash_boundary(create_router(state));

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Gotham listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_tx))
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    info!("Waiting for feed workers to stop");
    let drain = async {
        for handle in handles {
            let _ = handle.await;
        }
    };
    if tokio::time::timeout(Duration::from_secs(10), drain).await.is_err() {
        warn!("Feed workers did not stop in time");
    }
    info!("{}", feed_report(&metrics));

    info!("Gotham server stopped");
    Ok(())
}

/// Per-feed fetch counts for the shutdown log
pub fn feed_report(metrics: &SharedMetrics) -> String {
    metrics
        .lock()
        .unwrap_or_else(|p| p.into_inner())
        .summary()
}

async fn shutdown_signal(shutdown_tx: watch::Sender<bool>) {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.ok();
    };

    #[cfg(unix)]
    let terminate = async {
        if let Ok(mut sig) =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
        {
            sig.recv().await;
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received, stopping server");
    let _ = shutdown_tx.send(true);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_state_from_test_config() {
        let config = GothamConfig::default_test_config();
        let (state, worker) = build_state(&config).unwrap();

        assert!(!state.gate.is_authenticated());
        assert_eq!(worker.len(), 10);
        assert!(state.feeds.crypto.get().is_empty());
    }

    #[test]
    fn test_build_state_rejects_invalid_config() {
        let mut config = GothamConfig::default_test_config();
        config.gate.access_key = String::new();

        assert!(matches!(build_state(&config), Err(ServerError::Config(_))));
    }

    #[test]
    fn test_feed_report() {
        let (state, _worker) = build_state(&GothamConfig::default_test_config()).unwrap();
        {
            let mut metrics = state.feeds.metrics.lock().unwrap();
            metrics.record_success("crypto");
            metrics.record_failure("disease");
        }

        let report = feed_report(&state.feeds.metrics);
        assert!(report.contains("crypto: 1 ok, 0 failed"));
        assert!(report.contains("disease: 0 ok, 1 failed"));
    }

    #[test]
    fn test_crash_response() {
        let response = crash_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.headers().get("refresh").unwrap(), "1; url=/");
    }
}
