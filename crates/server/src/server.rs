//! Server initialization and routing
//!
//! Router configuration, the middleware stack, tracing setup and graceful
//! shutdown.

use crate::config::ServerConfig;
use crate::middleware::{log_requests, request_id};
use crate::routes::{api_info, not_found};
use crate::routes::{articles, health};
use crate::state::ServerState;
use axum::http::StatusCode;
use axum::middleware::from_fn;
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Build the Axum router with all routes and middleware
///
/// Middleware runs outermost first:
/// 1. Tracing spans
/// 2. Request ID tracking
/// 3. Request logging
/// 4. CORS
/// 5. Compression
/// 6. Timeout handling
pub fn build_router(state: Arc<ServerState>) -> Router {
    let cors = if state.config.enable_cors {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
    };

    let service_routes = Router::new()
        .route("/", get(api_info))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check));

    let article_routes = Router::new()
        .route("/api/themes", get(articles::themes))
        .route("/api/recent_articles", get(articles::recent_articles))
        .route("/api/random_articles", get(articles::random_articles))
        .route("/api/look_for_articles", get(articles::look_for_articles))
        .route("/api/similar_articles", get(articles::similar_articles));

    Router::new()
        .merge(service_routes)
        .merge(article_routes)
        .fallback(not_found)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            state.config.timeout(),
        ))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(from_fn(log_requests))
        .layer(from_fn(request_id))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Install the global tracing subscriber
///
/// A second call (tests, embedding) keeps the first subscriber.
pub fn init_tracing(config: &ServerConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.log_level.as_str())
        .with_target(false)
        .with_thread_ids(true);

    let result = if config.log_json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if let Err(err) = result {
        tracing::debug!(error = %err, "tracing subscriber already installed");
    }
}

/// Start the HTTP server
///
/// Blocks until the server is shut down via SIGTERM or Ctrl+C.
///
/// ```rust,no_run
/// use server::ServerConfig;
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let config = ServerConfig::load()?;
///     server::start_server(config).await?;
///     Ok(())
/// }
/// ```
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    init_tracing(&config);
    once_cell::sync::Lazy::force(&health::SERVER_START_TIME);

    let state = Arc::new(ServerState::new(config.clone())?);
    let app = build_router(state);

    let addr: SocketAddr = config.socket_addr()?;

    tracing::info!("Starting articles server on {}", addr);
    tracing::info!(
        "Data dir: {}, timeout: {}s, CORS: {}",
        config.catalog.data_dir.display(),
        config.timeout_secs,
        config.enable_cors
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Shutdown signal handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
