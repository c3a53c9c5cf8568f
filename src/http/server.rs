//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the API handlers
//! - Serve the static frontend for every other path
//! - Wire up middleware (tracing, request ID, CORS, metrics, panic capture)
//! - Run on a listener until the shutdown signal fires

use axum::{
    http::{HeaderValue, Method},
    middleware,
    routing::get,
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::config::{CorsConfig, ProviderConfig, RelayConfig};
use crate::http::handlers;
use crate::http::request::MakeRequestUuid;
use crate::http::response::panic_response;
use crate::observability::metrics;
use crate::provider::{ProviderClient, RelayResult};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub provider: ProviderClient,
    pub provider_config: Arc<ProviderConfig>,
}

/// HTTP server for the relay.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: RelayConfig) -> RelayResult<Self> {
        let provider = ProviderClient::new(&config.provider)?;
        if !provider.has_api_key() {
            tracing::warn!("No provider API key configured; data endpoints will return 500");
        }

        let state = AppState {
            provider,
            provider_config: Arc::new(config.provider.clone()),
        };

        let router = build_router(&config, state);
        Ok(Self { router })
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The fully layered router, for driving the service without a socket.
    pub fn into_router(self) -> Router {
        self.router
    }
}

/// Build the Axum router with all middleware layers.
pub fn build_router(config: &RelayConfig, state: AppState) -> Router {
    let mut router = Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/stock-data", get(handlers::stock_data))
        .route("/api/quote", get(handlers::quote))
        .route_layer(middleware::from_fn(metrics::track_requests))
        .with_state(state);

    if config.frontend.enabled {
        tracing::info!(dir = %config.frontend.static_dir, "Serving static frontend");
        router = router.fallback_service(ServeDir::new(&config.frontend.static_dir));
    }

    if config.cors.enabled {
        router = router.layer(cors_layer(&config.cors));
    }

    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origin = if config.allowed_origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(
            config
                .allowed_origins
                .iter()
                .filter_map(|o| HeaderValue::from_str(o).ok()),
        )
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
}
