//! HTTP server setup and dispatch.
//!
//! # Responsibilities
//! - Create the Axum router with the two entry routes
//! - Wire up middleware (tracing)
//! - Build the route table and backend client at startup
//! - Dispatch extracted identifiers against the route table
//! - Serve with graceful shutdown
//!
//! # Design Decisions
//! - Both entry routes converge on one `dispatch` function so lookup and
//!   error handling are never duplicated
//! - `/metrics` is registered before the catch-all, so the query strategy
//!   wins for that one path and the body strategy covers everything else

use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::Request;
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::{parse_model_config, ConfigError, RouterConfig};
use crate::http::extract::{self, MetricsQuery};
use crate::http::proxy::{self, ProxyClient};
use crate::http::response::ApiError;
use crate::routing::RouteTable;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<RouteTable>,
    pub client: ProxyClient,
    pub max_body_bytes: usize,
}

/// HTTP server for the model router.
pub struct HttpServer {
    router: Router,
    table: Arc<RouteTable>,
}

impl HttpServer {
    /// Create a new server from the given configuration.
    ///
    /// Parses the model configuration string; a malformed string fails here,
    /// before any listener exists.
    pub fn new(config: RouterConfig) -> Result<Self, ConfigError> {
        let table = Arc::new(parse_model_config(&config.model_spec)?);

        let state = AppState {
            table: table.clone(),
            client: proxy::build_client(),
            max_body_bytes: config.max_body_bytes,
        };

        let router = Self::build_router(state);
        Ok(Self { router, table })
    }

    /// Build the Axum router with both extraction routes.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/metrics", any(metrics_handler))
            .route("/", any(api_handler))
            .route("/{*path}", any(api_handler))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// The route table built from the configuration.
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            models = self.table.len(),
            "Starting model router"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Model router stopped");
        Ok(())
    }
}

/// Body-strategy entry route: the model name comes from the JSON body.
async fn api_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    match extract::model_from_body(request, state.max_body_bytes).await {
        Ok((model, request)) => dispatch(&state, &model, request).await,
        Err(err) => err.into_response(),
    }
}

/// Query-strategy entry route: the model name comes from `?model=`.
async fn metrics_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let model = Query::<MetricsQuery>::try_from_uri(request.uri())
        .map(|Query(query)| query.model)
        .unwrap_or_default();

    dispatch(&state, &model, request).await
}

/// Shared dispatch: look the identifier up and forward, or answer with the
/// JSON error envelope. An empty identifier is an ordinary miss.
async fn dispatch(state: &AppState, model: &str, request: Request<Body>) -> Response {
    let Some(upstream) = state.table.lookup(model) else {
        return ApiError::model_not_found().into_response();
    };

    tracing::debug!(
        model = %model,
        upstream = %upstream.authority(),
        method = %request.method(),
        path = %request.uri().path(),
        "Dispatching request"
    );

    match proxy::forward(&state.client, request, upstream).await {
        Ok(response) => response,
        Err(err) => {
            tracing::error!(model = %model, error = %err, "Upstream error");
            ApiError::upstream(err).into_response()
        }
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
