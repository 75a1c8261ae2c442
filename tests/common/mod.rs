//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::Router;
use tokio::net::TcpListener;

use model_router::config::RouterConfig;
use model_router::http::HttpServer;

/// What a mock backend saw for its most recent request.
#[derive(Debug, Default, Clone)]
pub struct CapturedRequest {
    pub path_and_query: String,
    pub body: Vec<u8>,
}

pub type Capture = Arc<Mutex<Option<CapturedRequest>>>;

/// Start a mock backend on an ephemeral port.
///
/// Records the last request it received and answers 200 with `tag` as the
/// body, so tests can tell which backend a request landed on.
pub async fn start_capture_backend(tag: &'static str) -> (u16, Capture) {
    let captured: Capture = Arc::new(Mutex::new(None));
    let seen = captured.clone();

    let app = Router::new().fallback(move |request: Request<Body>| {
        let seen = seen.clone();
        async move {
            let path_and_query = request
                .uri()
                .path_and_query()
                .map(|pq| pq.to_string())
                .unwrap_or_default();
            let bytes = to_bytes(request.into_body(), usize::MAX).await.unwrap();
            *seen.lock().unwrap() = Some(CapturedRequest {
                path_and_query,
                body: bytes.to_vec(),
            });
            tag
        }
    });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (port, captured)
}

/// Start the router on an ephemeral port with the given model string.
pub async fn start_router(model_spec: &str) -> SocketAddr {
    let config = RouterConfig {
        model_spec: model_spec.to_string(),
        ..RouterConfig::default()
    };
    let server = HttpServer::new(config).expect("valid model configuration");

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    addr
}

/// Client that never routes through an environment proxy.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
