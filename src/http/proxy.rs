//! Request forwarding.
//!
//! # Responsibilities
//! - Rewrite the request URI to the matched upstream (scheme + authority)
//! - Forward method, headers, path, query and body unchanged
//! - Stream the backend response back verbatim
//!
//! # Design Decisions
//! - One shared pooled client for all upstreams (they are all localhost)
//! - The Host header is dropped so the client regenerates it for the target
//! - No retries and no timeout overrides; a failed forward surfaces as-is

use std::str::FromStr;

use axum::body::Body;
use axum::http::uri::{Authority, PathAndQuery, Scheme};
use axum::http::{header, Request, Response, Uri};
use hyper::body::Incoming;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use thiserror::Error;

use crate::routing::Upstream;

/// HTTP client used to reach backends.
pub type ProxyClient = Client<HttpConnector, Body>;

/// Error type for a failed forward.
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("invalid upstream authority: {0}")]
    Authority(#[from] axum::http::uri::InvalidUri),

    #[error("invalid upstream uri: {0}")]
    Uri(#[from] axum::http::uri::InvalidUriParts),

    #[error("upstream request failed: {0}")]
    Upstream(#[from] hyper_util::client::legacy::Error),
}

/// Build the shared backend client.
pub fn build_client() -> ProxyClient {
    Client::builder(TokioExecutor::new()).build(HttpConnector::new())
}

/// Forward `request` to `upstream` and return the backend response.
pub async fn forward(
    client: &ProxyClient,
    mut request: Request<Body>,
    upstream: &Upstream,
) -> Result<Response<Body>, ProxyError> {
    let authority = Authority::from_str(upstream.authority())?;

    let mut parts = request.uri().clone().into_parts();
    parts.scheme = Some(Scheme::HTTP);
    parts.authority = Some(authority);
    if parts.path_and_query.is_none() {
        parts.path_and_query = Some(PathAndQuery::from_static("/"));
    }

    *request.uri_mut() = Uri::from_parts(parts)?;
    request.headers_mut().remove(header::HOST);

    let response: Response<Incoming> = client.request(request).await?;
    let (parts, body) = response.into_parts();
    Ok(Response::from_parts(parts, Body::new(body)))
}
