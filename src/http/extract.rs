//! Model identifier extraction.
//!
//! # Responsibilities
//! - Body strategy: buffer the JSON body, pull out `model`, reinstall a
//!   replayable body so forwarding re-transmits the exact original bytes
//! - Query strategy: read the `model` query parameter; the body is untouched
//!
//! # Design Decisions
//! - The body is read once into `Bytes` and every downstream consumer gets
//!   a fresh view over the same buffer; the payload is never re-serialized,
//!   so field order and whitespace survive byte-for-byte
//! - A missing `model` field is an empty identifier (dispatch turns it into
//!   404), only malformed JSON is a 400
//! - No normalization: identifiers are case-sensitive and untrimmed

use axum::body::{to_bytes, Body, Bytes};
use axum::http::Request;
use serde::Deserialize;

use crate::http::response::ApiError;

/// The one body field the router cares about. Everything else in the
/// payload is opaque and forwarded as-is.
#[derive(Debug, Deserialize)]
struct ModelField {
    #[serde(default)]
    model: String,
}

/// Query shape for the `/metrics` route.
#[derive(Debug, Default, Deserialize)]
pub struct MetricsQuery {
    #[serde(default)]
    pub model: String,
}

/// Extract the `model` field from raw body bytes.
///
/// Errors only on malformed JSON; an absent field yields the empty string.
pub fn model_from_bytes(bytes: &Bytes) -> Result<String, serde_json::Error> {
    serde_json::from_slice::<ModelField>(bytes).map(|field| field.model)
}

/// Body extraction strategy.
///
/// Buffers the full body (up to `limit` bytes), extracts the identifier,
/// and returns the request rebuilt around a replayable copy of the exact
/// same bytes.
pub async fn model_from_body(
    request: Request<Body>,
    limit: usize,
) -> Result<(String, Request<Body>), ApiError> {
    let (parts, body) = request.into_parts();

    let bytes = to_bytes(body, limit).await.map_err(ApiError::body_read)?;
    let model = model_from_bytes(&bytes).map_err(ApiError::body_parse)?;

    let request = Request::from_parts(parts, Body::from(bytes));
    Ok((model, request))
}
