//! Relay of a single request to the PlayFab API.
//!
//! [`forward`] builds the upstream URL from the [`ProxyConfig`], attaches
//! the outbound headers, sends through an [`Upstream`], and returns the
//! upstream body as JSON without interpreting it. Upstream error statuses
//! are relayed like any other body. Only a failure to get a response at
//! all is an `Err`; [`error_body`] turns it into the `{"error": ...}`
//! payload the caller sees.

use std::time::Instant;

use bytes::Bytes;
use serde_json::{json, Value};

use crate::config::ProxyConfig;
use crate::error::ProxyError;

use super::headers::build_outbound_headers;
use super::upstream::{OutboundRequest, Upstream};

pub struct ForwardRequest<'a> {
    pub upstream: &'a dyn Upstream,
    pub config: &'a ProxyConfig,
    pub endpoint: &'a str,
    pub body: &'a Value,
    pub token: Option<&'a str>,
    pub correlation_id: &'a str,
}

#[allow(clippy::cast_possible_truncation)]
pub async fn forward(req: ForwardRequest<'_>) -> Result<Value, ProxyError> {
    let url = req.config.upstream_url(req.endpoint);
    let headers = build_outbound_headers(req.token)?;
    let body = Bytes::from(serde_json::to_vec(req.body)?);

    let start = Instant::now();
    let result = req
        .upstream
        .send(OutboundRequest {
            url: url.clone(),
            headers,
            body,
        })
        .await;
    let latency_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(response) => {
            tracing::info!(
                correlation_id = %req.correlation_id,
                upstream = req.upstream.name(),
                target = %url,
                status = response.status.as_u16(),
                authorized = req.token.is_some(),
                latency_ms,
                "upstream responded"
            );
            Ok(parse_upstream_body(&response.body))
        }
        Err(e) => {
            tracing::warn!(
                correlation_id = %req.correlation_id,
                upstream = req.upstream.name(),
                target = %url,
                error = %e,
                latency_ms,
                "upstream request failed"
            );
            Err(e)
        }
    }
}

/// Payload returned to the client when no upstream response is available.
#[must_use]
pub fn error_body(err: &ProxyError) -> Value {
    json!({ "error": err.to_string() })
}

/// Upstream body as JSON; non-JSON text is relayed as a JSON string.
#[must_use]
pub fn parse_upstream_body(body: &[u8]) -> Value {
    serde_json::from_slice(body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
}
