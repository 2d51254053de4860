//! Tower middleware layers applied ahead of the proxy handler.
//!
//! [`log_request`] records every inbound request (method, path, client
//! address) before it is dispatched, and attaches a [`CorrelationId`]
//! to the request extensions so later log lines can be tied together.

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, Request};
use axum::middleware::Next;
use axum::response::Response;

pub const CORRELATION_HEADER: &str = "x-correlation-id";

#[derive(Debug, Clone)]
pub struct CorrelationId(pub String);

impl CorrelationId {
    /// Reuse the caller's `x-correlation-id` when present, otherwise mint a v4 UUID.
    #[must_use]
    pub fn from_headers(headers: &axum::http::HeaderMap) -> Self {
        let id = headers
            .get(CORRELATION_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .map_or_else(|| uuid::Uuid::new_v4().to_string(), String::from);
        Self(id)
    }
}

pub async fn log_request(mut req: Request, next: Next) -> Response {
    let correlation_id = CorrelationId::from_headers(req.headers());

    // ConnectInfo is absent when the router is driven without a socket (e.g. oneshot in tests)
    let client = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map_or_else(|| "unknown".to_string(), |ConnectInfo(addr)| addr.ip().to_string());

    tracing::info!(
        correlation_id = %correlation_id.0,
        method = %req.method(),
        path = %req.uri().path(),
        client = %client,
        "request received"
    );

    req.extensions_mut().insert(correlation_id);
    next.run(req).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, HeaderValue};

    #[test]
    fn reuses_incoming_correlation_id() {
        let mut headers = HeaderMap::new();
        headers.insert(CORRELATION_HEADER, HeaderValue::from_static("abc-123"));
        assert_eq!(CorrelationId::from_headers(&headers).0, "abc-123");
    }

    #[test]
    fn generates_id_when_missing() {
        let id = CorrelationId::from_headers(&HeaderMap::new());
        assert!(uuid::Uuid::parse_str(&id.0).is_ok());
    }
}
