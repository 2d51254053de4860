//! Session-ticket extraction and outbound header construction.
//!
//! [`extract_token`] resolves the client's session ticket according to a
//! route's [`TokenSource`]: the `x-sessionticket` header first, then (for
//! the fallback route) the `SessionTicket` field of the JSON body. Empty
//! values count as absent. [`build_outbound_headers`] produces the only
//! headers PlayFab receives; client headers are never copied through.

use axum::http::{HeaderMap, HeaderValue};
use hyper::header::CONTENT_TYPE;
use serde_json::Value;

use crate::error::ProxyError;

use super::routing::TokenSource;

pub const SESSION_TICKET_HEADER: &str = "x-sessionticket";
pub const SESSION_TICKET_FIELD: &str = "SessionTicket";
pub const AUTHORIZATION_HEADER: &str = "x-authorization";

#[must_use]
pub fn extract_token<'a>(
    source: TokenSource,
    headers: &'a HeaderMap,
    body: &'a Value,
) -> Option<&'a str> {
    match source {
        TokenSource::None => None,
        TokenSource::Header => header_token(headers),
        TokenSource::HeaderThenBody => header_token(headers).or_else(|| body_token(body)),
    }
}

fn header_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(SESSION_TICKET_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
}

fn body_token(body: &Value) -> Option<&str> {
    body.get(SESSION_TICKET_FIELD)
        .and_then(Value::as_str)
        .filter(|v| !v.is_empty())
}

/// Headers for the upstream POST: JSON content type plus `X-Authorization` when a token is present.
pub fn build_outbound_headers(token: Option<&str>) -> Result<HeaderMap, ProxyError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    if let Some(token) = token.filter(|t| !t.is_empty()) {
        let mut value = HeaderValue::from_str(token).map_err(|source| ProxyError::InvalidHeader {
            name: "X-Authorization",
            source,
        })?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION_HEADER, value);
    }

    Ok(headers)
}
