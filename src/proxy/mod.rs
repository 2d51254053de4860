//! Core request dispatch.
//!
//! The [`dispatch_handler`] function is the Axum fallback that receives
//! every request, resolves it against the route table, and either
//! answers from a canned payload or relays it to PlayFab. The proxy
//! itself always answers `200 OK`; upstream errors and transport
//! failures travel inside the JSON body. Submodules handle route
//! matching ([`routing`]), session tickets and outbound headers
//! ([`headers`]), fixed payloads ([`canned`]), the relay ([`forward`]),
//! and the network transport ([`upstream`]).

pub mod canned;
pub mod forward;
pub mod headers;
pub mod routing;
pub mod upstream;

use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use hyper::header::CONTENT_TYPE;
use serde_json::{Map, Value};

use crate::error::ProxyError;
use crate::middleware::CorrelationId;
use crate::server::AppState;

use routing::{Action, Endpoint, TokenSource};

pub async fn dispatch_handler(
    State(state): State<Arc<AppState>>,
    Extension(correlation_id): Extension<CorrelationId>,
    method: Method,
    uri: Uri,
    req_headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path();

    match *routing::match_route(method.as_str(), path) {
        Action::Banner => canned::BANNER.into_response(),

        Action::CatalogItems => Json(canned::catalog_items()).into_response(),

        Action::UserInventory => {
            // The ticket is resolved but unused: this endpoint is mocked.
            let body = parse_inbound_body(&req_headers, &body).unwrap_or(Value::Null);
            let has_ticket =
                headers::extract_token(TokenSource::HeaderThenBody, &req_headers, &body)
                    .is_some();
            tracing::debug!(
                correlation_id = %correlation_id.0,
                session_ticket = has_ticket,
                "serving mock inventory"
            );
            Json(canned::user_inventory()).into_response()
        }

        Action::Forward { endpoint, token } => {
            let body = match parse_inbound_body(&req_headers, &body) {
                Ok(body) => body,
                Err(e) => {
                    tracing::warn!(
                        correlation_id = %correlation_id.0,
                        path = %path,
                        error = %e,
                        "rejecting malformed request body"
                    );
                    state.stats.failed.fetch_add(1, Ordering::Relaxed);
                    return Json(forward::error_body(&e)).into_response();
                }
            };

            let endpoint = match endpoint {
                Endpoint::Fixed(endpoint) => endpoint,
                Endpoint::RequestPath => routing::endpoint_path(path),
            };

            let request = forward::ForwardRequest {
                upstream: state.upstream.as_ref(),
                config: &state.config,
                endpoint,
                body: &body,
                token: headers::extract_token(token, &req_headers, &body),
                correlation_id: &correlation_id.0,
            };

            match forward::forward(request).await {
                Ok(payload) => {
                    state.stats.forwarded.fetch_add(1, Ordering::Relaxed);
                    Json(payload).into_response()
                }
                Err(e) => {
                    state.stats.failed.fetch_add(1, Ordering::Relaxed);
                    Json(forward::error_body(&e)).into_response()
                }
            }
        }
    }
}

/// Inbound body as JSON.
///
/// Bodies that are empty or not declared `application/json` are treated
/// as an empty object, which is what gets forwarded upstream. Only objects
/// and arrays are accepted at the top level; a bare scalar is an error.
pub fn parse_inbound_body(headers: &HeaderMap, body: &[u8]) -> Result<Value, ProxyError> {
    if !is_json(headers) || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }
    let value: Value = serde_json::from_slice(body)?;
    if !(value.is_object() || value.is_array()) {
        let e = <serde_json::Error as serde::de::Error>::custom(
            "top-level value must be an object or array",
        );
        return Err(ProxyError::InvalidBody(e));
    }
    Ok(value)
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use serde_json::json;

    fn json_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );
        headers
    }

    #[test]
    fn parses_json_body() {
        let value = parse_inbound_body(&json_headers(), br#"{"FunctionName":"f"}"#).unwrap();
        assert_eq!(value, json!({ "FunctionName": "f" }));
    }

    #[test]
    fn empty_body_is_empty_object() {
        assert_eq!(parse_inbound_body(&json_headers(), b"").unwrap(), json!({}));
        assert_eq!(parse_inbound_body(&json_headers(), b" \n").unwrap(), json!({}));
    }

    #[test]
    fn non_json_content_type_is_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        assert_eq!(parse_inbound_body(&headers, b"hello").unwrap(), json!({}));
        assert_eq!(parse_inbound_body(&HeaderMap::new(), b"{}").unwrap(), json!({}));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = parse_inbound_body(&json_headers(), b"{not json").unwrap_err();
        assert!(matches!(err, ProxyError::InvalidBody(_)));
    }

    #[test]
    fn top_level_scalars_are_rejected() {
        let bodies: [&[u8]; 4] = [b"\"hello\"", b"42", b"true", b"null"];
        for body in bodies {
            let err = parse_inbound_body(&json_headers(), body).unwrap_err();
            assert!(matches!(err, ProxyError::InvalidBody(_)));
            assert!(err.to_string().starts_with("Invalid JSON body"));
        }
    }

    #[test]
    fn top_level_array_is_accepted() {
        let value = parse_inbound_body(&json_headers(), b"[1,2]").unwrap();
        assert_eq!(value, json!([1, 2]));
    }
}
