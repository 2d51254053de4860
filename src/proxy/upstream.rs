//! Transport to the PlayFab API.
//!
//! The [`Upstream`] trait is the seam between request handling and the
//! network: [`PlayFabUpstream`] sends over the pooled hyper + rustls
//! client, while tests plug in recording stubs.

use async_trait::async_trait;
use axum::http::{HeaderMap, Method, StatusCode};
use bytes::Bytes;
use http_body_util::{BodyExt, Full};

use crate::error::ProxyError;
use crate::server::{build_http_client, HttpClient};

/// A fully prepared upstream POST.
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    pub url: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// Whatever the upstream answered, whatever the status.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

// async_trait is required here because Upstream is held as Arc<dyn Upstream>
// and native async fn in traits does not support dyn dispatch.
#[async_trait]
pub trait Upstream: Send + Sync {
    fn name(&self) -> &'static str;

    /// Send `request` as a POST. `Err` means no response was received.
    async fn send(&self, request: OutboundRequest) -> Result<UpstreamResponse, ProxyError>;
}

pub struct PlayFabUpstream {
    client: HttpClient,
}

impl PlayFabUpstream {
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: build_http_client(),
        }
    }
}

impl Default for PlayFabUpstream {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Upstream for PlayFabUpstream {
    fn name(&self) -> &'static str {
        "playfab"
    }

    async fn send(&self, request: OutboundRequest) -> Result<UpstreamResponse, ProxyError> {
        let uri: hyper::Uri = request.url.parse().map_err(
            |e: hyper::http::uri::InvalidUri| ProxyError::UriParse {
                source: Box::new(e),
            },
        )?;

        let mut req = hyper::Request::new(Full::new(request.body));
        *req.method_mut() = Method::POST;
        *req.uri_mut() = uri;
        *req.headers_mut() = request.headers;

        let response = self
            .client
            .request(req)
            .await
            .map_err(|e| ProxyError::Upstream {
                source: Box::new(e),
            })?;

        let status = response.status();
        let body = response
            .into_body()
            .collect()
            .await
            .map_err(|e| ProxyError::Upstream {
                source: Box::new(e),
            })?
            .to_bytes();

        Ok(UpstreamResponse { status, body })
    }
}
