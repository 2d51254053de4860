//! `playfab-proxy health`: check that a running instance answers.
//!
//! Sends `GET /` to the specified URL and succeeds only when the
//! instance replies `200 OK` with the proxy banner.

use std::time::Instant;

use http_body_util::BodyExt;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;

use crate::cli::HealthArgs;
use crate::error::ProxyError;
use crate::proxy::canned::BANNER;

pub async fn execute(args: HealthArgs) -> Result<(), ProxyError> {
    let url = format!("{}/", args.url.trim_end_matches('/'));
    let uri: hyper::Uri =
        url.parse().map_err(
            |e: hyper::http::uri::InvalidUri| ProxyError::UriParse {
                source: Box::new(e),
            },
        )?;

    let connector = hyper_util::client::legacy::connect::HttpConnector::new();
    let client = Client::builder(TokioExecutor::new()).build(connector);

    let req = hyper::Request::builder()
        .uri(uri)
        .body(http_body_util::Full::new(bytes::Bytes::new()))
        .map_err(|e| ProxyError::HttpRequest {
            source: Box::new(e),
        })?;

    let start = Instant::now();
    let response = tokio::time::timeout(std::time::Duration::from_secs(10), client.request(req))
        .await
        .map_err(|_| ProxyError::HttpRequest {
            source: "health check timed out after 10s".into(),
        })?
        .map_err(|e| ProxyError::HttpRequest {
            source: Box::new(e),
        })?;

    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .map_err(|e| ProxyError::HttpRequest {
            source: Box::new(e),
        })?
        .to_bytes();

    if !status.is_success() {
        return Err(ProxyError::HealthCheckFailed(status));
    }
    if !is_banner(&body) {
        return Err(ProxyError::UnexpectedBanner { url });
    }

    println!(
        "\u{2713} playfab-proxy is running ({}, {}ms)",
        args.url,
        start.elapsed().as_millis()
    );
    Ok(())
}

fn is_banner(body: &[u8]) -> bool {
    String::from_utf8_lossy(body).trim() == BANNER
}
