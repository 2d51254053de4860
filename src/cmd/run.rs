//! `playfab-proxy run`: start the proxy server.
//!
//! Builds the immutable [`ProxyConfig`], starts the Axum HTTP server with
//! graceful shutdown, and logs the request counters on exit.

use std::net::SocketAddr;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use crate::cli::RunArgs;
use crate::config::ProxyConfig;
use crate::error::ProxyError;
use crate::logging;
use crate::proxy::upstream::PlayFabUpstream;
use crate::server::{self, AppState};

pub async fn execute(args: RunArgs) -> Result<(), ProxyError> {
    let log_format = logging::resolve_format(args.pretty, args.json);
    logging::init(&args.log_level, log_format);

    #[cfg(feature = "sentry-integration")]
    let _sentry_guard = args
        .sentry_dsn
        .as_ref()
        .map(|dsn| crate::sentry_integration::init(dsn, args.sentry_environment.as_deref()));

    let config = ProxyConfig::with_origin(&args.title_id, args.upstream_origin.as_deref())?;
    let upstream_origin = config.upstream_origin().clone();

    let state = Arc::new(AppState::new(config, Arc::new(PlayFabUpstream::new())));
    let router = server::build_router(Arc::clone(&state), args.max_body);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(
        addr = %addr,
        title_id = %state.config.title_id(),
        upstream = %upstream_origin,
        max_body = args.max_body,
        "playfab-proxy started"
    );

    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(server::shutdown_signal())
    .await?;

    tracing::info!(
        forwarded = state.stats.forwarded.load(Ordering::Relaxed),
        failed = state.stats.failed.load(Ordering::Relaxed),
        uptime_seconds = state.start_time.elapsed().as_secs(),
        "playfab-proxy stopped"
    );
    Ok(())
}
