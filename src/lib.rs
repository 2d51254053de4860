//! playfab-proxy is a pass-through HTTP proxy for the PlayFab client API.
//!
//! It relays game-client requests to `https://{title}.playfabapi.com`,
//! passing the client's session ticket along as `X-Authorization`, and
//! answers a few endpoints locally with fixed payloads. Whatever happens
//! upstream, the proxy replies `200 OK` with a JSON body.
//!
//! # Architecture
//!
//! - [`cli`] -- Command-line argument parsing with clap derive macros.
//! - [`cmd`] -- Subcommand dispatch and execution (run, health).
//! - [`config`] -- The immutable [`ProxyConfig`](config::ProxyConfig) and its validation.
//! - [`error`] -- Unified error types using `thiserror`.
//! - [`logging`] -- Structured tracing setup with JSON and pretty-print output.
//! - [`middleware`] -- Per-request logging and correlation ids.
//! - [`proxy`] -- Route table, session-ticket handling, canned payloads, and
//!   the relay to PlayFab behind the [`Upstream`](proxy::upstream::Upstream) trait.
//! - [`server`] -- Axum server setup, shared application state, HTTP client, and
//!   graceful shutdown.
//!
//! # Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `sentry-integration` | Sentry error tracking |
//! | `full` | All features |

// Binary crate: public functions are internal, not consumed by external users.
#![allow(clippy::missing_errors_doc)]

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod proxy;
pub mod server;

#[cfg(feature = "sentry-integration")]
pub mod sentry_integration;
