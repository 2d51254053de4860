//! Structured logging setup using the `tracing` ecosystem.
//!
//! Configures a `tracing-subscriber` with either JSON output (for
//! production) or pretty-printed output (for TTY / local dev). Format
//! is auto-detected from the terminal but can be forced via `--json`
//! or `--pretty`. Connection-level chatter from the HTTP client stack is
//! capped at `warn` regardless of the chosen level.

use tracing::Level;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::LogLevel;

/// Crates whose debug output describes connection pooling and TLS, not requests.
const NOISY_TARGETS: &[&str] = &["hyper_util", "hyper_rustls", "rustls"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

#[must_use]
pub fn resolve_format(pretty: bool, json: bool) -> LogFormat {
    if json {
        LogFormat::Json
    } else if pretty || std::io::IsTerminal::is_terminal(&std::io::stdout()) {
        LogFormat::Pretty
    } else {
        LogFormat::Json
    }
}

#[must_use]
pub fn filter(level: &LogLevel) -> Targets {
    let level = level.to_tracing_level();
    NOISY_TARGETS.iter().fold(
        Targets::new().with_default(level),
        |targets, target| targets.with_target(*target, level.min(Level::WARN)),
    )
}

pub fn init(level: &LogLevel, format: LogFormat) {
    let registry = tracing_subscriber::registry().with(filter(level));

    #[cfg(feature = "sentry-integration")]
    let registry = registry.with(sentry_tracing::layer());

    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_target(false))
            .init(),
        LogFormat::Pretty => registry.with(fmt::layer().pretty()).init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_flag_wins() {
        assert_eq!(resolve_format(false, true), LogFormat::Json);
    }

    #[test]
    fn pretty_flag_forces_pretty() {
        assert_eq!(resolve_format(true, false), LogFormat::Pretty);
    }

    #[test]
    fn noisy_targets_capped_at_warn() {
        let targets = filter(&LogLevel::Debug);
        assert!(targets.would_enable("playfab_proxy::proxy", &Level::DEBUG));
        assert!(!targets.would_enable("hyper_util::client", &Level::DEBUG));
        assert!(targets.would_enable("hyper_util::client", &Level::WARN));
    }

    #[test]
    fn quieter_default_applies_to_noisy_targets() {
        let targets = filter(&LogLevel::Error);
        assert!(!targets.would_enable("rustls", &Level::WARN));
        assert!(targets.would_enable("rustls", &Level::ERROR));
    }
}
