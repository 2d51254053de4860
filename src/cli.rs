//! Command-line interface definitions using clap derive macros.
//!
//! Contains the top-level [`Cli`] parser, the [`Commands`] enum for
//! subcommands (run, health), and their associated argument structs.
//! Every `run` flag has an environment variable equivalent for
//! serverless and container deployments.

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::{DEFAULT_MAX_BODY, DEFAULT_TITLE_ID};

#[derive(Parser)]
#[command(
    name = "playfab-proxy",
    version,
    about = "Pass-through HTTP proxy for the PlayFab client API",
    propagate_version = true,
    after_help = "\x1b[1mQuick start:\x1b[0m\n  \
        playfab-proxy run                        Proxy to the default title on :3000\n  \
        playfab-proxy run --title-id ABCD1       Proxy to another title\n  \
        playfab-proxy health                     Check a local instance"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the proxy server
    Run(Box<RunArgs>),

    /// Check that a running instance answers
    Health(HealthArgs),
}

#[derive(Args)]
#[command(after_help = "\x1b[1mExamples:\x1b[0m\n  \
        playfab-proxy run                              Defaults\n  \
        playfab-proxy run -p 8080 --pretty             Local dev mode\n  \
        PLAYFAB_TITLE_ID=ABCD1 playfab-proxy run       Title from environment")]
pub struct RunArgs {
    /// Listen port
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Listen address
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// PlayFab title identifier used to build the upstream host
    #[arg(short, long, env = "PLAYFAB_TITLE_ID", default_value = DEFAULT_TITLE_ID)]
    pub title_id: String,

    /// Replace https://{title}.playfabapi.com (local testing only)
    #[arg(long, env = "PLAYFAB_UPSTREAM_ORIGIN", hide = true)]
    pub upstream_origin: Option<String>,

    // -- Logging --
    /// Log level
    #[arg(short, long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: LogLevel,

    /// Force pretty (human-readable) log output
    #[arg(long)]
    pub pretty: bool,

    /// Force JSON log output (overrides TTY detection)
    #[arg(long, conflicts_with = "pretty")]
    pub json: bool,

    // -- Observability --
    /// Sentry DSN (enables error tracking)
    #[cfg(feature = "sentry-integration")]
    #[arg(long, env = "SENTRY_DSN", help_heading = "Observability")]
    pub sentry_dsn: Option<String>,

    /// Sentry environment tag
    #[cfg(feature = "sentry-integration")]
    #[arg(long, env = "SENTRY_ENVIRONMENT", help_heading = "Observability")]
    pub sentry_environment: Option<String>,

    // -- Tuning --
    /// Max request body size in bytes
    #[arg(
        long,
        env = "MAX_BODY_SIZE",
        default_value_t = DEFAULT_MAX_BODY,
        help_heading = "Tuning"
    )]
    pub max_body: usize,
}

#[derive(Args)]
pub struct HealthArgs {
    /// URL of the running instance
    #[arg(default_value = "http://localhost:3000")]
    pub url: String,
}

#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    #[must_use]
    pub const fn to_tracing_level(&self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn run_default(id: &str) -> Option<String> {
        let cli = Cli::command();
        let run = cli.find_subcommand("run").unwrap();
        let arg = run.get_arguments().find(|a| a.get_id() == id).unwrap();
        arg.get_default_values()
            .first()
            .map(|v| v.to_string_lossy().into_owned())
    }

    // Read from the declared defaults, not a parse, so PORT / PLAYFAB_TITLE_ID
    // / MAX_BODY_SIZE in the test environment cannot leak in.
    #[test]
    fn run_defaults() {
        assert_eq!(run_default("port").as_deref(), Some("3000"));
        assert_eq!(run_default("host").as_deref(), Some("0.0.0.0"));
        assert_eq!(run_default("title_id").as_deref(), Some(DEFAULT_TITLE_ID));
        assert_eq!(run_default("max_body"), Some(DEFAULT_MAX_BODY.to_string()));
        assert_eq!(run_default("log_level").as_deref(), Some("info"));
        assert_eq!(run_default("upstream_origin"), None);
    }

    #[test]
    fn run_flags_take_precedence() {
        let cli = Cli::try_parse_from([
            "playfab-proxy",
            "run",
            "--port",
            "8080",
            "--title-id",
            "ABCD1",
            "--max-body",
            "2048",
            "--upstream-origin",
            "http://127.0.0.1:9000",
            "--log-level",
            "warn",
        ])
        .unwrap();
        let Some(Commands::Run(args)) = cli.command else {
            panic!("expected run subcommand");
        };
        assert_eq!(args.port, 8080);
        assert_eq!(args.title_id, "ABCD1");
        assert_eq!(args.max_body, 2048);
        assert_eq!(args.upstream_origin.as_deref(), Some("http://127.0.0.1:9000"));
        assert!(matches!(args.log_level, LogLevel::Warn));
    }

    #[test]
    fn pretty_and_json_conflict() {
        let result = Cli::try_parse_from(["playfab-proxy", "run", "--pretty", "--json"]);
        assert!(result.is_err());
    }

    #[test]
    fn health_takes_url() {
        let cli = Cli::try_parse_from(["playfab-proxy", "health", "http://10.0.0.2:3000"]).unwrap();
        let Some(Commands::Health(args)) = cli.command else {
            panic!("expected health subcommand");
        };
        assert_eq!(args.url, "http://10.0.0.2:3000");
    }
}
