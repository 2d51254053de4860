//! Optional Sentry error tracking.
//!
//! Initializes the Sentry SDK with the provided DSN and environment. Error
//! events reach Sentry through the `sentry_tracing` layer installed by
//! [`logging::init`](crate::logging::init), so upstream transport failures
//! logged at `warn` show up as breadcrumbs. The returned guard must be held
//! for the lifetime of the process.

pub fn init(dsn: &str, environment: Option<&str>) -> sentry::ClientInitGuard {
    let parsed_dsn = match dsn.parse() {
        Ok(d) => Some(d),
        Err(e) => {
            tracing::warn!(error = %e, "invalid Sentry DSN, error tracking disabled");
            None
        }
    };

    sentry::init(sentry::ClientOptions {
        dsn: parsed_dsn,
        environment: environment.map(|e| e.to_string().into()),
        release: Some(concat!(env!("CARGO_PKG_NAME"), "@", env!("CARGO_PKG_VERSION")).into()),
        attach_stacktrace: true,
        ..Default::default()
    })
}
