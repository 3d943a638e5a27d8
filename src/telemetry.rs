#![deny(clippy::all, clippy::pedantic)]

use tracing::{Dispatch, Level, dispatcher, error};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::client::CliError;
use crate::config::LoggingSettings;

/// Install a global tracing subscriber writing to stderr. `RUST_LOG`
/// overrides the configured level.
pub fn init(logging: &LoggingSettings) -> Result<(), CliError> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(logging.level.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(ErrorLayer::default())
        .with(fmt_layer)
        .try_init()
        .map_err(|err| CliError::Telemetry(format!("failed to install tracing subscriber: {err}")))
}

/// Emit a fatal error, falling back to a throwaway error-level subscriber
/// when [`init`] never ran or failed.
pub fn report_fatal(err: &CliError) {
    if dispatcher::has_been_set() {
        error!(error = %err, "render failed");
        return;
    }

    let subscriber = fmt()
        .with_max_level(Level::ERROR)
        .with_writer(std::io::stderr)
        .finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %err, "render failed");
    });
}
