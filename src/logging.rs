//! Diagnostic logging setup for the binary

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding a log filter directive, checked before `RUST_LOG`.
pub const LOG_ENV: &str = "LINESIFT_LOG";

const DEFAULT_LOG_FILTER: &str = "warn";

/// Filter directive for a `-v` count: 0 = warn, 1 = info, 2 = debug, 3+ = trace.
pub fn verbosity_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => DEFAULT_LOG_FILTER,
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a stderr subscriber.
///
/// An explicit `-v` wins over the environment; otherwise `LINESIFT_LOG`, then
/// `RUST_LOG`, then the default `warn` filter apply.
pub fn init(verbose: u8) {
    let filter = if verbose > 0 {
        EnvFilter::new(verbosity_filter(verbose))
    } else {
        EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    };

    // Ignore the error if a subscriber is already installed
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
