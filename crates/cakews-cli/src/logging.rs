//! Logging setup

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter used for the given verbosity
#[must_use]
pub fn filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    }
}

/// Install the global subscriber. Logs go to stderr so stdout stays parseable.
pub fn setup_logging(verbose: bool) {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter(verbose))
        .init();
}
