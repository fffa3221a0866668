//! Log output setup
//!
//! Logs go to stderr through `tracing-subscriber`; `RUST_LOG` overrides the
//! level picked from the command line.

use crate::output::Verbosity;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive for a verbosity level
pub fn default_directive(verbosity: Verbosity) -> &'static str {
    match verbosity {
        Verbosity::Quiet => "softup=warn",
        Verbosity::Normal => "softup=info",
        Verbosity::Verbose => "softup=debug",
    }
}

/// Install the global subscriber for the CLI
pub fn init_cli_logger(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
