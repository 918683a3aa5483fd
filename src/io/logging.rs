//! Diagnostic logging setup for the command-line tool

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Directive used when `RUST_LOG` is unset
pub const fn default_directive(quiet: bool) -> &'static str {
    if quiet { "exprsynth=warn" } else { "exprsynth=info" }
}

/// Install a stderr subscriber filtered by `RUST_LOG`
///
/// Returns `false` if a global subscriber was already installed, in which
/// case that subscriber keeps receiving events.
pub fn init_logging(quiet: bool) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(quiet)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()
        .is_ok()
}
