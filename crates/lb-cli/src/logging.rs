//! Diagnostic logging for the `ladybug` binary.
//!
//! Logging goes to stderr and is separate from the command output and the
//! behavior trace, which go to stdout.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber.
///
/// `level` (from `--log-level`) wins over `RUST_LOG`; with neither, only
/// warnings are shown.
///
/// ```bash
/// RUST_LOG=lb_behavior=debug ladybug script.txt
/// ```
pub fn init(level: Option<&str>) {
    let filter = match level {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
