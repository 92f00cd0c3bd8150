use std::io;

use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// Defaults to `warn`; `RUST_LOG` overrides the filter (e.g.
/// `RUST_LOG=riskgrid_prep=debug` to watch pool sizes and fallbacks).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
