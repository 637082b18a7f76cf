use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global tracing subscriber, writing to stderr.
///
/// Reads `RUST_LOG` first and falls back to `default_level`. Calling it again
/// after a subscriber is installed has no effect.
pub fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
