use tracing_subscriber::EnvFilter;

/// Initialize logging with tracing_subscriber.
///
/// Honors `RUST_LOG`, falling back to `info`. Output goes to stderr.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
