use tracing_subscriber::{fmt, EnvFilter};

/// Installs a stderr `fmt` subscriber so tracing output never mixes with the
/// tables printed on stdout.
pub fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    // Already set when running under the test harness.
    let _ = tracing::subscriber::set_global_default(subscriber);
}
