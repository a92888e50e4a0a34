//! Tracing subscriber initialization.

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize a global tracing subscriber writing to stderr.
///
/// Uses `filter` if given, else `RUST_LOG`, else `warn`. Later calls are
/// no-ops.
pub fn init_tracing(filter: Option<&str>) {
    let filter = match filter {
        Some(f) => EnvFilter::new(f),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
