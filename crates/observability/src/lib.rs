//! Tracing/logging setup shared by the binaries.

use tracing_subscriber::EnvFilter;

/// Initialize process-wide tracing.
///
/// Logs go to stderr so they never interleave with the interactive
/// prompt on stdout. Filtering is configurable via `RUST_LOG`; the
/// default keeps the shell quiet (`warn`), placement decisions become
/// visible at `debug`.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    init_with_default("warn");
}

/// Initialize with an explicit default filter, still overridable by
/// `RUST_LOG`.
pub fn init_with_default(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
