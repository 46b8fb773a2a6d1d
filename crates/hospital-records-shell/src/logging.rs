//! Stderr diagnostics for the record shell.
//!
//! Menu output owns stdout; store diagnostics (load/save failures at `error`,
//! skipped lines at `debug`) are kept on stderr.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber. Call once, before opening the store.
///
/// Filter comes from `RUST_LOG`, falling back to `warn` so that only failed
/// loads and saves are shown. To see skipped lines:
/// `RUST_LOG=hospital_records_core=debug hospital-records`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
