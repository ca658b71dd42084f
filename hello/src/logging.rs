//! Diagnostics for the module itself. Loaded as a shared library, the
//! module carries its own copy of `tracing`, so a host's subscriber never
//! sees these events. [`init_logging`] installs one inside the module.

use std::sync::atomic::{AtomicBool, Ordering};
use tracing_subscriber::EnvFilter;

static LOGGING_READY: AtomicBool = AtomicBool::new(false);

/// Install a stderr subscriber filtered by `RUST_LOG` (default `info`).
/// Only the first call does anything. If a subscriber is already set, as
/// when the module is linked statically into a host, that one is kept.
pub fn init_logging() {
    if LOGGING_READY.swap(true, Ordering::SeqCst) {
        return;
    }
    let result = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();
    if let Err(e) = result {
        tracing::debug!("Keeping the existing subscriber: {e}");
    }
}

/// Whether [`init_logging`] has run.
pub fn is_logging_ready() -> bool {
    LOGGING_READY.load(Ordering::SeqCst)
}
