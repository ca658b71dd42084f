//! Everything that can go wrong at the boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the native module or calling into it.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// No candidate file for the logical name could be opened.
    #[error("could not load native library `{name}` ({} location(s) tried)", .attempts.len())]
    Load {
        /// The logical name that was requested.
        name: String,
        /// Every path handed to the dynamic linker, in order.
        attempts: Vec<PathBuf>,
        /// The error from the last attempt.
        #[source]
        source: Option<libloading::Error>,
    },

    /// The module doesn't export this call-out. Other call-outs may still work.
    #[error("native entry point `{symbol}` is not bound")]
    Binding {
        /// The unresolved symbol name.
        symbol: &'static str,
    },

    /// The module was built against another version of the entry-point table.
    #[error("native library has ABI version {found}, expected {expected}")]
    AbiMismatch {
        /// Version this host was built for.
        expected: u32,
        /// Version the module reported.
        found: u32,
    },

    /// A call-out returned a failure status.
    #[error("native call `{symbol}` failed with status {status}")]
    CallFailed {
        /// The call-out that failed.
        symbol: &'static str,
        /// The raw status code it returned.
        status: i32,
    },
}
