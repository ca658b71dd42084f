#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]

//! Host side of the `hello` bridge. Loads the native module by its
//! logical name, binds the entry points into a table and drives them.
//!
//! Nothing here is global: [`NativeBridge::load`] returns a handle, and
//! every call-out goes through that handle. A handle is proof that the
//! library is loaded, so a call-out can't race the load.
//!
//! Call-backs are routed through a context token. The host passes a
//! pointer to its own [`ShowFromHost`] object with each call-out, and the
//! native side hands the same pointer back when it re-enters.

mod api;
mod bridge;
mod config;
mod context;
mod display;
mod entrypoints;
mod errors;
mod session;

pub use api::{ConsoleHost, HelloApi, ShowFromHost, HOST_MESSAGE};
pub use bridge::{LinkedBridge, NativeBridge};
pub use config::{BridgeConfig, DEFAULT_LIBRARY_NAME, LIBRARY_NAME_ENV, LIBRARY_PATH_ENV};
pub use display::{average_line, format_double};
pub use errors::BridgeError;
pub use session::{open_bridge, run_session};
