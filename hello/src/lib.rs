#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]

//! The `hello` native module. Built as `libhello.so` (or the platform
//! equivalent), it can be opened two ways:
//!
//! * By a JVM, through `System.loadLibrary("hello")`. The JNI entry points
//!   live in [`jni_exports`] and bind to the `HelloJNI` class.
//! * By any host that speaks the C ABI, such as `hello_host`. Those entry
//!   points live in [`exports`] and are listed in [`symbols`].
//!
//! The module logs through its own `tracing` subscriber. A JVM gets one
//! from `JNI_OnLoad`; a C host calls `hello_init_logging` once after
//! opening the library.
//!
//! Both surfaces share the same behavior: a greeting, a mean of two
//! integers, and a call-back into whoever made the call.

/// Version of the C entry-point table. Bump this whenever a signature in
/// [`exports`] changes, so hosts can refuse a stale library.
pub const ABI_VERSION: u32 = 1;

/// Printed by every `say_hello` call-out.
pub const GREETING: &str = "Hello from Rust!";

/// Printed before the module re-enters its caller.
pub const CALL_BANNER: &str = "We will call a host method from within Rust...";

pub mod exports;
pub mod jni_exports;
mod logging;
mod status;

pub use exports::{
    hello_abi_version, hello_average, hello_call_from_rust, hello_init_logging, hello_say_hello,
    HostCallbackFn,
};
pub use logging::{init_logging, is_logging_ready};
pub use status::CallStatus;

/// Names of the C ABI entry points, as a host would look them up.
pub mod symbols {
    /// `extern "C" fn() -> u32`
    pub const ABI_VERSION: &str = "hello_abi_version";
    /// `extern "C" fn() -> i32`
    pub const INIT_LOGGING: &str = "hello_init_logging";
    /// `extern "C" fn()`
    pub const SAY_HELLO: &str = "hello_say_hello";
    /// `extern "C" fn(i32, i32) -> f64`
    pub const AVERAGE: &str = "hello_average";
    /// `extern "C" fn(*mut c_void, Option<extern "C" fn(*mut c_void)>) -> i32`
    pub const CALL_FROM_RUST: &str = "hello_call_from_rust";
}

/// Writes the greeting to stdout.
pub fn say_hello() {
    println!("{GREETING}");
}

/// The arithmetic mean of `a` and `b`. Both are widened to `f64` before
/// adding, so the sum can't overflow.
pub fn average(a: i32, b: i32) -> f64 {
    (f64::from(a) + f64::from(b)) / 2.0
}
