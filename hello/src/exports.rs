//! C ABI entry points. These are what a non-JVM host resolves by name
//! (see [`crate::symbols`]) after opening the library.

use crate::{CallStatus, ABI_VERSION, CALL_BANNER};
use std::ffi::c_void;

/// Type signature for the host call-back. The pointer is the context token
/// the host handed to [`hello_call_from_rust`], passed back untouched.
pub type HostCallbackFn = extern "C" fn(*mut c_void);

/// Report the version of this entry-point table.
#[no_mangle]
pub extern "C" fn hello_abi_version() -> u32 {
    ABI_VERSION
}

/// Install the module's log subscriber. Safe to call more than once.
///
/// Return values:
/// - 0, always.
#[no_mangle]
pub extern "C" fn hello_init_logging() -> i32 {
    crate::init_logging();
    CallStatus::Ok.code()
}

/// Print a greeting to stdout.
#[no_mangle]
pub extern "C" fn hello_say_hello() {
    tracing::debug!("hello_say_hello called");
    crate::say_hello();
}

/// Return the mean of two integers.
#[no_mangle]
pub extern "C" fn hello_average(a: i32, b: i32) -> f64 {
    crate::average(a, b)
}

/// Re-enter the host through `callback`, handing it back `context`.
///
/// Parameters:
/// - `context`: opaque token identifying the host object. Never dereferenced here.
/// - `callback`: the host function to invoke. May be null.
///
/// Return values:
/// - 0 once the call-back has returned, -1 if `callback` was null.
#[no_mangle]
pub extern "C" fn hello_call_from_rust(
    context: *mut c_void,
    callback: Option<HostCallbackFn>,
) -> i32 {
    println!("{CALL_BANNER}");
    println!("ABI Version: {ABI_VERSION}");

    let Some(callback) = callback else {
        tracing::warn!("hello_call_from_rust called without a call-back");
        return CallStatus::MissingCallback.code();
    };
    callback(context);
    CallStatus::Ok.code()
}
