//! Turning a `&mut dyn ShowFromHost` into the thin context pointer the C
//! ABI carries, and back again inside the call-back.

use crate::api::ShowFromHost;
use std::ffi::c_void;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Run `f` with a context token for `target`. The token is only valid for
/// the duration of `f`.
pub(crate) fn with_context<R>(target: &mut dyn ShowFromHost, f: impl FnOnce(*mut c_void) -> R) -> R {
    // `&mut dyn` is a fat pointer. Hand out a pointer to it instead.
    let mut target = target;
    let context = &mut target as *mut &mut dyn ShowFromHost as *mut c_void;
    f(context)
}

/// The call-back handed to the native module alongside the token. A panic
/// in the host's handler is caught and logged here; it can't unwind
/// through the native frames.
pub(crate) extern "C" fn show_from_host_trampoline(context: *mut c_void) {
    if context.is_null() {
        tracing::warn!("Native call-back arrived without a context");
        return;
    }
    // The token was produced by `with_context` and is still borrowed there.
    let target = unsafe { &mut *(context as *mut &mut dyn ShowFromHost) };
    if let Err(panic) = catch_unwind(AssertUnwindSafe(|| target.show_from_host())) {
        let message = panic
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| panic.downcast_ref::<String>().map(String::as_str))
            .unwrap_or("non-string panic payload");
        tracing::error!("Host call-back panicked: {message}");
    }
}
