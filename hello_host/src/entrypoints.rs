//! The table of native entry points. Resolved once, right after the
//! library is opened; a missing symbol leaves its slot empty and only
//! fails when that call-out is used.

use crate::api::ShowFromHost;
use crate::context::{show_from_host_trampoline, with_context};
use crate::errors::BridgeError;
use hello::{symbols, CallStatus, HostCallbackFn};
use libloading::Library;
use std::ffi::c_void;

pub(crate) type AbiVersionFn = extern "C" fn() -> u32;
pub(crate) type InitLoggingFn = extern "C" fn() -> i32;
pub(crate) type SayHelloFn = extern "C" fn();
pub(crate) type AverageFn = extern "C" fn(i32, i32) -> f64;
pub(crate) type CallFromRustFn = extern "C" fn(*mut c_void, Option<HostCallbackFn>) -> i32;

#[derive(Clone, Copy, Default)]
pub(crate) struct Entrypoints {
    pub(crate) abi_version: Option<AbiVersionFn>,
    pub(crate) init_logging: Option<InitLoggingFn>,
    pub(crate) say_hello: Option<SayHelloFn>,
    pub(crate) average: Option<AverageFn>,
    pub(crate) call_from_rust: Option<CallFromRustFn>,
}

impl Entrypoints {
    /// Look up every entry point in `library`.
    ///
    /// # Safety
    ///
    /// The exported symbols must have the signatures listed in
    /// [`hello::symbols`]. The returned pointers are only valid while
    /// `library` stays loaded.
    pub(crate) unsafe fn resolve(library: &Library) -> Self {
        Self {
            abi_version: lookup(library, symbols::ABI_VERSION),
            init_logging: lookup(library, symbols::INIT_LOGGING),
            say_hello: lookup(library, symbols::SAY_HELLO),
            average: lookup(library, symbols::AVERAGE),
            call_from_rust: lookup(library, symbols::CALL_FROM_RUST),
        }
    }

    /// The entry points of the `hello` crate linked into this binary.
    pub(crate) fn linked() -> Self {
        Self {
            abi_version: Some(hello::hello_abi_version),
            // Linked in, the module already shares the host's subscriber.
            init_logging: None,
            say_hello: Some(hello::hello_say_hello),
            average: Some(hello::hello_average),
            call_from_rust: Some(hello::hello_call_from_rust),
        }
    }

    /// Names of the call-outs that didn't resolve. The ABI version export and
    /// the logging setup are optional and never listed.
    pub(crate) fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.say_hello.is_none() {
            missing.push(symbols::SAY_HELLO);
        }
        if self.average.is_none() {
            missing.push(symbols::AVERAGE);
        }
        if self.call_from_rust.is_none() {
            missing.push(symbols::CALL_FROM_RUST);
        }
        missing
    }

    /// Refuse a module that reports a different ABI version. Modules that
    /// don't export it are accepted.
    pub(crate) fn check_abi(&self) -> Result<(), BridgeError> {
        let Some(abi_version) = self.abi_version else {
            tracing::debug!("Native library does not export its ABI version");
            return Ok(());
        };
        let found = abi_version();
        if found != hello::ABI_VERSION {
            return Err(BridgeError::AbiMismatch {
                expected: hello::ABI_VERSION,
                found,
            });
        }
        Ok(())
    }

    /// Have a dynamically loaded module install its own log subscriber, so
    /// its diagnostics aren't dropped. Returns whether the module offered one.
    pub(crate) fn init_logging(&self) -> bool {
        let Some(init_logging) = self.init_logging else {
            return false;
        };
        let status = init_logging();
        if CallStatus::from_code(status) != Some(CallStatus::Ok) {
            tracing::warn!("Native logging setup returned status {status}");
        }
        true
    }

    pub(crate) fn say_hello(&self) -> Result<(), BridgeError> {
        let say_hello = bound(self.say_hello, symbols::SAY_HELLO)?;
        say_hello();
        Ok(())
    }

    pub(crate) fn average(&self, a: i32, b: i32) -> Result<f64, BridgeError> {
        let average = bound(self.average, symbols::AVERAGE)?;
        Ok(average(a, b))
    }

    pub(crate) fn call_from_rust(&self, target: &mut dyn ShowFromHost) -> Result<(), BridgeError> {
        let call_from_rust = bound(self.call_from_rust, symbols::CALL_FROM_RUST)?;
        let status = with_context(target, |context| {
            call_from_rust(context, Some(show_from_host_trampoline))
        });
        match CallStatus::from_code(status) {
            Some(CallStatus::Ok) => Ok(()),
            _ => Err(BridgeError::CallFailed {
                symbol: symbols::CALL_FROM_RUST,
                status,
            }),
        }
    }
}

fn bound<F>(slot: Option<F>, symbol: &'static str) -> Result<F, BridgeError> {
    slot.ok_or(BridgeError::Binding { symbol })
}

unsafe fn lookup<F: Copy>(library: &Library, symbol: &'static str) -> Option<F> {
    match library.get::<F>(symbol.as_bytes()) {
        Ok(f) => Some(*f),
        Err(e) => {
            tracing::debug!("Symbol {symbol} not found: {e}");
            None
        }
    }
}
