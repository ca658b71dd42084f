use crate::errors::BridgeError;

/// Printed by [`ConsoleHost`] whenever the native side calls back.
pub const HOST_MESSAGE: &str = "This method is in the host";

/// The call-outs a native module provides. Implemented by both the
/// dynamically loaded and the statically linked bridge.
pub trait HelloApi {
    /// Ask the module to print its greeting.
    fn say_hello(&self) -> Result<(), BridgeError>;

    /// Mean of `a` and `b`, computed natively.
    fn average(&self, a: i32, b: i32) -> Result<f64, BridgeError>;

    /// Ask the module to call back into `target`. Returns once the module
    /// (and the call-back it made) has returned.
    fn call_from_rust(&self, target: &mut dyn ShowFromHost) -> Result<(), BridgeError>;
}

/// The host-side call-back. Only reachable through the object handed to
/// [`HelloApi::call_from_rust`].
///
/// Runs underneath native frames. A panic here is caught at the boundary
/// and logged, and the call-out still returns normally.
pub trait ShowFromHost {
    /// Invoked by the native module while a `call_from_rust` is in flight.
    fn show_from_host(&mut self);
}

/// Call-back target that writes [`HOST_MESSAGE`] to stdout and counts
/// how many times it was reached.
#[derive(Debug, Default)]
pub struct ConsoleHost {
    shown: usize,
}

impl ConsoleHost {
    /// A host that hasn't been called back yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times the native side has called back.
    pub fn shown(&self) -> usize {
        self.shown
    }
}

impl ShowFromHost for ConsoleHost {
    fn show_from_host(&mut self) {
        self.shown += 1;
        println!("{HOST_MESSAGE}");
    }
}
