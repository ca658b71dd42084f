use crate::api::{HelloApi, ShowFromHost};
use crate::config::BridgeConfig;
use crate::entrypoints::Entrypoints;
use crate::errors::BridgeError;
use libloading::Library;
use std::path::Path;
use tracing::{debug, info, warn};

/// A loaded native module. Holding one of these means the library is
/// open and its entry points have been resolved; dropping it releases the
/// library.
pub struct NativeBridge {
    entrypoints: Entrypoints,
    // Must outlive every pointer in `entrypoints`.
    _library: Library,
}

impl NativeBridge {
    /// Resolve `config.library_name` to a file and load it. Configured
    /// search directories are tried first, then the platform's linker path.
    pub fn load(config: &BridgeConfig) -> Result<Self, BridgeError> {
        let mut attempts = Vec::new();
        let mut last_error = None;
        for candidate in config.candidates() {
            debug!("Trying {}", candidate.display());
            // Opening a library runs its initializers; the `hello` module has none.
            match unsafe { Library::new(&candidate) } {
                Ok(library) => {
                    info!("Loaded native library from {}", candidate.display());
                    return Self::from_library(library);
                }
                Err(e) => {
                    debug!("Could not open {}: {e}", candidate.display());
                    attempts.push(candidate);
                    last_error = Some(e);
                }
            }
        }
        Err(BridgeError::Load {
            name: config.library_name.clone(),
            attempts,
            source: last_error,
        })
    }

    /// Load the library at an exact path, skipping name resolution.
    pub fn load_path(path: impl AsRef<Path>) -> Result<Self, BridgeError> {
        let path = path.as_ref();
        match unsafe { Library::new(path) } {
            Ok(library) => Self::from_library(library),
            Err(e) => Err(BridgeError::Load {
                name: path.display().to_string(),
                attempts: vec![path.to_path_buf()],
                source: Some(e),
            }),
        }
    }

    fn from_library(library: Library) -> Result<Self, BridgeError> {
        // Pointers are stored next to the library that owns them.
        let entrypoints = unsafe { Entrypoints::resolve(&library) };
        entrypoints.check_abi()?;
        if !entrypoints.init_logging() {
            debug!("Native library has no logging setup; its diagnostics are not shown");
        }
        for symbol in entrypoints.missing() {
            warn!("Native entry point {symbol} is not exported; calls to it will fail");
        }
        Ok(Self {
            entrypoints,
            _library: library,
        })
    }

    /// Call-outs the library doesn't export. Empty for a complete module.
    pub fn missing_symbols(&self) -> Vec<&'static str> {
        self.entrypoints.missing()
    }
}

impl HelloApi for NativeBridge {
    fn say_hello(&self) -> Result<(), BridgeError> {
        self.entrypoints.say_hello()
    }

    fn average(&self, a: i32, b: i32) -> Result<f64, BridgeError> {
        self.entrypoints.average(a, b)
    }

    fn call_from_rust(&self, target: &mut dyn ShowFromHost) -> Result<(), BridgeError> {
        self.entrypoints.call_from_rust(target)
    }
}

/// The `hello` module linked straight into the host. Same entry points,
/// same ABI, no dynamic loading.
pub struct LinkedBridge {
    entrypoints: Entrypoints,
}

impl Default for LinkedBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkedBridge {
    /// Bind the statically linked entry points.
    pub fn new() -> Self {
        Self {
            entrypoints: Entrypoints::linked(),
        }
    }
}

impl HelloApi for LinkedBridge {
    fn say_hello(&self) -> Result<(), BridgeError> {
        self.entrypoints.say_hello()
    }

    fn average(&self, a: i32, b: i32) -> Result<f64, BridgeError> {
        self.entrypoints.average(a, b)
    }

    fn call_from_rust(&self, target: &mut dyn ShowFromHost) -> Result<(), BridgeError> {
        self.entrypoints.call_from_rust(target)
    }
}
