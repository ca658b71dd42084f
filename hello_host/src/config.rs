//! Where to find the native module. The only input is a logical name
//! ("hello"); the platform decides the file name, and an optional list of
//! directories plays the part of `java.library.path`.

use std::ffi::OsString;
use std::path::PathBuf;

/// Logical name of the native module.
pub const DEFAULT_LIBRARY_NAME: &str = "hello";

/// Overrides the logical name.
pub const LIBRARY_NAME_ENV: &str = "HELLO_LIBRARY";

/// Extra directories to search, in the platform's path-list syntax.
pub const LIBRARY_PATH_ENV: &str = "HELLO_LIBRARY_PATH";

/// How to locate the native module.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Platform-independent library name, e.g. `hello`.
    pub library_name: String,
    /// Directories tried, in order, before the dynamic linker's own search.
    pub search_paths: Vec<PathBuf>,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LIBRARY_NAME)
    }
}

impl BridgeConfig {
    /// Config for `library_name`, searched only on the linker's path.
    pub fn new(library_name: impl Into<String>) -> Self {
        Self {
            library_name: library_name.into(),
            search_paths: Vec::new(),
        }
    }

    /// Add a directory to search ahead of the linker's path.
    pub fn with_search_path(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_paths.push(dir.into());
        self
    }

    /// Read [`LIBRARY_NAME_ENV`] and [`LIBRARY_PATH_ENV`]. Unset or empty
    /// variables leave the defaults alone.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var_os(LIBRARY_NAME_ENV),
            std::env::var_os(LIBRARY_PATH_ENV),
        )
    }

    fn from_vars(name: Option<OsString>, paths: Option<OsString>) -> Self {
        let mut config = match name.and_then(|n| n.into_string().ok()) {
            Some(name) if !name.is_empty() => Self::new(name),
            _ => Self::default(),
        };
        if let Some(paths) = paths {
            config.search_paths.extend(
                std::env::split_paths(&paths).filter(|p| !p.as_os_str().is_empty()),
            );
        }
        config
    }

    /// The platform file name for the logical name
    /// (`libhello.so`, `libhello.dylib`, `hello.dll`).
    pub fn file_name(&self) -> OsString {
        libloading::library_filename(&self.library_name)
    }

    /// Every path to hand the dynamic linker, in order. The last one is the
    /// bare file name, which defers to the platform's own search rules.
    pub fn candidates(&self) -> Vec<PathBuf> {
        let file_name = self.file_name();
        self.search_paths
            .iter()
            .map(|dir| dir.join(&file_name))
            .chain(std::iter::once(PathBuf::from(&file_name)))
            .collect()
    }
}
