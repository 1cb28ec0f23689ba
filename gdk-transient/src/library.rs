//! Access to the toolkit shared library

use std::{ffi::CStr, os::raw::c_void, ptr::NonNull};

use libloading::Library;

/// Something symbols can be looked up in
///
/// Implemented for [`libloading::Library`] and [`ToolkitLibrary`]. Any address
/// returned must stay valid for as long as the source itself is alive.
pub trait SymbolSource {
    /// Address of the symbol `name`, or `None` if it does not exist
    fn raw_symbol(&self, name: &CStr) -> Option<NonNull<c_void>>;
}

impl SymbolSource for Library {
    fn raw_symbol(&self, name: &CStr) -> Option<NonNull<c_void>> {
        // SAFETY: the symbol is read as an untyped address, nothing is called
        // or dereferenced here.
        let symbol = unsafe { self.get::<*mut c_void>(name.to_bytes_with_nul()) }.ok()?;
        NonNull::new(*symbol)
    }
}

/// Look up `name` and reinterpret its address as the function pointer type `F`.
///
/// # Safety
///
/// `F` must be an `extern "C"` function pointer type matching the actual
/// signature of the symbol.
pub(crate) unsafe fn function<F: Copy>(
    source: &(impl SymbolSource + ?Sized),
    name: &CStr,
) -> Option<F> {
    assert_eq!(std::mem::size_of::<F>(), std::mem::size_of::<*mut c_void>());
    let address = source.raw_symbol(name)?;
    Some(unsafe { std::mem::transmute_copy::<*mut c_void, F>(&address.as_ptr()) })
}

const GTK3_SONAMES: &[&str] = &["libgtk-3.so.0", "libgtk-3.so"];
const GTK2_SONAMES: &[&str] = &["libgtk-x11-2.0.so.0", "libgtk-x11-2.0.so"];

/// Errors that can occur when opening the toolkit library
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// No library is known for this toolkit major version
    #[error("no toolkit library is known for major version {0}")]
    UnsupportedVersion(u32),
    /// None of the candidate libraries could be opened
    #[error("could not open any of {tried:?}")]
    NotFound {
        /// The names that were tried, in order
        tried: Vec<String>,
    },
}

/// The loaded toolkit library
///
/// Symbols resolved from it borrow it, so it has to outlive them.
#[derive(Debug)]
pub struct ToolkitLibrary {
    lib: Library,
    name: Option<String>,
}

impl ToolkitLibrary {
    /// Open the library of the given toolkit major version
    pub fn open(major: u32) -> Result<Self, LoadError> {
        match major {
            3 => Self::open_candidates(GTK3_SONAMES),
            2 => Self::open_candidates(GTK2_SONAMES),
            other => Err(LoadError::UnsupportedVersion(other)),
        }
    }

    /// Open the first library of `candidates` that can be loaded
    pub fn open_candidates(candidates: &[&str]) -> Result<Self, LoadError> {
        for name in candidates {
            // SAFETY: the toolkit libraries have no initialisation routines
            // with preconditions of their own.
            match unsafe { Library::new(name) } {
                Ok(lib) => {
                    log::debug!("Loaded toolkit library {name}.");
                    return Ok(Self { lib, name: Some((*name).into()) });
                }
                Err(err) => log::debug!("Could not load {name}: {err}"),
            }
        }
        Err(LoadError::NotFound { tried: candidates.iter().map(|s| (*s).into()).collect() })
    }

    /// The running process image
    ///
    /// Use this when the toolkit is linked at build time.
    pub fn this() -> Self {
        Self { lib: libloading::os::unix::Library::this().into(), name: None }
    }

    /// Name the library was opened with, `None` for the process image
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl SymbolSource for ToolkitLibrary {
    fn raw_symbol(&self, name: &CStr) -> Option<NonNull<c_void>> {
        self.lib.raw_symbol(name)
    }
}
