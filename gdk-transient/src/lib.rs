#![warn(missing_docs, missing_debug_implementations)]
#![forbid(improper_ctypes, unsafe_op_in_unsafe_fn)]

//! Transient-for hints for GDK windows
//!
//! This crate marks a window created by the GTK toolkit (typically a native
//! file chooser or a portal dialog) as transient for a window owned by the
//! application, so that the window manager keeps it stacked above its parent.
//!
//! The toolkit is usually loaded at runtime, and which of its entry points
//! exist depends on its major version and on the backends it was built with.
//! All of them are thus optional:
//!
//! 1. open the toolkit with [`ToolkitLibrary::open()`] (or use
//!    [`ToolkitLibrary::this()`] if it is linked into the program),
//! 2. resolve what is available once with [`GdkSymbols::load()`],
//! 3. wrap each native window with [`ToolkitWindow::new()`] and call
//!    [`set_transient_for()`].
//!
//! If nothing usable was found, setting the hint silently does nothing.
//!
//! ## Cargo features
//!
//! - `x11` (default): set the hint through Xlib.
//! - `wayland` (default): set the hint through an exported Wayland handle.
//! - `dlopen` (default): load the toolkit and system libraries at runtime.
//!   Without it, they are linked at build time through `pkg-config`, and only
//!   GDK 3 is supported.

mod library;
mod symbols;
mod transient;
mod version;
mod window;

pub use library::{LoadError, SymbolSource, ToolkitLibrary};
pub use symbols::{Backends, GdkSymbols};
pub use transient::{set_transient_for, HintBackend, NativeParent, ParentWindow};
pub use version::{ParseVersionError, ToolkitVersion};
pub use window::{ToolkitWindow, WindowKind};

/// Raw bindings
pub use gdk_transient_sys as sys;
