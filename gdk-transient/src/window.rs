use gdk_transient_sys::common::{GType, GdkWindow};

use crate::symbols::GdkSymbols;

/// Windowing system a toolkit window belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowKind {
    /// The window is a `GdkWaylandWindow`
    Wayland,
    /// The window is a `GdkX11Window`
    X11,
    /// Neither could be confirmed
    ///
    /// This is always the case with GDK 2, which has no way to ask.
    Unknown,
}

/// A native toolkit window, tagged with its [`WindowKind`]
///
/// The kind is determined once, when the value is created.
#[derive(Debug, Clone, Copy)]
pub struct ToolkitWindow {
    ptr: *mut GdkWindow,
    kind: WindowKind,
}

impl ToolkitWindow {
    /// Wrap and classify a raw `GdkWindow`
    ///
    /// # Safety
    ///
    /// `ptr` must be either null or a valid `GdkWindow` from the toolkit library
    /// `symbols` were resolved from, and it must stay valid as long as the
    /// returned value is used.
    pub unsafe fn new(symbols: &GdkSymbols<'_>, ptr: *mut GdkWindow) -> Self {
        let kind = if ptr.is_null() {
            WindowKind::Unknown
        } else if symbols
            .wayland
            .is_some_and(|w| unsafe { is_a(symbols, ptr, w.window_get_type) })
        {
            WindowKind::Wayland
        } else if symbols.x11.is_some_and(|x| unsafe { is_a(symbols, ptr, x.window_get_type) }) {
            WindowKind::X11
        } else {
            WindowKind::Unknown
        };
        Self { ptr, kind }
    }

    /// Backend of this window
    pub fn kind(&self) -> WindowKind {
        self.kind
    }

    /// The raw `GdkWindow`
    pub fn as_ptr(&self) -> *mut GdkWindow {
        self.ptr
    }
}

unsafe fn is_a(
    symbols: &GdkSymbols<'_>,
    ptr: *mut GdkWindow,
    get_type: unsafe extern "C" fn() -> GType,
) -> bool {
    match symbols.type_check_instance_is_a {
        Some(check) => unsafe { check(GdkWindow::as_instance(ptr), get_type()) != 0 },
        None => false,
    }
}
