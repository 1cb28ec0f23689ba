//! Setting the transient-for hint
//!
//! The hint is a nicety for the window manager's stacking, so every failure
//! just means it is not set: nothing here returns an error.

use std::ffi::CString;

use gdk_transient_sys::xlib::Window;

use crate::symbols::GdkSymbols;
use crate::window::{ToolkitWindow, WindowKind};

/// The application-owned window a toolkit window should be transient for
pub trait ParentWindow {
    /// Native X11 id of the window
    fn native_id(&self) -> Window;

    /// Handle exported for this window through the compositor's foreign
    /// toplevel export protocol, if there is one
    fn export_handle(&self) -> Option<String> {
        None
    }
}

/// A parent window described by plain values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NativeParent {
    /// Native X11 id of the window
    pub id: Window,
    /// Exported Wayland handle of the window
    pub export_handle: Option<String>,
}

impl ParentWindow for NativeParent {
    fn native_id(&self) -> Window {
        self.id
    }

    fn export_handle(&self) -> Option<String> {
        self.export_handle.clone()
    }
}

/// How the hint was set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HintBackend {
    /// `gdk_wayland_window_set_transient_for_exported`
    Wayland,
    /// `XSetTransientForHint` through the GDK 3 accessors
    X11,
    /// `XSetTransientForHint` through the GDK 2 drawable accessors
    LegacyX11,
}

/// Mark `window` as transient for `parent`
///
/// The first usable backend wins, in this order: Wayland, X11 through the
/// GDK 3 accessors, X11 through the GDK 2 accessors. At most one native call
/// is made. Returns which backend set the hint, or `None` if none could.
pub fn set_transient_for<P>(
    symbols: &GdkSymbols<'_>,
    window: &ToolkitWindow,
    parent: &P,
) -> Option<HintBackend>
where
    P: ParentWindow + ?Sized,
{
    if window.as_ptr().is_null() {
        return None;
    }
    set_wayland(symbols, window, parent)
        .or_else(|| set_x11(symbols, window, parent))
        .or_else(|| set_legacy_x11(symbols, window, parent))
}

fn set_wayland<P>(
    symbols: &GdkSymbols<'_>,
    window: &ToolkitWindow,
    parent: &P,
) -> Option<HintBackend>
where
    P: ParentWindow + ?Sized,
{
    let wayland = symbols.wayland?;
    if window.kind() != WindowKind::Wayland {
        return None;
    }
    let handle = parent.export_handle().filter(|handle| !handle.is_empty())?;
    // gdk wants a mutable string but does not keep it
    let mut handle = CString::new(handle).ok()?.into_bytes_with_nul();
    // SAFETY: the window is a live GdkWaylandWindow as checked on construction
    // of `window`, and the handle is nul-terminated.
    unsafe {
        (wayland.set_transient_for_exported)(window.as_ptr(), handle.as_mut_ptr().cast());
    }
    Some(HintBackend::Wayland)
}

fn set_x11<P>(symbols: &GdkSymbols<'_>, window: &ToolkitWindow, parent: &P) -> Option<HintBackend>
where
    P: ParentWindow + ?Sized,
{
    let x11 = symbols.x11?;
    let set_hint = symbols.set_transient_for_hint?;
    if window.kind() != WindowKind::X11 {
        return None;
    }
    // SAFETY: the window is a live GdkX11Window as checked on construction of
    // `window`, so its display is an X11 one.
    unsafe {
        let display = (x11.display_get_xdisplay)((x11.window_get_display)(window.as_ptr()));
        let xid = (x11.window_get_xid)(window.as_ptr());
        set_hint(display, xid, parent.native_id());
    }
    Some(HintBackend::X11)
}

fn set_legacy_x11<P>(
    symbols: &GdkSymbols<'_>,
    window: &ToolkitWindow,
    parent: &P,
) -> Option<HintBackend>
where
    P: ParentWindow + ?Sized,
{
    let legacy = symbols.legacy_x11?;
    let set_hint = symbols.set_transient_for_hint?;
    // SAFETY: GDK 2 only has the X11 backend, so any live window is an X11
    // drawable.
    unsafe {
        let display = (legacy.drawable_get_xdisplay)(window.as_ptr());
        let xid = (legacy.drawable_get_xid)(window.as_ptr());
        set_hint(display, xid, parent.native_id());
    }
    Some(HintBackend::LegacyX11)
}
