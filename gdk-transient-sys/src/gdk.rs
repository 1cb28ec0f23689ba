//! Signatures of the optional GDK entry points.
//!
//! GDK 2 only exposes the drawable accessors, GDK 3 replaced them with the
//! window/display pair and added the Wayland backend. None of these is linked:
//! they are resolved one by one from a loaded toolkit library.

use std::os::raw::{c_char, c_ulong};

use crate::common::{gboolean, GType, GdkDisplay, GdkWindow};
use crate::xlib::Display;

// GDK 2, X11 backend
pub type gdk_x11_drawable_get_xdisplay_t = unsafe extern "C" fn(*mut GdkWindow) -> *mut Display;
pub type gdk_x11_drawable_get_xid_t = unsafe extern "C" fn(*mut GdkWindow) -> c_ulong;

// GDK 3, X11 backend
pub type gdk_x11_window_get_type_t = unsafe extern "C" fn() -> GType;
pub type gdk_window_get_display_t = unsafe extern "C" fn(*mut GdkWindow) -> *mut GdkDisplay;
pub type gdk_x11_display_get_xdisplay_t = unsafe extern "C" fn(*mut GdkDisplay) -> *mut Display;
pub type gdk_x11_window_get_xid_t = unsafe extern "C" fn(*mut GdkWindow) -> c_ulong;

// GDK 3, Wayland backend
pub type gdk_wayland_window_get_type_t = unsafe extern "C" fn() -> GType;
pub type gdk_wayland_window_set_transient_for_exported_t =
    unsafe extern "C" fn(*mut GdkWindow, *mut c_char) -> gboolean;
