// This module contains helpers functions and types that
// are not test in themselves, but are used by several tests.
//
// It provides a fake toolkit: a symbol table pointing to `extern "C"` stubs
// that record every call they receive in a thread-local log.

#![allow(dead_code)]

pub extern crate gdk_transient as gdkt;

use std::cell::RefCell;
use std::collections::HashMap;
use std::ffi::{CStr, c_char, c_int, c_ulong, c_void};
use std::ptr::NonNull;

use gdkt::sys::common::{GType, GTypeInstance, GdkDisplay, GdkWindow, gboolean};
use gdkt::sys::xlib::{Display, Window};
use gdkt::{GdkSymbols, SymbolSource, ToolkitWindow};

pub const WAYLAND_WINDOW_TYPE: GType = 0x5741_0001;
pub const X11_WINDOW_TYPE: GType = 0x5811_0001;

pub const GDK_DISPLAY: usize = 0xd150_0001;
pub const X_DISPLAY: usize = 0xd150_0002;
pub const LEGACY_X_DISPLAY: usize = 0xd150_0003;
pub const XID: c_ulong = 0x0400_0001;
pub const LEGACY_XID: c_ulong = 0x0200_0001;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Accessor(&'static str),
    SetTransientForExported { window: usize, handle: String },
    XSetTransientForHint { display: usize, window: Window, parent: Window },
}

impl Call {
    pub fn is_hint(&self) -> bool {
        !matches!(self, Call::Accessor(_))
    }
}

thread_local! {
    static CALLS: RefCell<Vec<Call>> = const { RefCell::new(Vec::new()) };
}

fn record(call: Call) {
    CALLS.with(|calls| calls.borrow_mut().push(call));
}

/// Every call recorded on this thread since the last time
pub fn take_calls() -> Vec<Call> {
    CALLS.with(|calls| std::mem::take(&mut *calls.borrow_mut()))
}

/// Only the calls that set a hint
pub fn take_hint_calls() -> Vec<Call> {
    take_calls().into_iter().filter(Call::is_hint).collect()
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Instance layout the fake type check understands
#[repr(C)]
pub struct FakeWindow {
    pub gtype: GType,
}

impl FakeWindow {
    pub fn wayland() -> Box<FakeWindow> {
        Box::new(FakeWindow { gtype: WAYLAND_WINDOW_TYPE })
    }

    pub fn x11() -> Box<FakeWindow> {
        Box::new(FakeWindow { gtype: X11_WINDOW_TYPE })
    }

    /// A window GDK 2 would create: no type to tell its backend from
    pub fn untyped() -> Box<FakeWindow> {
        Box::new(FakeWindow { gtype: 0 })
    }

    pub fn as_ptr(&mut self) -> *mut GdkWindow {
        (self as *mut FakeWindow).cast()
    }

    pub fn classify(&mut self, symbols: &GdkSymbols<'_>) -> ToolkitWindow {
        // SAFETY: the fake type check only reads the `gtype` field, and the
        // accessors never dereference the window.
        unsafe { ToolkitWindow::new(symbols, self.as_ptr()) }
    }
}

extern "C" fn wayland_window_get_type() -> GType {
    WAYLAND_WINDOW_TYPE
}

extern "C" fn x11_window_get_type() -> GType {
    X11_WINDOW_TYPE
}

unsafe extern "C" fn type_check_instance_is_a(
    instance: *mut GTypeInstance,
    gtype: GType,
) -> gboolean {
    if instance.is_null() {
        return 0;
    }
    let window = unsafe { &*instance.cast::<FakeWindow>() };
    (window.gtype == gtype) as gboolean
}

extern "C" fn window_get_display(_: *mut GdkWindow) -> *mut GdkDisplay {
    record(Call::Accessor("gdk_window_get_display"));
    GDK_DISPLAY as *mut GdkDisplay
}

extern "C" fn x11_display_get_xdisplay(display: *mut GdkDisplay) -> *mut Display {
    record(Call::Accessor("gdk_x11_display_get_xdisplay"));
    if display as usize == GDK_DISPLAY {
        X_DISPLAY as *mut Display
    } else {
        std::ptr::null_mut()
    }
}

extern "C" fn x11_window_get_xid(_: *mut GdkWindow) -> c_ulong {
    record(Call::Accessor("gdk_x11_window_get_xid"));
    XID
}

extern "C" fn x11_drawable_get_xdisplay(_: *mut GdkWindow) -> *mut Display {
    record(Call::Accessor("gdk_x11_drawable_get_xdisplay"));
    LEGACY_X_DISPLAY as *mut Display
}

extern "C" fn x11_drawable_get_xid(_: *mut GdkWindow) -> c_ulong {
    record(Call::Accessor("gdk_x11_drawable_get_xid"));
    LEGACY_XID
}

unsafe extern "C" fn wayland_window_set_transient_for_exported(
    window: *mut GdkWindow,
    handle: *mut c_char,
) -> gboolean {
    let handle = unsafe { CStr::from_ptr(handle) }.to_string_lossy().into_owned();
    record(Call::SetTransientForExported { window: window as usize, handle });
    1
}

extern "C" fn set_transient_for_hint(
    display: *mut Display,
    window: Window,
    parent: Window,
) -> c_int {
    record(Call::XSetTransientForHint { display: display as usize, window, parent });
    1
}

pub const GTK2_SYMBOLS: &[&str] = &["gdk_x11_drawable_get_xdisplay", "gdk_x11_drawable_get_xid"];

pub const GTK3_X11_SYMBOLS: &[&str] = &[
    "gdk_x11_window_get_type",
    "gdk_window_get_display",
    "gdk_x11_display_get_xdisplay",
    "gdk_x11_window_get_xid",
];

pub const GTK3_WAYLAND_SYMBOLS: &[&str] =
    &["gdk_wayland_window_get_type", "gdk_wayland_window_set_transient_for_exported"];

pub const GLUE_SYMBOLS: &[&str] = &["g_type_check_instance_is_a", "XSetTransientForHint"];

/// A symbol table standing in for a loaded toolkit library
pub struct FakeToolkit {
    symbols: HashMap<&'static str, *mut c_void>,
}

impl FakeToolkit {
    /// No symbol at all
    pub fn empty() -> FakeToolkit {
        FakeToolkit { symbols: HashMap::new() }
    }

    /// Every symbol any toolkit version could provide
    pub fn everything() -> FakeToolkit {
        let all: [(&'static str, *mut c_void); 10] = [
            ("gdk_x11_drawable_get_xdisplay", x11_drawable_get_xdisplay as *mut c_void),
            ("gdk_x11_drawable_get_xid", x11_drawable_get_xid as *mut c_void),
            ("gdk_x11_window_get_type", x11_window_get_type as *mut c_void),
            ("gdk_window_get_display", window_get_display as *mut c_void),
            ("gdk_x11_display_get_xdisplay", x11_display_get_xdisplay as *mut c_void),
            ("gdk_x11_window_get_xid", x11_window_get_xid as *mut c_void),
            ("gdk_wayland_window_get_type", wayland_window_get_type as *mut c_void),
            (
                "gdk_wayland_window_set_transient_for_exported",
                wayland_window_set_transient_for_exported as *mut c_void,
            ),
            ("g_type_check_instance_is_a", type_check_instance_is_a as *mut c_void),
            ("XSetTransientForHint", set_transient_for_hint as *mut c_void),
        ];
        FakeToolkit { symbols: all.into_iter().collect() }
    }

    /// What GTK 3 with both backends provides
    pub fn gtk3() -> FakeToolkit {
        FakeToolkit::everything().without(GTK2_SYMBOLS)
    }

    /// What GTK 2 provides
    pub fn gtk2() -> FakeToolkit {
        FakeToolkit::everything().without(GTK3_X11_SYMBOLS).without(GTK3_WAYLAND_SYMBOLS)
    }

    pub fn without(mut self, names: &[&str]) -> FakeToolkit {
        self.symbols.retain(|name, _| !names.contains(name));
        self
    }
}

impl SymbolSource for FakeToolkit {
    fn raw_symbol(&self, name: &CStr) -> Option<NonNull<c_void>> {
        self.symbols.get(name.to_str().ok()?).copied().and_then(NonNull::new)
    }
}
