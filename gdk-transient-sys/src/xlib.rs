//! Bindings to the client library `libX11.so`
//!
//! The types are always available since the GDK X11 accessors return them.
//! The library itself is only bound with the cargo feature `x11`.

#![allow(non_snake_case)]

#[cfg(all(feature = "x11", feature = "dlopen"))]
use once_cell::sync::Lazy;
use std::os::raw::{c_int, c_ulong};

pub enum Display {}

pub type XID = c_ulong;
pub type Window = XID;

pub type XSetTransientForHint_t = unsafe extern "C" fn(*mut Display, Window, Window) -> c_int;

#[cfg(feature = "x11")]
external_library!(Xlib, "X11",
    functions:
        fn XSetTransientForHint(*mut Display, Window, Window) -> c_int,
);

#[cfg(all(feature = "x11", feature = "dlopen"))]
pub fn xlib_option() -> Option<&'static Xlib> {
    static XLIB_OPTION: Lazy<Option<Xlib>> = Lazy::new(|| {
        let versions = ["libX11.so.6", "libX11.so"];

        for ver in &versions {
            match unsafe { Xlib::open(ver) } {
                Ok(h) => return Some(h),
                Err(::dlib::DlError::CantOpen(_)) => continue,
                Err(::dlib::DlError::MissingSymbol(s)) => {
                    log::error!("Found library {ver} cannot be used: symbol {s} is missing.");
                    return None;
                }
            }
        }
        None
    });

    XLIB_OPTION.as_ref()
}

/// The hint setter, if the library is available.
#[cfg(all(feature = "x11", feature = "dlopen"))]
pub fn set_transient_for_hint() -> Option<XSetTransientForHint_t> {
    xlib_option().map(|h| *h.XSetTransientForHint)
}
/// The hint setter, if the library is available.
#[cfg(all(feature = "x11", not(feature = "dlopen")))]
pub fn set_transient_for_hint() -> Option<XSetTransientForHint_t> {
    Some(XSetTransientForHint as XSetTransientForHint_t)
}

#[cfg(all(feature = "x11", not(feature = "dlopen")))]
pub fn is_lib_available() -> bool {
    true
}
#[cfg(all(feature = "x11", feature = "dlopen"))]
pub fn is_lib_available() -> bool {
    xlib_option().is_some()
}
#[cfg(not(feature = "x11"))]
pub fn is_lib_available() -> bool {
    false
}
