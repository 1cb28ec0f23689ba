//! Bindings to the type system of `libgobject-2.0.so`
//!
//! Only the instance type check is needed, to tell apart the X11 and Wayland
//! implementations of `GdkWindow`.

#[cfg(feature = "dlopen")]
use once_cell::sync::Lazy;

use crate::common::{gboolean, GType, GTypeInstance};

pub type g_type_check_instance_is_a_t =
    unsafe extern "C" fn(*mut GTypeInstance, GType) -> gboolean;

external_library!(GObject, "gobject-2.0",
    functions:
        fn g_type_check_instance_is_a(*mut GTypeInstance, GType) -> gboolean,
);

#[cfg(feature = "dlopen")]
pub fn gobject_option() -> Option<&'static GObject> {
    static GOBJECT_OPTION: Lazy<Option<GObject>> = Lazy::new(|| {
        let versions = ["libgobject-2.0.so.0", "libgobject-2.0.so"];

        for ver in &versions {
            match unsafe { GObject::open(ver) } {
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

    GOBJECT_OPTION.as_ref()
}

/// The type check entry point, if the library is available.
#[cfg(feature = "dlopen")]
pub fn type_check_instance_is_a() -> Option<g_type_check_instance_is_a_t> {
    gobject_option().map(|h| *h.g_type_check_instance_is_a)
}
/// The type check entry point, if the library is available.
#[cfg(not(feature = "dlopen"))]
pub fn type_check_instance_is_a() -> Option<g_type_check_instance_is_a_t> {
    Some(g_type_check_instance_is_a as g_type_check_instance_is_a_t)
}

#[cfg(not(feature = "dlopen"))]
pub fn is_lib_available() -> bool {
    true
}
#[cfg(feature = "dlopen")]
pub fn is_lib_available() -> bool {
    gobject_option().is_some()
}
