//! Types shared by the toolkit and glue bindings.

use std::os::raw::c_int;

pub type gboolean = c_int;

/// Numeric id of a registered GObject type.
pub type GType = usize;

pub enum GTypeInstance {}
pub enum GdkWindow {}
pub enum GdkDisplay {}

impl GdkWindow {
    /// View a window as the type instance it is at the GObject level.
    pub fn as_instance(window: *mut GdkWindow) -> *mut GTypeInstance {
        window.cast()
    }
}
