//! Resolution of the optional toolkit entry points
//!
//! Which entry points exist depends on the toolkit major version, on whether
//! the toolkit was built with its X11 and Wayland backends, and on which
//! backends this crate is allowed to use. Every group of entry points that a
//! code path needs is resolved as a whole: if any of its symbols is missing,
//! the group is absent and the code path is skipped.

use std::marker::PhantomData;

use gdk_transient_sys::{
    gdk::*, gobject::g_type_check_instance_is_a_t, xlib::XSetTransientForHint_t,
};

use crate::library::{function, SymbolSource, ToolkitLibrary};
use crate::version::ToolkitVersion;

/// The set of backends that may be used
///
/// [`Backends::compiled()`] reflects the cargo features of this crate, and can
/// be narrowed further at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Backends {
    /// X11 through the GDK 3 accessors
    pub x11: bool,
    /// Wayland through an exported parent handle
    pub wayland: bool,
    /// X11 through the GDK 2 drawable accessors
    ///
    /// Only used when `x11` is set as well.
    pub legacy: bool,
}

impl Backends {
    /// The backends enabled at build time
    ///
    /// The GDK 2 accessors are only looked up when the toolkit is loaded at
    /// runtime: a build linked against the toolkit is always linked against
    /// GDK 3.
    pub const fn compiled() -> Self {
        Self {
            x11: cfg!(feature = "x11"),
            wayland: cfg!(feature = "wayland"),
            legacy: cfg!(all(feature = "x11", feature = "dlopen")),
        }
    }

    /// Every backend
    pub const fn all() -> Self {
        Self { x11: true, wayland: true, legacy: true }
    }

    /// No backend at all
    pub const fn none() -> Self {
        Self { x11: false, wayland: false, legacy: false }
    }

    /// This set, with X11 disabled (both the GDK 3 and GDK 2 variants)
    pub const fn without_x11(self) -> Self {
        Self { x11: false, legacy: false, ..self }
    }

    /// This set, with Wayland disabled
    pub const fn without_wayland(self) -> Self {
        Self { wayland: false, ..self }
    }

    /// This set, with the GDK 2 accessors disabled
    pub const fn without_legacy(self) -> Self {
        Self { legacy: false, ..self }
    }
}

impl Default for Backends {
    fn default() -> Self {
        Self::compiled()
    }
}

/// GDK 2 drawable accessors
#[derive(Debug, Clone, Copy)]
pub(crate) struct LegacyX11 {
    pub(crate) drawable_get_xdisplay: gdk_x11_drawable_get_xdisplay_t,
    pub(crate) drawable_get_xid: gdk_x11_drawable_get_xid_t,
}

/// GDK 3 X11 accessors
#[derive(Debug, Clone, Copy)]
pub(crate) struct X11 {
    pub(crate) window_get_type: gdk_x11_window_get_type_t,
    pub(crate) window_get_display: gdk_window_get_display_t,
    pub(crate) display_get_xdisplay: gdk_x11_display_get_xdisplay_t,
    pub(crate) window_get_xid: gdk_x11_window_get_xid_t,
}

/// GDK 3 Wayland entry points
#[derive(Debug, Clone, Copy)]
pub(crate) struct Wayland {
    pub(crate) window_get_type: gdk_wayland_window_get_type_t,
    pub(crate) set_transient_for_exported: gdk_wayland_window_set_transient_for_exported_t,
}

/// The entry points that could be resolved
///
/// Built once after the toolkit version is known and never modified
/// afterwards. It borrows the library it was resolved from, since the
/// pointers it holds are only valid while that library stays loaded.
#[derive(Debug, Clone, Copy)]
pub struct GdkSymbols<'lib> {
    pub(crate) legacy_x11: Option<LegacyX11>,
    pub(crate) x11: Option<X11>,
    pub(crate) wayland: Option<Wayland>,
    pub(crate) type_check_instance_is_a: Option<g_type_check_instance_is_a_t>,
    pub(crate) set_transient_for_hint: Option<XSetTransientForHint_t>,
    _lib: PhantomData<&'lib ()>,
}

macro_rules! resolve_group {
    ($source: expr, $what: expr, $group: ident { $($field: ident: $name: literal),+ $(,)? }) => {{
        // SAFETY: the field types are the documented signatures of the symbols.
        let group = (|| unsafe {
            Some($group { $($field: function($source, $name)?),+ })
        })();
        if group.is_none() {
            log::debug!("{} entry points are not available.", $what);
        }
        group
    }};
}

impl<'lib> GdkSymbols<'lib> {
    /// Nothing resolved
    pub const fn empty() -> Self {
        Self {
            legacy_x11: None,
            x11: None,
            wayland: None,
            type_check_instance_is_a: None,
            set_transient_for_hint: None,
            _lib: PhantomData,
        }
    }

    /// Resolve everything `backends` allows from `source`
    ///
    /// Missing symbols are not an error, the corresponding code paths are
    /// just disabled.
    pub fn resolve<S>(source: &'lib S, version: ToolkitVersion, backends: Backends) -> Self
    where
        S: SymbolSource + ?Sized,
    {
        let mut symbols = Self::empty();
        // The GDK 2 accessors are an X11 backend too.
        let legacy = backends.x11 && backends.legacy;

        if version.at_least(3, 0, 0) {
            if backends.x11 {
                symbols.x11 = resolve_group!(source, "GDK 3 X11", X11 {
                    window_get_type: c"gdk_x11_window_get_type",
                    window_get_display: c"gdk_window_get_display",
                    display_get_xdisplay: c"gdk_x11_display_get_xdisplay",
                    window_get_xid: c"gdk_x11_window_get_xid",
                });
            }
            if backends.wayland {
                symbols.wayland = resolve_group!(source, "GDK 3 Wayland", Wayland {
                    window_get_type: c"gdk_wayland_window_get_type",
                    set_transient_for_exported: c"gdk_wayland_window_set_transient_for_exported",
                });
            }
        } else if legacy {
            symbols.legacy_x11 = resolve_group!(source, "GDK 2 X11", LegacyX11 {
                drawable_get_xdisplay: c"gdk_x11_drawable_get_xdisplay",
                drawable_get_xid: c"gdk_x11_drawable_get_xid",
            });
        }

        // SAFETY: these are the documented signatures of the symbols.
        unsafe {
            symbols.type_check_instance_is_a = function(source, c"g_type_check_instance_is_a");
            if backends.x11 {
                symbols.set_transient_for_hint = function(source, c"XSetTransientForHint");
            }
        }

        symbols
    }

    /// Resolve from the toolkit library with the backends enabled at build
    /// time, then fall back to the system glue libraries
    pub fn load(library: &'lib ToolkitLibrary, version: ToolkitVersion) -> Self {
        Self::resolve(library, version, Backends::compiled()).with_system_glue()
    }

    /// Fill the glue entry points that could not be resolved from the
    /// toolkit library with the ones from the system libraries
    pub fn with_system_glue(mut self) -> Self {
        if self.type_check_instance_is_a.is_none() {
            self.type_check_instance_is_a = gdk_transient_sys::gobject::type_check_instance_is_a();
        }
        #[cfg(feature = "x11")]
        {
            let needs_hint = self.x11.is_some() || self.legacy_x11.is_some();
            if needs_hint && self.set_transient_for_hint.is_none() {
                self.set_transient_for_hint = gdk_transient_sys::xlib::set_transient_for_hint();
            }
        }
        self
    }

    /// Whether the GDK 3 X11 path is usable
    pub fn has_x11(&self) -> bool {
        self.x11.is_some()
            && self.type_check_instance_is_a.is_some()
            && self.set_transient_for_hint.is_some()
    }

    /// Whether the Wayland path is usable
    pub fn has_wayland(&self) -> bool {
        self.wayland.is_some() && self.type_check_instance_is_a.is_some()
    }

    /// Whether the GDK 2 X11 path is usable
    pub fn has_legacy_x11(&self) -> bool {
        self.legacy_x11.is_some() && self.set_transient_for_hint.is_some()
    }
}

impl Default for GdkSymbols<'_> {
    fn default() -> Self {
        Self::empty()
    }
}
