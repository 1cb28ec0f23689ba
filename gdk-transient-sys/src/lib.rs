//! FFI bindings to the system libraries needed to set transient-for hints
//! on GDK windows.
//!
//! Two kinds of bindings live here:
//!
//! - the *glue* libraries (`libgobject-2.0.so` and `libX11.so`), declared with
//!   `dlib` so that they are either linked at build time or opened at runtime
//!   when the cargo feature `dlopen` is on;
//! - the signatures of the optional GDK entry points (in [`gdk`]). Those are
//!   never linked: they may or may not exist depending on the toolkit version
//!   and on how it was built, so they are only ever looked up at runtime.
//!
//! Each glue module defines a function named `is_lib_available()` which returns
//! a boolean depending on whether the lib could be loaded. It always returns
//! true if the feature `dlopen` is absent, as the lib is then directly linked.

#![allow(non_camel_case_types)]

#[allow(unused_imports)]
#[macro_use]
extern crate dlib;

pub mod common;
pub mod gdk;
pub mod gobject;
pub mod xlib;
