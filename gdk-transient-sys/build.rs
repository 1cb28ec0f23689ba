use pkg_config::Config;

fn main() {
    if std::env::var_os("CARGO_FEATURE_DLOPEN").is_some() {
        // Do not link to anything
        return;
    }

    // The toolkit itself is linked too, so that its symbols can be
    // looked up in the running process image.
    Config::new().probe("gtk+-3.0").unwrap();
    Config::new().probe("gobject-2.0").unwrap();
    if std::env::var_os("CARGO_FEATURE_X11").is_some() {
        Config::new().probe("x11").unwrap();
    }
}
