// Desktop builds on Linux link against libxdo and WebKitGTK; fail early with install hints.

const LINUX_DESKTOP_LIBS: &[(&str, &str, &str)] = &[
    ("libxdo", "libxdo-devel", "libxdo-dev"),
    ("webkit2gtk-4.1", "webkit2gtk4.1-devel", "libwebkit2gtk-4.1-dev"),
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    let is_desktop = std::env::var("CARGO_FEATURE_DESKTOP").is_ok();
    let is_linux = std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("linux");
    if !(is_desktop && is_linux) {
        return;
    }

    let missing: Vec<_> = LINUX_DESKTOP_LIBS
        .iter()
        .filter(|(lib, _, _)| !system_lib_present(lib))
        .collect();
    if missing.is_empty() {
        return;
    }

    eprintln!();
    eprintln!("  error: the travel planner desktop build on Linux needs these system libraries:");
    for (lib, fedora, debian) in &missing {
        eprintln!("    {lib}:  Fedora/RHEL `sudo dnf install {fedora}`, Debian/Ubuntu `sudo apt install {debian}`");
    }
    eprintln!();
    eprintln!("  Then: cargo run --features desktop   (or use the browser build: dx serve)");
    eprintln!();
    std::process::exit(1);
}

fn system_lib_present(lib: &str) -> bool {
    // libxdo often ships without a .pc file, so fall back to the linker cache
    let via_pkg_config = std::process::Command::new("pkg-config")
        .args(["--exists", lib])
        .status()
        .map(|s| s.success())
        .unwrap_or(false);
    via_pkg_config
        || std::process::Command::new("ldconfig")
            .args(["-p"])
            .output()
            .map(|o| String::from_utf8_lossy(&o.stdout).contains(lib))
            .unwrap_or(false)
}
