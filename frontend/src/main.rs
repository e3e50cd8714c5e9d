//! Travel planner - Dioxus app.
//! Browser: dx serve (or cargo run, which hands over to dx). Desktop: cargo run --features desktop.

#[cfg(target_arch = "wasm32")]
fn main() {
    travel_planner_frontend::launch();
}

#[cfg(all(not(target_arch = "wasm32"), feature = "desktop"))]
fn main() {
    // TRAVEL_* settings may come from a local .env
    dotenv::dotenv().ok();
    travel_planner_frontend::launch();
}

#[cfg(all(not(target_arch = "wasm32"), not(feature = "desktop")))]
fn main() {
    // A native run of the web build renders nothing; `dx serve` builds and serves the wasm bundle.
    // reference-types stays off so wasm-bindgen can find its intrinsics.
    let mut rustflags = std::env::var("RUSTFLAGS").unwrap_or_default();
    rustflags.push_str(" -C target-feature=-reference-types");
    match std::process::Command::new("dx")
        .arg("serve")
        .env("RUSTFLAGS", rustflags.trim_start())
        .status()
    {
        Ok(status) => std::process::exit(status.code().unwrap_or(1)),
        Err(err) => {
            eprintln!("could not start `dx serve` ({err}); install it with `cargo install dioxus-cli`");
            eprintln!("or run the desktop build: cargo run --features desktop");
            std::process::exit(1);
        }
    }
}
