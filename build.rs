use chrono::Datelike;

fn main() {
    // Capture the current timestamp as the build time
    let now = chrono::Utc::now();
    let build_time = now.to_rfc3339();

    // Also set as environment variables for use in env! macro
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);
    // The footer copyright is baked in so the shell and the wasm bundle never disagree
    println!("cargo:rustc-env=COPYRIGHT_YEAR={}", now.year());

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
