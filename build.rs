fn main() {
    // Stamp the build time; the footer reads it through env!("BUILD_TIME").
    let build_time = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    println!("cargo:rerun-if-changed=build.rs");
}
