use std::env;

/// This build script's job is to set a handful of `cfg`s based on the target
/// that this crate is being compiled for. Namely, whether a vector back-end
/// is *possibly* usable at all on this target (`bytefind_runtime_simd`), and
/// whether the specific vector feature sets this crate knows how to use are
/// possibly usable (`bytefind_runtime_avx2`, `bytefind_runtime_neon`).
///
/// Since whether these features are *actually* usable also depends on the
/// runtime CPU (unless the feature is enabled at compile time via e.g.
/// `-C target-feature=+avx2`), the dispatch code in `src/dispatch.rs` still
/// performs `is_x86_feature_detected!`/`is_aarch64_feature_detected!` checks
/// behind the `std` feature before actually calling into a vector routine.
/// This build script only decides which modules are compiled at all.
///
/// Setting `BYTEFIND_DISABLE_AUTO_SIMD=1` disables all of the above and
/// forces every target to use only the scalar and SWAR back-ends. This is
/// mostly useful for testing the scalar fallback path on hardware that would
/// otherwise use a vector back-end.
fn main() {
    println!("cargo:rerun-if-env-changed=BYTEFIND_DISABLE_AUTO_SIMD");
    println!("cargo::rustc-check-cfg=cfg(bytefind_runtime_simd)");
    println!("cargo::rustc-check-cfg=cfg(bytefind_runtime_avx2)");
    println!("cargo::rustc-check-cfg=cfg(bytefind_runtime_neon)");

    if env::var_os("BYTEFIND_DISABLE_AUTO_SIMD").is_some() {
        return;
    }

    let arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
    match arch.as_str() {
        "x86_64" | "x86" => {
            println!("cargo:rustc-cfg=bytefind_runtime_simd");
            println!("cargo:rustc-cfg=bytefind_runtime_avx2");
        }
        "aarch64" => {
            println!("cargo:rustc-cfg=bytefind_runtime_simd");
            println!("cargo:rustc-cfg=bytefind_runtime_neon");
        }
        _ => {}
    }
}
