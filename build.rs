//! Purpose: Generate the C header for the application boundary.
//! Role: Cargo build-script; runs `cbindgen` over the crate with `cbindgen.toml`.
//! Invariants: Header lands at `include/sls_webgpu_ios.h` under the manifest dir.
//! Invariants: Header generation failures are reported as warnings and never fail the Rust build.
//! Invariants: Uses only Cargo-provided env vars (e.g. `CARGO_MANIFEST_DIR`).
use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=cbindgen.toml");
    println!("cargo:rerun-if-changed=src/abi.rs");
    println!("cargo:rerun-if-changed=src/core/point.rs");

    let Some(manifest_dir) = env::var_os("CARGO_MANIFEST_DIR").map(PathBuf::from) else {
        println!("cargo:warning=CARGO_MANIFEST_DIR is unset; skipping header generation");
        return;
    };
    let config = cbindgen::Config::from_root_or_default(&manifest_dir);
    let header = manifest_dir.join("include").join("sls_webgpu_ios.h");

    match cbindgen::generate_with_config(&manifest_dir, config) {
        Ok(bindings) => {
            if let Some(dir) = header.parent() {
                if let Err(err) = std::fs::create_dir_all(dir) {
                    println!("cargo:warning=failed to create {}: {err}", dir.display());
                    return;
                }
            }
            bindings.write_to_file(&header);
        }
        Err(err) => {
            println!("cargo:warning=failed to generate C header: {err}");
        }
    }
}
