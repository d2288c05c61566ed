//! Build script for procscope-core
//!
//! This script checks system requirements before compilation:
//! - Minimum Rust version (`<[u8]>::utf8_chunks` needs Rust 1.79.0+)
//!
//! ## Requirements
//!
//! - **Rust**: 1.79.0 or newer
//! - **Linux**: procfs mounted at `/proc` for the process backends (runtime only)

fn main()
{
    // Check minimum Rust version
    // The path codec relies on `Utf8Chunks`, stabilized in Rust 1.79.0
    if let Ok(rustc_version) = rustc_version::version() {
        let min_rust_version = rustc_version::Version::new(1, 79, 0);

        if rustc_version < min_rust_version {
            panic!(
                "procscope-core requires Rust {} or newer, found {}",
                min_rust_version, rustc_version
            );
        }
    } else {
        // If we can't get version (e.g., in some build environments), just warn
        println!("cargo:warning=could not verify Rust version");
    }
}
