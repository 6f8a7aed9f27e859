// File: crates/chart-core/build.rs
// Summary: Links the Windows system libraries Skia's font manager needs for raster text.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Font manager reads the registry (RegOpenKeyExW and friends).
        println!("cargo:rustc-link-lib=advapi32");
    }
}
