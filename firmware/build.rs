use std::path::PathBuf;
use std::{env, fs};

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let memory_x: &[u8] = if env::var_os("CARGO_FEATURE_NRF52840_DONGLE").is_some() {
        include_bytes!("memory-dongle.x")
    } else {
        include_bytes!("memory.x")
    };
    fs::write(out_dir.join("memory.x"), memory_x).expect("write memory.x");

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=memory-dongle.x");

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
}
