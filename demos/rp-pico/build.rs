use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let memory_x = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap()).join("memory.x");

    let layout = fs::read_to_string(&memory_x).expect("Failed to read memory.x");
    fs::write(out_dir.join("memory.x"), layout).expect("Failed to write memory.x");

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rustc-link-arg=-Tlink.x");
    println!("cargo:rerun-if-changed={}", memory_x.display());
    println!("cargo:rerun-if-changed=build.rs");
}
