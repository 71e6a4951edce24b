use std::env;
use std::path::PathBuf;

fn main() {
    let crate_dir =
        PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set"));
    let include_dir = crate_dir.join("include");
    let config_path = crate_dir.join("cbindgen.toml");

    std::fs::create_dir_all(&include_dir).expect("failed to create include/ directory");

    let config = cbindgen::Config::from_file(&config_path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", config_path.display()));

    cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_config(config)
        .generate()
        .expect("cbindgen failed to generate primath.h")
        .write_to_file(include_dir.join("primath.h"));

    println!("cargo:rerun-if-changed=src/lib.rs");
    println!("cargo:rerun-if-changed=cbindgen.toml");
}
