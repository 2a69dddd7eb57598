//! Compiles `proto/consignment.proto` into Rust types, the ShippingService
//! client/server stubs, and an encoded descriptor set for server reflection.

use std::env;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Vendored protoc so the build does not depend on a system install
    if env::var_os("PROTOC").is_none() {
        env::set_var("PROTOC", protoc_bin_vendored::protoc_bin_path()?);
    }

    let out_dir = PathBuf::from(env::var("OUT_DIR")?);

    tonic_build::configure()
        .file_descriptor_set_path(out_dir.join("consignment_descriptor.bin"))
        .compile_protos(&["proto/consignment.proto"], &["proto"])?;

    println!("cargo:rerun-if-changed=proto/consignment.proto");
    Ok(())
}
