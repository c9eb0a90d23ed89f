#![allow(clippy::style)]


use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

fn main() -> std::io::Result<()> {
    let outdir = match std::env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };
    let outdir_path = PathBuf::from(outdir);

    write_default_base(&outdir_path, "default_base.rs")?;
    Ok(())
}

/// Create default_base.rs, containing definition of constant DEFAULT_BASE
fn write_default_base(outdir_path: &PathBuf, filename: &str) -> std::io::Result<()>
{
    let default_base = env::var("RUST_BIGRADIX_DEFAULT_BASE")
        .map(|s| s.parse::<u32>().expect("$RUST_BIGRADIX_DEFAULT_BASE must be an integer that fits in u32"))
        .unwrap_or(1_000_000_000u32);

    assert_ne!(default_base, 1, "$RUST_BIGRADIX_DEFAULT_BASE must not be 1 (radix 1 is not supported)");

    let default_base_rs_path = outdir_path.join(filename);

    let contents = format!(
        "/// Radix used by `BigInt` when no radix parameter is given\npub const DEFAULT_BASE: u32 = {default_base};"
    );

    // Rewriting the file if it already exists with the same contents
    // would force a rebuild.
    match std::fs::read_to_string(&default_base_rs_path) {
        Ok(existing_contents) if existing_contents == contents => {},
        _ => {
            let mut default_base_rs = File::create(&default_base_rs_path)
                .expect("Could not create default_base.rs");
            write!(default_base_rs, "{contents}")?;
        }
    };

    println!("cargo:rerun-if-changed={}", default_base_rs_path.display());
    println!("cargo:rerun-if-env-changed={}", "RUST_BIGRADIX_DEFAULT_BASE");

    Ok(())
}
