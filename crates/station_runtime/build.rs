use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ManifestHeader {
    schema_version: u32,
    station: toml::Value,
    reveal: toml::Value,
    player: toml::Value,
    content: toml::Value,
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("station.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let manifest: toml::Value = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    let header: ManifestHeader = manifest
        .clone()
        .try_into()
        .unwrap_or_else(|err| {
            panic!(
                "station manifest missing sections in {}: {err}",
                path.display()
            )
        });
    if header.schema_version != 1 {
        panic!(
            "station manifest schema mismatch in {}: expected 1 found {}",
            path.display(),
            header.schema_version
        );
    }
    for (section, value) in [
        ("station", &header.station),
        ("reveal", &header.reveal),
        ("player", &header.player),
        ("content", &header.content),
    ] {
        if !value.is_table() {
            panic!("station manifest section `{section}` must be a table");
        }
    }

    let json = serde_json::to_string_pretty(&manifest).expect("serialize station manifest");
    let generated = format!(
        "/// Build-time generated station manifest JSON.\n\
pub const STATION_MANIFEST_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("station_manifest_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
