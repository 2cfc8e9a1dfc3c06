//! Shared helpers for manifest-bump integration tests.
//!
//! Each test writes a manifest into a temporary directory and drives the
//! binary against it.

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[allow(unused)]
pub const CHECKSUM: &str = "b5c1e5a723344d42ed4361d559df29ae3777d085414d3515d1c04a765c98ec9d";

/// A Swift package manifest with both recognized declarations.
#[allow(unused)]
pub fn package_swift() -> String {
    format!(
        r#"// swift-tools-version:5.5
import PackageDescription

let tag = "v0.1.0"
let checksum = "{CHECKSUM}"
let url = "https://github.com/example/core/releases/download/\(tag)/Core.xcframework.zip"

let package = Package(
    name: "core",
    targets: [
        .binaryTarget(
            name: "CoreFFI",
            url: url,
            checksum: checksum
        )
    ]
)
"#
    )
}

/// Creates a temp directory holding `Package.swift` with `content`.
pub fn create_manifest(content: &str) -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("Package.swift");
    fs::write(&path, content).unwrap();
    (temp, path)
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

/// Runs the binary against `manifest` with `args`.
pub fn run_bump(manifest: &Path, args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("manifest-bump");
    cmd.arg("--manifest-path").arg(manifest).args(args);

    cmd.assert()
}
