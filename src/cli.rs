use clap::Parser;
use std::path::PathBuf;

/// Manifest used when `--manifest-path` is not given.
pub const DEFAULT_MANIFEST: &str = "Package.swift";

/// Update the checksum and/or release tag declared in a package manifest.
#[derive(Parser, Debug, Clone)]
#[command(name = "manifest-bump", version)]
pub struct BumpArgs {
    /// New lowercase hexadecimal checksum of the release artifact
    #[arg(long, value_name = "HEX")]
    pub checksum: Option<String>,

    /// New release tag (e.g. v0.1.0 or 0.1.0)
    #[arg(long, value_name = "TAG")]
    pub tag: Option<String>,

    /// Path to the manifest to update
    #[arg(long, value_name = "PATH", default_value = DEFAULT_MANIFEST)]
    pub manifest_path: PathBuf,

    /// Show what would change without writing the manifest
    #[arg(long, short = 'n')]
    pub dry_run: bool,
}
