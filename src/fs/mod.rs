//! File system access for the manifest.
//!
//! The manifest is read once before patching and written once after.

pub mod manifest;

pub use manifest::{read_manifest, write_manifest};
