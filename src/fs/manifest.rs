use crate::error::{BumpError, Result};
use std::fs;
use std::path::Path;

/// Reads the whole manifest into memory.
pub fn read_manifest(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path).map_err(|e| {
        log::debug!("Failed to read file {}: {}", path.display(), e);
        BumpError::ReadManifest {
            path: path.to_path_buf(),
            source: e,
        }
    })?;

    log::debug!("Read {} bytes from {}", content.len(), path.display());
    Ok(content)
}

/// Overwrites the manifest in place.
pub fn write_manifest(path: &Path, content: &str) -> Result<()> {
    if let Ok(metadata) = fs::metadata(path)
        && metadata.permissions().readonly()
    {
        return Err(BumpError::WriteManifest {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "file is read-only"),
        });
    }

    fs::write(path, content).map_err(|e| BumpError::WriteManifest {
        path: path.to_path_buf(),
        source: e,
    })?;

    log::debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
