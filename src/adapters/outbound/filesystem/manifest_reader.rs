use crate::analysis::domain::ManifestKind;
use crate::ports::outbound::ManifestReader;
use crate::shared::error::AnalysisError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_MANIFEST_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemManifestReader adapter for loading manifests from disk
///
/// Used by the one-shot `analyze` command. Only the four supported manifest
/// file names are accepted.
pub struct FileSystemManifestReader;

impl FileSystemManifestReader {
    pub fn new() -> Self {
        Self
    }

    /// Reads a file with security checks:
    /// - Reject symbolic links
    /// - Validate file is a regular file
    /// - Check file size limits
    fn safe_read_file(&self, path: &Path, file_description: &str) -> Result<String> {
        validate_regular_file(path, file_description)?;

        let metadata = fs::metadata(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;
        validate_file_size(metadata.len(), path, MAX_MANIFEST_SIZE)?;

        fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_description, e))
    }
}

impl Default for FileSystemManifestReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestReader for FileSystemManifestReader {
    fn read_manifest(&self, path: &Path) -> Result<String> {
        let kind = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(ManifestKind::from_file_name)
            .ok_or_else(|| AnalysisError::UnsupportedManifest {
                path: path.to_path_buf(),
            })?;

        self.safe_read_file(path, kind.file_name()).map_err(|e| {
            AnalysisError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
