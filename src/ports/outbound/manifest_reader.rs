use crate::shared::Result;
use std::path::Path;

/// ManifestReader port for loading manifest contents from disk
pub trait ManifestReader {
    /// Reads the manifest at `path`
    ///
    /// # Errors
    /// Returns an error if the file is missing, is not a regular file,
    /// exceeds the size limit, or cannot be read as UTF-8
    fn read_manifest(&self, path: &Path) -> Result<String>;
}
