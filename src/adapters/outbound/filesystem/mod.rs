/// Filesystem adapters for manifest input and report output
mod file_writer;
mod manifest_reader;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use manifest_reader::FileSystemManifestReader;
