use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Editors and scripts wrapping the binary use these to tell a failed
/// analysis apart from a usage mistake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the analysis (or event loop) completed
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (engine failure, file I/O error, bad configuration, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dependency analysis.
///
/// Data-shape problems in provider reports never surface here; they are
/// absorbed by the aggregator. These variants cover failures a caller has
/// to report.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Component analysis failed for {file_type}\nDetails: {details}\n\n💡 Hint: Check the manifest syntax and the configured tool paths, then save the file to retry")]
    Invocation { file_type: String, details: String },

    #[error("Invalid file pattern '{pattern}'\nDetails: {details}")]
    InvalidPattern { pattern: String, details: String },

    #[error("File pattern '{pattern}' is already registered for the {stream} stream\n\n💡 Hint: Patterns for the same stream must be unique; the earliest registration would always win")]
    DuplicatePattern { pattern: String, stream: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Unsupported manifest: {path}\n\n💡 Hint: Supported manifests are package.json, pom.xml, go.mod and requirements.txt")]
    UnsupportedManifest { path: PathBuf },

    #[error("Invalid editor event: {details}")]
    InvalidEvent { details: String },

    #[error("Invalid configuration: {details}\n\n💡 Hint: {hint}")]
    ConfigError { details: String, hint: String },
}
