use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Every report was written
    Success = 0,
    /// Application error (invalid project path, unwritable output, bad config, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
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
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for SBOM collection.
///
/// Per-manifest variants (`Generator*`, `BomParseError`) are logged and
/// swallowed by the collection use case; the rest abort the run.
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid directory to scan")]
    InvalidProjectPath { path: PathBuf, reason: String },

    #[error("Failed to start SBOM generator '{command}' for {manifest}\nDetails: {details}\n\n💡 Hint: Make sure the generator is installed and on your PATH")]
    GeneratorSpawn {
        command: String,
        manifest: PathBuf,
        details: String,
    },

    #[error("SBOM generator exited with {status} for {manifest}")]
    GeneratorExit { manifest: PathBuf, status: String },

    #[error("SBOM generator output for {manifest} exceeds {limit} bytes")]
    GeneratorOutputTooLarge { manifest: PathBuf, limit: usize },

    #[error("Failed to parse SBOM generator output for {manifest}\nDetails: {details}")]
    BomParseError { manifest: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to load license dataset: {path}\nDetails: {details}\n\n💡 Hint: The dataset must be a JSON array of {{\"name\", \"license\"}} objects")]
    LicenseDatasetError { path: PathBuf, details: String },

    /// Validation error for configuration and request builders
    #[error("Validation error: {message}")]
    Validation { message: String },
}
