use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes let callers distinguish argument mistakes from failures
/// that happened while generating the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the VEX document was generated and written
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (config read, SBOM parse, merge, file I/O, etc.)
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

/// Application-specific errors for VEX generation.
///
/// Every variant names the operation that failed and carries the
/// underlying cause so the caller can log it and exit non-zero.
#[derive(Debug, Error)]
pub enum VexError {
    #[error("Failed to serialize package configuration: {package}\nDetails: {details}")]
    Serialization { package: String, details: String },

    #[error("Failed to hash {subject}\nDetails: {details}")]
    Hashing { subject: String, details: String },

    #[error("Failed to merge VEX documents\nDetails: {details}")]
    Merge { details: String },

    #[error("Failed to read SBOM file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    SbomRead { path: PathBuf, details: String },

    #[error("Failed to parse SBOM file: {path}\nDetails: {details}\n\n💡 Hint: Only SPDX JSON documents are supported")]
    SbomParse { path: PathBuf, details: String },

    #[error("Failed to parse package URL: {locator}\nDetails: {details}")]
    ProductUrlParse { locator: String, details: String },

    #[error("Failed to read package configuration: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    ConfigurationRead { path: PathBuf, details: String },

    #[error("Failed to parse package configuration: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file is a valid melange YAML configuration")]
    ConfigurationParse { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for requests and configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
