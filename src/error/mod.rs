//! Error handling module for fftrim

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for fftrim operations
#[derive(Error, Debug)]
pub enum FfTrimError {
    /// Run parameters rejected at construction
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Path is neither a regular file nor a directory
    #[error("File or directory not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// ffprobe ran but did not report a usable duration
    #[error("Failed to probe {}: {message}", .path.display())]
    ProbeFailed { path: PathBuf, message: String },

    /// A required external program could not be resolved
    #[error("Required program '{program}' was not found")]
    ToolkitNotFound { program: String },

    /// Config file could not be parsed
    #[error("Failed to parse config file {}: {message}", .path.display())]
    ConfigParse { path: PathBuf, message: String },

    /// Directory traversal error
    #[error("Failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FfTrimError {
    /// Shorthand for a configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Shorthand for a missing path.
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }
}

/// Result type alias for fftrim operations
pub type FfTrimResult<T> = std::result::Result<T, FfTrimError>;
