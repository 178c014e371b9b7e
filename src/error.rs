//! Error types for paircmp
//!
//! This module defines the error hierarchy for the comparison engine:
//! - File set enumeration errors (fatal - the run cannot proceed)
//! - Configuration and CLI errors (fatal before any work starts)
//! - Dispatch errors (task bookkeeping went wrong)
//!
//! Per-pair open/read failures are deliberately NOT part of this
//! hierarchy: they are local to one comparison task and surface as a
//! `Verdict::Error` report line, never as a process-level error.
//!
//! Design philosophy:
//! - Use thiserror for structured error types in library code
//! - Errors should name the failing operation and the system reason
//! - Preserve error chains for debugging

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for the paircmp application
#[derive(Error, Debug)]
pub enum PaircmpError {
    /// File set enumeration errors
    #[error("File set error: {0}")]
    Fileset(#[from] FilesetError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Dispatch/concurrency errors
    #[error("Dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PaircmpError {
    /// Map this error to the process exit code documented in the CLI
    /// contract: 2 for argument/configuration problems, 1 for everything
    /// that kills a run after arguments were accepted.
    pub fn exit_code(&self) -> u8 {
        match self {
            PaircmpError::Config(_) => 2,
            _ => 1,
        }
    }
}

/// Errors raised while enumerating a directory into a file set
#[derive(Error, Debug)]
pub enum FilesetError {
    /// The directory could not be opened at all (missing, not a
    /// directory, permission denied). Always fatal to the run.
    #[error("Cannot list directory '{path}': {reason}")]
    DirectoryUnreadable { path: PathBuf, reason: String },

    /// Reading the next entry from an already-open directory failed
    #[error("Failed to read entry in '{path}': {reason}")]
    EntryUnreadable { path: PathBuf, reason: String },
}

/// Configuration and CLI errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Concurrency ceiling out of range
    #[error("Invalid concurrency {value}: must be between 1 and {max}")]
    InvalidConcurrency { value: i64, max: usize },

    /// Chunk size out of range
    #[error("Invalid chunk size {size}: must be between {min} and {max} bytes")]
    InvalidChunkSize { size: usize, min: usize, max: usize },
}

/// Dispatch and task bookkeeping errors
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The completion channel closed while tasks were still outstanding.
    /// Indicates a panicked task; the report for that pair is lost.
    #[error("Completion channel closed with {outstanding} task(s) outstanding")]
    ChannelClosed { outstanding: usize },
}

/// Result type alias for PaircmpError
pub type Result<T> = std::result::Result<T, PaircmpError>;

/// Result type alias for FilesetError
pub type FilesetResult<T> = std::result::Result<T, FilesetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_mapping() {
        let config_err: PaircmpError = ConfigError::InvalidConcurrency {
            value: 0,
            max: 1_000_000,
        }
        .into();
        assert_eq!(config_err.exit_code(), 2);

        let fileset_err: PaircmpError = FilesetError::DirectoryUnreadable {
            path: "/missing".into(),
            reason: "No such file or directory".into(),
        }
        .into();
        assert_eq!(fileset_err.exit_code(), 1);
    }

    #[test]
    fn test_error_conversion() {
        let err = FilesetError::DirectoryUnreadable {
            path: "/missing".into(),
            reason: "permission denied".into(),
        };
        let top: PaircmpError = err.into();
        assert!(matches!(top, PaircmpError::Fileset(_)));
    }
}
