use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::core::monitor::Section;

/// Custom error type for SysPeek
#[derive(Error, Debug)]
pub enum SyspeekError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Could not open log file: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error: {0}")]
    Validation(String),

    #[error("Failed to set interrupt handler: {0}")]
    SignalHandler(String),
}

/// Result type alias for SysPeek
pub type Result<T> = std::result::Result<T, SyspeekError>;

impl SyspeekError {
    /// Create a flag validation error
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        SyspeekError::Validation(msg.into())
    }

    pub fn log_file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SyspeekError::LogFile {
            path: path.into(),
            source,
        }
    }

    pub fn signal_handler<S: Into<String>>(msg: S) -> Self {
        SyspeekError::SignalHandler(msg.into())
    }
}

/// A single metric provider call that failed.
///
/// Never fatal: the refresh loop reports it inline for its section and moves on.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{cause}")]
pub struct SampleError {
    pub section: Section,
    pub cause: String,
}

impl SampleError {
    pub fn new<S: Into<String>>(section: Section, cause: S) -> Self {
        SampleError {
            section,
            cause: cause.into(),
        }
    }
}
