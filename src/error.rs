//! Error types for loading samples, encoding them and counting tokens.
//!
//! ## Error Categories
//!
//! - **I/O Errors**: the sample directory is missing or a file cannot be read
//! - **Invalid Input**: a sample file is not well-formed JSON
//! - **Encoding Errors**: the TOON encoder rejected a value
//! - **Tokenization Errors**: the tokenizer model is unknown or failed
//! - **Timeouts**: a single comparison took longer than the configured bound
//! - **Worker Errors**: the comparison thread could not start or panicked
//!
//! Only I/O errors are fatal under every [`FailurePolicy`](crate::FailurePolicy);
//! the rest concern a single file and may be skipped.
//!
//! ## Examples
//!
//! ```rust
//! use toon_bench::{load_sample, Error};
//!
//! let result = load_sample("does/not/exist.json");
//! assert!(matches!(result, Err(Error::Io { .. })));
//! ```

use std::fmt;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Represents all possible errors that can occur during a benchmark run.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The directory or file could not be opened or read
    #[error("IO error on {path}: {msg}")]
    Io { path: String, msg: String },

    /// The file contents are not valid JSON
    #[error("Invalid JSON in {path}: {msg}")]
    InvalidInput { path: String, msg: String },

    /// The compact encoder failed
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// The tokenizer could not be built or failed to count
    #[error("Tokenization error: {0}")]
    Tokenization(String),

    /// A comparison did not finish in time
    #[error("Comparison timed out after {0:?}")]
    Timeout(Duration),

    /// The comparison worker thread failed to start or panicked
    #[error("Comparison worker failed: {0}")]
    Worker(String),
}

impl Error {
    /// Creates an I/O error for the given path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toon_bench::Error;
    ///
    /// let err = Error::io("data", "No such file or directory");
    /// assert!(err.to_string().contains("data"));
    /// ```
    pub fn io<P: AsRef<Path>, T: fmt::Display>(path: P, msg: T) -> Self {
        Error::Io {
            path: path.as_ref().display().to_string(),
            msg: msg.to_string(),
        }
    }

    /// Creates an invalid-input error for a file that failed to parse as JSON.
    pub fn invalid_input<P: AsRef<Path>, T: fmt::Display>(path: P, msg: T) -> Self {
        Error::InvalidInput {
            path: path.as_ref().display().to_string(),
            msg: msg.to_string(),
        }
    }

    /// Creates an encoding error.
    pub fn encoding<T: fmt::Display>(msg: T) -> Self {
        Error::Encoding(msg.to_string())
    }

    /// Creates a tokenization error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toon_bench::Error;
    ///
    /// let err = Error::tokenization("unknown model: foo");
    /// assert!(err.to_string().contains("unknown model"));
    /// ```
    pub fn tokenization<T: fmt::Display>(msg: T) -> Self {
        Error::Tokenization(msg.to_string())
    }

    /// Creates a worker error.
    pub fn worker<T: fmt::Display>(msg: T) -> Self {
        Error::Worker(msg.to_string())
    }

    /// Returns `true` when the error concerns a single sample and the run may
    /// continue with the next one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toon_bench::Error;
    ///
    /// assert!(Error::encoding("unsupported").is_per_file());
    /// assert!(!Error::io("data", "missing").is_per_file());
    /// ```
    #[must_use]
    pub fn is_per_file(&self) -> bool {
        !matches!(self, Error::Io { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
