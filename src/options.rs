//! Configuration options for a benchmark run.
//!
//! This module provides:
//!
//! - [`BenchOptions`]: Main configuration struct
//! - [`FailurePolicy`]: What happens when a single sample fails
//!
//! ## Examples
//!
//! ```rust
//! use std::time::Duration;
//! use toon_bench::{Baseline, BenchOptions, FailurePolicy};
//!
//! let options = BenchOptions::new()
//!     .with_data_dir("samples")
//!     .with_baseline(Baseline::Pretty)
//!     .with_failure_policy(FailurePolicy::Abort)
//!     .with_timeout(Duration::from_secs(5));
//! assert_eq!(options.model, "gpt-5");
//! ```

use crate::Baseline;
use std::path::PathBuf;
use std::time::Duration;

/// What the runner does when a sample cannot be compared.
///
/// I/O errors abort the run under either policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// The first failure aborts the whole run.
    Abort,
    /// Malformed, unencodable or timed-out samples are skipped and listed
    /// after the table.
    #[default]
    Skip,
}

/// Configuration for one benchmark run.
///
/// # Examples
///
/// ```rust
/// use toon_bench::{BenchOptions, FailurePolicy};
///
/// let options = BenchOptions::new();
/// assert_eq!(options.extension, ".json");
/// assert!(options.sort_files);
/// assert_eq!(options.failure_policy, FailurePolicy::Skip);
/// ```
#[derive(Clone, Debug)]
pub struct BenchOptions {
    pub data_dir: PathBuf,
    pub extension: String,
    pub model: String,
    pub baseline: Baseline,
    pub sort_files: bool,
    pub failure_policy: FailurePolicy,
    pub timeout: Option<Duration>,
}

impl Default for BenchOptions {
    fn default() -> Self {
        BenchOptions {
            data_dir: PathBuf::from("./data"),
            extension: ".json".to_string(),
            model: "gpt-5".to_string(),
            baseline: Baseline::default(),
            sort_files: true,
            failure_policy: FailurePolicy::default(),
            timeout: Some(Duration::from_secs(30)),
        }
    }
}

impl BenchOptions {
    /// Creates default options (`./data`, `.json`, `gpt-5`, minified baseline).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory samples are read from.
    #[must_use]
    pub fn with_data_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Sets the file-name suffix samples must carry, e.g. `.json`.
    #[must_use]
    pub fn with_extension<S: Into<String>>(mut self, extension: S) -> Self {
        self.extension = extension.into();
        self
    }

    /// Sets the tokenizer model identifier.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toon_bench::BenchOptions;
    ///
    /// let options = BenchOptions::new().with_model("gpt-4o");
    /// assert_eq!(options.model, "gpt-4o");
    /// ```
    #[must_use]
    pub fn with_model<S: Into<String>>(mut self, model: S) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the baseline representation.
    #[must_use]
    pub fn with_baseline(mut self, baseline: Baseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Keeps the filesystem enumeration order instead of sorting by name.
    #[must_use]
    pub fn unsorted(mut self) -> Self {
        self.sort_files = false;
        self
    }

    /// Sets the failure policy.
    #[must_use]
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Bounds each comparison by `timeout`.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Runs comparisons on the calling thread with no time bound.
    #[must_use]
    pub fn without_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }
}
