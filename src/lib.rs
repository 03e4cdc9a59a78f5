//! # toon_bench
//!
//! Measures how many LLM tokens the TOON (Token-Oriented Object Notation)
//! encoding saves over plain JSON text for a directory of sample files.
//!
//! ## How it works
//!
//! For every `.json` file in the sample directory:
//!
//! 1. The file is parsed into a [`serde_json::Value`]
//! 2. The value is encoded to TOON and the result is tokenized
//! 3. The value is stringified as JSON (the [`Baseline`]) and tokenized
//! 4. The two counts give a difference and an efficiency percentage
//!
//! The rows are printed as a fixed-width table:
//!
//! ```text
//! Index File Name                      JSON Tokens     Toon Tokens     Difference   Efficiency (%)
//! ----------------------------------------------------------------------------------------------------
//! 0     users.json                     9               5               4            44.44
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use toon_bench::{run, BenchOptions, Comparator, TiktokenTokenizer, ToonEncoder};
//!
//! let options = BenchOptions::new().with_data_dir("./data");
//! let tokenizer = TiktokenTokenizer::for_model(&options.model)?;
//! let comparator = Comparator::new(Arc::new(ToonEncoder), Arc::new(tokenizer), options.baseline);
//!
//! let report = run(&options, &comparator)?;
//! print!("{}", report.render());
//! # Ok::<(), toon_bench::Error>(())
//! ```
//!
//! ## Collaborators
//!
//! The TOON encoder and the tokenizer sit behind the [`CompactEncoder`] and
//! [`Tokenizer`] traits. The defaults wrap `serde_toon` and `tiktoken-rs`;
//! anything else that implements the traits can be injected into a
//! [`Comparator`].
//!
//! ## Efficiency
//!
//! `efficiency = (json_tokens - toon_tokens) / json_tokens * 100`, and `0` when
//! the baseline has no tokens. Negative values mean TOON came out larger.
//!
//! ## Failure handling
//!
//! See [`FailurePolicy`]. A missing directory or unreadable file always ends
//! the run; malformed samples are skipped by default and listed after the
//! table.

pub mod bridge;
pub mod compare;
pub mod error;
pub mod loader;
pub mod options;
pub mod report;
pub mod runner;

pub use bridge::{Baseline, BpeEncoding, CompactEncoder, TiktokenTokenizer, Tokenizer, ToonEncoder};
pub use compare::{Comparator, Comparison};
pub use error::{Error, Result};
pub use loader::{list_samples, load_sample};
pub use options::{BenchOptions, FailurePolicy};
pub use report::{build_result, render, ComparisonResult, Report, SkippedFile};
pub use runner::run;
