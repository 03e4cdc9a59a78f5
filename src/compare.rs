//! Token-count comparison of one value under both representations.
//!
//! A [`Comparator`] owns shared handles to the encoder and tokenizer, so it is
//! cheap to clone and safe to move onto a worker thread.
//!
//! ```rust
//! use std::sync::Arc;
//! use serde_json::{json, Value};
//! use toon_bench::{Baseline, CompactEncoder, Comparator, Result, Tokenizer};
//!
//! struct Bytes;
//! impl Tokenizer for Bytes {
//!     fn count_tokens(&self, text: &str) -> Result<usize> { Ok(text.len()) }
//!     fn name(&self) -> &str { "bytes" }
//! }
//!
//! struct Keys;
//! impl CompactEncoder for Keys {
//!     fn encode(&self, value: &Value) -> Result<String> {
//!         Ok(value.as_object().map(|o| o.keys().cloned().collect()).unwrap_or_default())
//!     }
//!     fn name(&self) -> &str { "keys" }
//! }
//!
//! let comparator = Comparator::new(Arc::new(Keys), Arc::new(Bytes), Baseline::Minified);
//! let comparison = comparator.compare(&json!({"a": 1, "b": 2})).unwrap();
//! assert_eq!(comparison.json_token_count, 13);
//! assert_eq!(comparison.toon_token_count, 2);
//! assert_eq!(comparison.difference, 11);
//! ```

use crate::{Baseline, CompactEncoder, Error, Result, Tokenizer};
use serde_json::Value;
use std::any::Any;
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::trace;

/// Token counts for one value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Comparison {
    pub toon_token_count: usize,
    pub json_token_count: usize,
    /// `json_token_count - toon_token_count`, negative when TOON is larger.
    pub difference: i64,
}

impl Comparison {
    #[must_use]
    pub fn new(json_token_count: usize, toon_token_count: usize) -> Self {
        Comparison {
            toon_token_count,
            json_token_count,
            difference: json_token_count as i64 - toon_token_count as i64,
        }
    }
}

/// Measures values with one encoder, one tokenizer and one baseline.
#[derive(Clone)]
pub struct Comparator {
    encoder: Arc<dyn CompactEncoder>,
    tokenizer: Arc<dyn Tokenizer>,
    baseline: Baseline,
}

impl Comparator {
    #[must_use]
    pub fn new(
        encoder: Arc<dyn CompactEncoder>,
        tokenizer: Arc<dyn Tokenizer>,
        baseline: Baseline,
    ) -> Self {
        Comparator {
            encoder,
            tokenizer,
            baseline,
        }
    }

    #[must_use]
    pub fn baseline(&self) -> Baseline {
        self.baseline
    }

    #[must_use]
    pub fn tokenizer_name(&self) -> &str {
        self.tokenizer.name()
    }

    #[must_use]
    pub fn encoder_name(&self) -> &str {
        self.encoder.name()
    }

    /// Counts tokens for the TOON form and the baseline text of `value`.
    ///
    /// # Errors
    ///
    /// Propagates [`Error::Encoding`] and [`Error::Tokenization`] from the
    /// collaborators.
    pub fn compare(&self, value: &Value) -> Result<Comparison> {
        let toon = self.encoder.encode(value)?;
        let toon_token_count = self.tokenizer.count_tokens(&toon)?;

        let json = self.baseline.render(value)?;
        let json_token_count = self.tokenizer.count_tokens(&json)?;

        trace!(
            toon_bytes = toon.len(),
            json_bytes = json.len(),
            toon_token_count,
            json_token_count,
            "compared value"
        );
        Ok(Comparison::new(json_token_count, toon_token_count))
    }

    /// Like [`compare`](Self::compare), but gives up after `timeout`.
    ///
    /// The comparison runs on a worker thread. If it overruns, the worker is
    /// left to finish on its own and its answer is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Timeout`] on expiry, otherwise whatever `compare`
    /// returns.
    pub fn compare_within(&self, value: Value, timeout: Duration) -> Result<Comparison> {
        let (tx, rx) = mpsc::channel();
        let comparator = self.clone();
        let handle = thread::Builder::new()
            .name("toon-bench-compare".to_string())
            .spawn(move || {
                // The receiver is gone once the caller timed out.
                let _ = tx.send(comparator.compare(&value));
            })
            .map_err(|e| Error::worker(format!("failed to spawn: {}", e)))?;

        match rx.recv_timeout(timeout) {
            Ok(result) => result,
            Err(mpsc::RecvTimeoutError::Timeout) => Err(Error::Timeout(timeout)),
            // The sender only drops unsent when the worker unwinds.
            Err(mpsc::RecvTimeoutError::Disconnected) => match handle.join() {
                Err(payload) => Err(Error::worker(format!(
                    "panicked: {}",
                    panic_message(payload.as_ref())
                ))),
                Ok(()) => Err(Error::worker("exited without a result")),
            },
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg
    } else {
        "unknown panic"
    }
}
