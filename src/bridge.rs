//! Adapters over the two external collaborators: the TOON encoder and the
//! tokenizer.
//!
//! Both are reached through traits so the comparison engine never names a
//! concrete crate. The runner builds one encoder and one tokenizer per run and
//! shares them across every sample.
//!
//! ```rust
//! use serde_json::json;
//! use toon_bench::{CompactEncoder, ToonEncoder};
//!
//! let toon = ToonEncoder.encode(&json!({"id": 1})).unwrap();
//! assert!(!toon.contains('{'));
//! ```

use crate::{Error, Result};
use serde_json::Value;
use tiktoken_rs::CoreBPE;

/// Turns a JSON value into its compact textual form.
pub trait CompactEncoder: Send + Sync {
    /// Encodes `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encoding`] if the value cannot be represented.
    fn encode(&self, value: &Value) -> Result<String>;

    /// Reads compact text back into a value.
    ///
    /// Encoders without a decoder keep the default, which always fails.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encoding`] if `text` cannot be decoded.
    fn decode(&self, _text: &str) -> Result<Value> {
        Err(Error::encoding(format!("{} cannot decode", self.name())))
    }

    fn name(&self) -> &str;
}

/// Counts the tokens a model would see for a piece of text.
pub trait Tokenizer: Send + Sync {
    /// Counts the tokens in `text`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Tokenization`] if the text cannot be tokenized.
    fn count_tokens(&self, text: &str) -> Result<usize>;

    fn name(&self) -> &str;
}

/// TOON encoder backed by the `serde_toon` crate's default options.
#[derive(Clone, Copy, Debug, Default)]
pub struct ToonEncoder;

impl CompactEncoder for ToonEncoder {
    fn encode(&self, value: &Value) -> Result<String> {
        serde_toon::to_string(value).map_err(Error::encoding)
    }

    fn decode(&self, text: &str) -> Result<Value> {
        serde_toon::from_str::<Value>(text).map_err(Error::encoding)
    }

    fn name(&self) -> &str {
        "toon"
    }
}

/// The byte-pair encodings shipped with `tiktoken-rs`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BpeEncoding {
    O200kBase,
    Cl100kBase,
    P50kBase,
    R50kBase,
}

/// Model prefixes and the encoding they use, checked in order.
const MODEL_PREFIXES: &[(&str, BpeEncoding)] = &[
    ("gpt-5", BpeEncoding::O200kBase),
    ("gpt-4.1", BpeEncoding::O200kBase),
    ("gpt-4.5", BpeEncoding::O200kBase),
    ("gpt-4o", BpeEncoding::O200kBase),
    ("chatgpt-4o", BpeEncoding::O200kBase),
    ("gpt-oss", BpeEncoding::O200kBase),
    ("o1", BpeEncoding::O200kBase),
    ("o3", BpeEncoding::O200kBase),
    ("o4", BpeEncoding::O200kBase),
    ("gpt-4", BpeEncoding::Cl100kBase),
    ("gpt-3.5", BpeEncoding::Cl100kBase),
    ("gpt-35", BpeEncoding::Cl100kBase),
    ("text-embedding-3", BpeEncoding::Cl100kBase),
    ("text-embedding-ada-002", BpeEncoding::Cl100kBase),
    ("text-davinci-002", BpeEncoding::P50kBase),
    ("text-davinci-003", BpeEncoding::P50kBase),
    ("code-", BpeEncoding::P50kBase),
    ("davinci", BpeEncoding::R50kBase),
    ("curie", BpeEncoding::R50kBase),
    ("babbage", BpeEncoding::R50kBase),
    ("ada", BpeEncoding::R50kBase),
    ("gpt2", BpeEncoding::R50kBase),
];

impl BpeEncoding {
    /// Resolves a model identifier or an encoding name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toon_bench::BpeEncoding;
    ///
    /// assert_eq!(BpeEncoding::for_model("gpt-5"), Some(BpeEncoding::O200kBase));
    /// assert_eq!(BpeEncoding::for_model("gpt-4-turbo"), Some(BpeEncoding::Cl100kBase));
    /// assert_eq!(BpeEncoding::for_model("cl100k_base"), Some(BpeEncoding::Cl100kBase));
    /// assert_eq!(BpeEncoding::for_model("llama-3"), None);
    /// ```
    #[must_use]
    pub fn for_model(model: &str) -> Option<Self> {
        match model {
            "o200k_base" => return Some(BpeEncoding::O200kBase),
            "cl100k_base" => return Some(BpeEncoding::Cl100kBase),
            "p50k_base" => return Some(BpeEncoding::P50kBase),
            "r50k_base" => return Some(BpeEncoding::R50kBase),
            _ => {}
        }
        MODEL_PREFIXES
            .iter()
            .find(|(prefix, _)| model.starts_with(prefix))
            .map(|&(_, encoding)| encoding)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            BpeEncoding::O200kBase => "o200k_base",
            BpeEncoding::Cl100kBase => "cl100k_base",
            BpeEncoding::P50kBase => "p50k_base",
            BpeEncoding::R50kBase => "r50k_base",
        }
    }

    fn load(self) -> Result<CoreBPE> {
        match self {
            BpeEncoding::O200kBase => tiktoken_rs::o200k_base(),
            BpeEncoding::Cl100kBase => tiktoken_rs::cl100k_base(),
            BpeEncoding::P50kBase => tiktoken_rs::p50k_base(),
            BpeEncoding::R50kBase => tiktoken_rs::r50k_base(),
        }
        .map_err(|e| Error::tokenization(format!("failed to load {}: {}", self.as_str(), e)))
    }
}

/// Tokenizer backed by `tiktoken-rs`.
///
/// Building one loads the whole BPE table, so construct it once per run and
/// share it.
pub struct TiktokenTokenizer {
    model: String,
    encoding: BpeEncoding,
    bpe: CoreBPE,
}

impl TiktokenTokenizer {
    /// Builds the tokenizer a model uses.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Tokenization`] for an unknown model or if the encoding
    /// fails to load.
    pub fn for_model(model: &str) -> Result<Self> {
        let encoding = BpeEncoding::for_model(model)
            .ok_or_else(|| Error::tokenization(format!("unknown tokenizer model: {}", model)))?;
        Ok(TiktokenTokenizer {
            model: model.to_string(),
            encoding,
            bpe: encoding.load()?,
        })
    }

    #[must_use]
    pub fn encoding(&self) -> BpeEncoding {
        self.encoding
    }
}

impl Tokenizer for TiktokenTokenizer {
    // Special-token markers in the text are counted as ordinary text.
    fn count_tokens(&self, text: &str) -> Result<usize> {
        Ok(self.bpe.encode_ordinary(text).len())
    }

    fn name(&self) -> &str {
        &self.model
    }
}

/// The JSON text used as the token-count baseline.
///
/// - **Minified**: `serde_json::to_string`, no insignificant whitespace
/// - **Pretty**: `serde_json::to_string_pretty`, two-space indentation
///
/// Both keep object keys in file order.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use toon_bench::Baseline;
///
/// let value = json!({"a": 1, "b": [true, null]});
/// assert_eq!(Baseline::Minified.render(&value).unwrap(), r#"{"a":1,"b":[true,null]}"#);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Baseline {
    #[default]
    Minified,
    Pretty,
}

impl Baseline {
    /// Stringifies `value` the way this baseline measures it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encoding`] if `serde_json` refuses the value.
    pub fn render(self, value: &Value) -> Result<String> {
        match self {
            Baseline::Minified => serde_json::to_string(value),
            Baseline::Pretty => serde_json::to_string_pretty(value),
        }
        .map_err(Error::encoding)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Baseline::Minified => "minified",
            Baseline::Pretty => "pretty",
        }
    }
}
