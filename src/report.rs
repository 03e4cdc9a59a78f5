//! Per-file results and the fixed-width report table.
//!
//! ```rust
//! use toon_bench::{build_result, render, Comparison};
//!
//! let result = build_result("users.json", Comparison::new(9, 5));
//! assert_eq!(result.difference, 4);
//! assert!((result.efficiency - 44.444_444_444).abs() < 1e-6);
//!
//! let table = render(&[result]);
//! assert_eq!(table.lines().count(), 3);
//! ```

use crate::Comparison;
use serde::Serialize;
use std::fmt::Write;

const SEPARATOR_WIDTH: usize = 100;

/// One row of the report.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub file_name: String,
    pub json_token_count: usize,
    pub toon_token_count: usize,
    /// `json_token_count - toon_token_count`.
    pub difference: i64,
    /// `difference` as a percentage of `json_token_count`, or `0.0` when the
    /// baseline has no tokens.
    pub efficiency: f64,
}

/// Attaches a file name to a comparison and derives its efficiency.
#[must_use]
pub fn build_result<S: Into<String>>(file_name: S, comparison: Comparison) -> ComparisonResult {
    let efficiency = if comparison.json_token_count > 0 {
        (comparison.difference as f64 / comparison.json_token_count as f64) * 100.0
    } else {
        0.0
    };
    ComparisonResult {
        file_name: file_name.into(),
        json_token_count: comparison.json_token_count,
        toon_token_count: comparison.toon_token_count,
        difference: comparison.difference,
        efficiency,
    }
}

/// Renders results as a table, one row per result in the given order.
///
/// Every line, including the last, ends with `\n`.
#[must_use]
pub fn render(results: &[ComparisonResult]) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        "{:<5} {:<30} {:<15} {:<15} {:<12} {:<15}",
        "Index", "File Name", "JSON Tokens", "Toon Tokens", "Difference", "Efficiency (%)"
    );
    let _ = writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH));
    for (i, result) in results.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:<5} {:<30} {:<15} {:<15} {:<12} {:.2}",
            i,
            result.file_name,
            result.json_token_count,
            result.toon_token_count,
            result.difference,
            result.efficiency
        );
    }
    out
}

/// A sample left out of the table and why.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    pub file_name: String,
    pub reason: String,
}

/// Everything one run produced.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Report {
    pub results: Vec<ComparisonResult>,
    pub skipped: Vec<SkippedFile>,
}

impl Report {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the result table.
    #[must_use]
    pub fn render(&self) -> String {
        render(&self.results)
    }

    /// Lists skipped files, or `None` if every sample made it into the table.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toon_bench::{Report, SkippedFile};
    ///
    /// let mut report = Report::new();
    /// assert!(report.render_skipped().is_none());
    ///
    /// report.skipped.push(SkippedFile {
    ///     file_name: "bad.json".to_string(),
    ///     reason: "trailing comma".to_string(),
    /// });
    /// assert_eq!(
    ///     report.render_skipped().unwrap(),
    ///     "Skipped 1 file(s):\n  bad.json: trailing comma\n"
    /// );
    /// ```
    #[must_use]
    pub fn render_skipped(&self) -> Option<String> {
        if self.skipped.is_empty() {
            return None;
        }
        let mut out = format!("Skipped {} file(s):\n", self.skipped.len());
        for skipped in &self.skipped {
            let _ = writeln!(out, "  {}: {}", skipped.file_name, skipped.reason);
        }
        Some(out)
    }

    /// Sum of `difference` over all rows.
    #[must_use]
    pub fn total_difference(&self) -> i64 {
        self.results.iter().map(|r| r.difference).sum()
    }
}
