//! Drives one benchmark run over a sample directory.

use crate::{
    build_result, list_samples, load_sample, BenchOptions, Comparator, ComparisonResult,
    FailurePolicy, Report, Result, SkippedFile,
};
use tracing::{debug, info, warn};

/// Compares every sample in `options.data_dir` and collects the report.
///
/// Files are processed one after another, sorted by name unless
/// `options.sort_files` is off. Under [`FailurePolicy::Skip`] a file that fails
/// to parse, encode, tokenize or finish in time is recorded in
/// [`Report::skipped`]; under [`FailurePolicy::Abort`] the first such failure
/// is returned.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if the directory or a file cannot be read, and any
/// per-file error under [`FailurePolicy::Abort`].
pub fn run(options: &BenchOptions, comparator: &Comparator) -> Result<Report> {
    let mut files = list_samples(&options.data_dir, &options.extension)?;
    if options.sort_files {
        files.sort();
    }
    info!(
        dir = %options.data_dir.display(),
        files = files.len(),
        encoder = comparator.encoder_name(),
        tokenizer = comparator.tokenizer_name(),
        baseline = comparator.baseline().as_str(),
        "starting comparison"
    );

    let mut report = Report::new();
    for file_name in files {
        match compare_file(options, comparator, &file_name) {
            Ok(result) => {
                debug!(
                    file = %file_name,
                    json = result.json_token_count,
                    toon = result.toon_token_count,
                    "compared sample"
                );
                report.results.push(result);
            }
            Err(err) if options.failure_policy == FailurePolicy::Skip && err.is_per_file() => {
                warn!(file = %file_name, error = %err, "skipping sample");
                report.skipped.push(SkippedFile {
                    file_name,
                    reason: err.to_string(),
                });
            }
            Err(err) => return Err(err),
        }
    }

    info!(
        compared = report.results.len(),
        skipped = report.skipped.len(),
        saved = report.total_difference(),
        "comparison finished"
    );
    Ok(report)
}

fn compare_file(
    options: &BenchOptions,
    comparator: &Comparator,
    file_name: &str,
) -> Result<ComparisonResult> {
    let value = load_sample(options.data_dir.join(file_name))?;
    let comparison = match options.timeout {
        Some(timeout) => comparator.compare_within(value, timeout)?,
        None => comparator.compare(&value)?,
    };
    Ok(build_result(file_name, comparison))
}
