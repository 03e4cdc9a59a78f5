//! Prints the TOON vs JSON token comparison for every sample in `./data`.
//!
//! Run with: cargo run --bin toon-bench
//!
//! Diagnostics go to stderr; set `RUST_LOG=toon_bench=debug` for per-file
//! detail.

use anyhow::{Context, Result};
use std::sync::Arc;
use toon_bench::{run, BenchOptions, Comparator, TiktokenTokenizer, ToonEncoder};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let options = BenchOptions::new();
    let tokenizer = TiktokenTokenizer::for_model(&options.model)
        .with_context(|| format!("failed to load tokenizer for {}", options.model))?;
    let comparator = Comparator::new(Arc::new(ToonEncoder), Arc::new(tokenizer), options.baseline);

    let report = run(&options, &comparator)
        .with_context(|| format!("failed to compare samples in {}", options.data_dir.display()))?;

    print!("{}", report.render());
    if let Some(skipped) = report.render_skipped() {
        print!("\n{}", skipped);
    }
    Ok(())
}
