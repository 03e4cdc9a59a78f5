use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use toon_bench::{
    render, run, Baseline, BenchOptions, CompactEncoder, Comparator, Error, FailurePolicy, Result,
    TiktokenTokenizer, Tokenizer, ToonEncoder,
};

/// Counts whitespace-separated words.
struct Words;

impl Tokenizer for Words {
    fn count_tokens(&self, text: &str) -> Result<usize> {
        Ok(text.split_whitespace().count())
    }

    fn name(&self) -> &str {
        "words"
    }
}

/// One word per top-level key or element.
struct OneWordPerEntry;

impl CompactEncoder for OneWordPerEntry {
    fn encode(&self, value: &Value) -> Result<String> {
        let n = match value {
            Value::Object(map) => map.len(),
            Value::Array(items) => items.len(),
            _ => 1,
        };
        Ok(vec!["x"; n].join(" "))
    }

    fn name(&self) -> &str {
        "one-word-per-entry"
    }
}

fn write_samples(dir: &Path, samples: &[(&str, &str)]) {
    for (name, contents) in samples {
        fs::write(dir.join(name), contents).unwrap();
    }
}

fn fake_comparator() -> Comparator {
    Comparator::new(Arc::new(OneWordPerEntry), Arc::new(Words), Baseline::Pretty)
}

#[test]
fn test_end_to_end_with_fakes() {
    let dir = tempfile::tempdir().unwrap();
    write_samples(
        dir.path(),
        &[
            ("pair.json", r#"{"a": 1, "b": 2}"#),
            ("empty.json", "{}"),
            ("notes.md", "# not a sample"),
        ],
    );

    let options = BenchOptions::new().with_data_dir(dir.path());
    let report = run(&options, &fake_comparator()).unwrap();

    assert_eq!(report.results.len(), 2);
    assert!(report.skipped.is_empty());

    // Sorted by name: empty.json first.
    let empty = &report.results[0];
    assert_eq!(empty.file_name, "empty.json");
    assert_eq!(empty.json_token_count, 1);
    assert_eq!(empty.toon_token_count, 0);
    assert!((empty.efficiency - 100.0).abs() < 1e-9);

    let pair = &report.results[1];
    assert_eq!(pair.file_name, "pair.json");
    assert_eq!(pair.json_token_count, 6);
    assert_eq!(pair.toon_token_count, 2);
    assert_eq!(pair.difference, 4);

    let table = report.render();
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[2].starts_with("0     empty.json"));
    assert!(lines[3].starts_with("1     pair.json"));
    assert!(lines[3].ends_with("66.67"));
}

#[test]
fn test_empty_directory_renders_header_only() {
    let dir = tempfile::tempdir().unwrap();
    let options = BenchOptions::new().with_data_dir(dir.path());
    let report = run(&options, &fake_comparator()).unwrap();

    assert!(report.results.is_empty());
    let table = report.render();
    assert_eq!(table, render(&[]));
    assert_eq!(table.lines().count(), 2);
    assert!(table.lines().next().unwrap().starts_with("Index File Name"));
    assert_eq!(table.lines().nth(1).unwrap(), "-".repeat(100));
    assert!(report.render_skipped().is_none());
}

#[test]
fn test_invalid_json_aborts_run() {
    let dir = tempfile::tempdir().unwrap();
    write_samples(
        dir.path(),
        &[("a_good.json", "[1, 2, 3]"), ("b_bad.json", "{\"a\": 1,}")],
    );

    let options = BenchOptions::new()
        .with_data_dir(dir.path())
        .with_failure_policy(FailurePolicy::Abort);
    let err = run(&options, &fake_comparator()).unwrap_err();
    match err {
        Error::InvalidInput { path, .. } => assert!(path.ends_with("b_bad.json")),
        other => panic!("expected invalid input, got {:?}", other),
    }
}

#[test]
fn test_invalid_json_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    write_samples(
        dir.path(),
        &[
            ("a_good.json", "[1, 2, 3]"),
            ("b_bad.json", "not json"),
            ("c_good.json", r#"{"k": "v"}"#),
        ],
    );

    let options = BenchOptions::new().with_data_dir(dir.path());
    let report = run(&options, &fake_comparator()).unwrap();

    let names: Vec<&str> = report.results.iter().map(|r| r.file_name.as_str()).collect();
    assert_eq!(names, vec!["a_good.json", "c_good.json"]);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].file_name, "b_bad.json");

    let summary = report.render_skipped().unwrap();
    assert!(summary.starts_with("Skipped 1 file(s):\n  b_bad.json: Invalid JSON"));
}

#[test]
fn test_custom_extension() {
    let dir = tempfile::tempdir().unwrap();
    write_samples(
        dir.path(),
        &[("one.sample", "[1]"), ("two.json", "[1, 2]")],
    );

    let options = BenchOptions::new()
        .with_data_dir(dir.path())
        .with_extension(".sample");
    let report = run(&options, &fake_comparator()).unwrap();
    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results[0].file_name, "one.sample");
}

#[test]
fn test_unsorted_run_keeps_every_file() {
    let dir = tempfile::tempdir().unwrap();
    write_samples(
        dir.path(),
        &[("z.json", "1"), ("m.json", "2"), ("a.json", "3")],
    );

    let options = BenchOptions::new().with_data_dir(dir.path()).unsorted();
    let report = run(&options, &fake_comparator()).unwrap();

    let mut names: Vec<&str> = report.results.iter().map(|r| r.file_name.as_str()).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["a.json", "m.json", "z.json"]);
}

#[test]
fn test_real_collaborators() {
    let dir = tempfile::tempdir().unwrap();
    let users = json!({
        "users": [
            {"id": 1, "name": "Alice", "email": "alice@example.com", "active": true},
            {"id": 2, "name": "Bob", "email": "bob@example.com", "active": true},
            {"id": 3, "name": "Charlie", "email": "charlie@example.com", "active": false},
            {"id": 4, "name": "Dana", "email": "dana@example.com", "active": true}
        ]
    });
    fs::write(
        dir.path().join("users.json"),
        serde_json::to_string_pretty(&users).unwrap(),
    )
    .unwrap();

    let options = BenchOptions::new().with_data_dir(dir.path());
    let tokenizer = TiktokenTokenizer::for_model(&options.model).unwrap();
    let comparator = Comparator::new(Arc::new(ToonEncoder), Arc::new(tokenizer), options.baseline);

    let first = run(&options, &comparator).unwrap();
    let second = run(&options, &comparator).unwrap();
    assert_eq!(first, second);

    let result = &first.results[0];
    assert!(result.json_token_count > 0);
    assert!(result.toon_token_count > 0);
    assert!(result.difference > 0, "tabular data should shrink: {:?}", result);
}
