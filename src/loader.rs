//! Sample discovery and parsing.

use crate::{Error, Result};
use serde_json::Value;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// Lists the entries of `dir` whose names end with `extension`.
///
/// Names come back in the order the filesystem yields them; callers that need
/// a stable order sort them. Entries whose names are not valid UTF-8 are
/// ignored.
///
/// # Errors
///
/// Returns [`Error::Io`] if the directory cannot be read.
pub fn list_samples<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<String>> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        match entry.file_name().into_string() {
            Ok(name) if name.ends_with(extension) => names.push(name),
            Ok(_) => {}
            Err(name) => debug!(?name, "ignoring non UTF-8 file name"),
        }
    }
    Ok(names)
}

/// Reads and parses one sample file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or read and
/// [`Error::InvalidInput`] if it is not well-formed JSON.
pub fn load_sample<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        if e.is_io() {
            Error::io(path, e)
        } else {
            Error::invalid_input(path, e)
        }
    })
}
