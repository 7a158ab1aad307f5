//! Flat-file JSON storage for the two pipeline outputs.
//!
//! Both files are pretty-printed UTF-8 JSON arrays with a trailing
//! newline. This is the only persistent state either stage has.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// Write a full record set, replacing any previous file.
pub fn write_records<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let json = serde_json::to_string_pretty(records).map_err(|source| Error::Json {
        path: path.display().to_string(),
        source,
    })?;
    fs::write(path, json + "\n").map_err(|source| Error::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Load a JSON array of records, each kept as an untyped value so the
/// cleaning stage can drop malformed entries individually.
pub fn load_values(path: &Path) -> Result<Vec<Value>> {
    let raw = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| Error::Json {
        path: path.display().to_string(),
        source,
    })
}
