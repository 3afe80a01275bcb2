//! Input loading: one JSON file to one parsed value.

use anyhow::Result;
use serde_json::Value;
use std::path::Path;

use crate::error::TabcatError;
use crate::utils::read_text;

/// Read and parse a single JSON input file.
///
/// The file must exist; its contents are read fully into memory and parsed
/// in one step. Whether the parsed value is actually a list of records is
/// checked by the caller when merging.
pub fn load_json(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Err(TabcatError::FileNotFound(path.to_path_buf()).into());
    }

    let text = read_text(path)?;
    let value = serde_json::from_str(&text).map_err(|source| TabcatError::Parse {
        path: path.display().to_string(),
        source,
    })?;
    Ok(value)
}
