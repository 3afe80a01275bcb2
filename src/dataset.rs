//! The in-memory table: an ordered sequence of flat records.

use serde_json::{Map, Value};
use std::collections::HashSet;
use std::path::Path;

use crate::error::TabcatError;
use crate::ingest::load_json;

/// One row: field names mapped to scalar or simple-array JSON values.
pub type Record = Map<String, Value>;

/// Records accumulated across all input files, in append order, together
/// with the union of their field names in first-seen order.
#[derive(Debug, Default)]
pub struct Dataset {
    records: Vec<Record>,
    columns: Vec<String>,
    seen: HashSet<String>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `path` and append its records.
    ///
    /// The file's top-level value must be an array of objects; the error
    /// names the offending file. All rows of a file are validated before
    /// any of them land in the dataset. Returns the number of rows added.
    pub fn append_file(&mut self, path: &Path) -> anyhow::Result<usize> {
        let value = load_json(path)?;
        let Value::Array(items) = value else {
            return Err(TabcatError::Schema(path.display().to_string()).into());
        };

        let mut batch = Vec::with_capacity(items.len());
        for item in items {
            let Value::Object(record) = item else {
                return Err(TabcatError::Schema(path.display().to_string()).into());
            };
            batch.push(record);
        }

        let appended = batch.len();
        for record in batch {
            for key in record.keys() {
                if self.seen.insert(key.clone()) {
                    self.columns.push(key.clone());
                }
            }
            self.records.push(record);
        }
        Ok(appended)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Union of field names across all records, in first-seen order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
