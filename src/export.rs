//! CSV serialization of the merged dataset.

use anyhow::{Context, Result};
use csv::WriterBuilder;
use std::path::{Path, PathBuf};

use crate::dataset::Dataset;
use crate::error::TabcatError;
use crate::infer::{infer_columns, render_value};
use crate::utils::{absolutize, expand_home};

/// Write the dataset as comma-separated values under `output_dir`.
///
/// The filename must carry a `.csv` extension; a leading `~` in the output
/// directory expands to the user's home. The directory is created when
/// missing and an existing file at the target path is overwritten without
/// warning. Returns the absolute path written.
pub fn write_csv(dataset: &Dataset, filename: &str, output_dir: &Path) -> Result<PathBuf> {
    if !filename.ends_with(".csv") {
        return Err(
            TabcatError::Validation("Filename must have a .csv extension.".to_string()).into()
        );
    }

    let dir = expand_home(output_dir);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    let path = absolutize(&dir.join(filename));

    let specs = infer_columns(dataset);
    for spec in &specs {
        tracing::debug!(column = %spec.name, ty = spec.ty.name(), "column narrowed");
    }

    let mut writer = WriterBuilder::new()
        .delimiter(b',')
        .from_path(&path)
        .with_context(|| format!("Failed to open {} for writing", path.display()))?;

    // No columns means no header line; the file is still created so the
    // caller gets a real path back.
    if specs.is_empty() {
        writer.flush().with_context(|| format!("Failed to write {}", path.display()))?;
        return Ok(path);
    }

    writer.write_record(specs.iter().map(|spec| spec.name.as_str()))?;
    for record in dataset.records() {
        let row = specs.iter().map(|spec| render_value(record.get(&spec.name), spec.ty));
        writer.write_record(row)?;
    }
    writer.flush().with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path)
}
