//! Error kinds shared across the pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading, merging, or writing record files.
#[derive(Debug, Error)]
pub enum TabcatError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to parse {path} as JSON: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[error("File {0} does not contain a list of records")]
    Schema(String),

    #[error("{0}")]
    Validation(String),
}

impl TabcatError {
    /// Process exit code for this error kind.
    ///
    /// Usage errors exit with 1 before any work starts; each pipeline
    /// error kind gets its own code so callers can tell failures apart
    /// without parsing stderr.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::FileNotFound(_) => 2,
            Self::Parse { .. } => 3,
            Self::Schema(_) => 4,
            Self::Validation(_) => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TabcatError;
    use std::path::PathBuf;

    #[test]
    fn exit_codes_are_distinct_per_kind() {
        let not_found = TabcatError::FileNotFound(PathBuf::from("missing.json"));
        let schema = TabcatError::Schema("bad.json".to_string());
        let validation = TabcatError::Validation("Filename cannot be empty.".to_string());

        assert_eq!(not_found.exit_code(), 2);
        assert_eq!(schema.exit_code(), 4);
        assert_eq!(validation.exit_code(), 5);
    }

    #[test]
    fn messages_name_the_offending_input() {
        let err = TabcatError::Schema("data/b.json".to_string());
        assert_eq!(err.to_string(), "File data/b.json does not contain a list of records");
    }
}
