//! Configuration loading and merging
//!
//! Settings come from an optional config file and CLI arguments, with
//! precedence CLI > file > defaults.

pub mod loader;
pub mod merge;

pub use loader::load_config;
pub use merge::{merge_cli_with_config, CliOverrides};

use serde::Deserialize;
use std::path::PathBuf;

/// Resolved settings for one conversion run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory the CSV is written into. Supports a leading `~`.
    pub output_dir: PathBuf,

    /// Output filename. Normally supplied on the command line or at the
    /// prompt, but can be fixed here for unattended runs.
    pub output: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self { output_dir: crate::utils::default_output_dir(), output: None }
    }
}
