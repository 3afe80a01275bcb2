//! CLI-over-config precedence.

use std::path::PathBuf;

use super::Config;

/// Values supplied on the command line; `None` leaves the config value.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub output: Option<String>,
    pub output_dir: Option<PathBuf>,
}

pub fn merge_cli_with_config(file: Config, cli: CliOverrides) -> Config {
    Config {
        output_dir: cli.output_dir.unwrap_or(file.output_dir),
        output: cli.output.or(file.output),
    }
}
