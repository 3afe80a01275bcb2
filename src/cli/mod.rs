//! Command-line interface for tabcat
//!
//! One flat command: JSON inputs as positional arguments, with optional
//! flags replacing the interactive filename prompt for automation.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod prompt;

use crate::config::{load_config, merge_cli_with_config, CliOverrides};
use crate::dataset::Dataset;
use crate::export::write_csv;

/// Concatenate JSON record files into a single typed CSV table
#[derive(Parser)]
#[command(name = "tabcat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON input files, each holding an array of flat records
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Output filename (skips the interactive prompt)
    #[arg(short, long, value_name = "NAME")]
    output: Option<String>,

    /// Directory the CSV is written into (supports a leading '~')
    #[arg(short = 'd', long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Path to config file (tabcat.toml or .tabcat.yml)
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Wire verbose flag to the tracing log level.
    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    if cli.files.is_empty() {
        eprintln!("Usage: tabcat <file1.json> [file2.json ...]");
        eprintln!("Run 'tabcat --help' for options.");
        std::process::exit(1);
    }

    let cwd = std::env::current_dir()?;
    let file_config = load_config(&cwd, cli.config.as_deref())?;
    let config = merge_cli_with_config(
        file_config,
        CliOverrides { output: cli.output.clone(), output_dir: cli.output_dir.clone() },
    );

    let mut dataset = Dataset::new();
    for path in &cli.files {
        println!("Loading data from: {}", path.display());
        let appended = dataset.append_file(path)?;
        tracing::debug!(rows = appended, file = %path.display(), "file merged");
    }

    let filename = match config.output {
        Some(name) => name,
        None => prompt::prompt_filename()?,
    };

    let saved = write_csv(&dataset, &filename, &config.output_dir)?;

    println!();
    println!("CSV written to: {}", saved.display());
    println!();
    println!("Statistics:");
    println!("  Input files: {}", cli.files.len());
    println!("  Rows:        {}", dataset.len());
    println!("  Columns:     {}", dataset.columns().len());

    Ok(())
}
