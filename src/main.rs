//! tabcat: concatenate JSON record files into a single typed CSV table.
//!
//! Reads one or more JSON files that each hold an array of flat records,
//! merges them in argument order, and writes the combined table as CSV
//! with each column narrowed to the smallest type that holds its values.

use std::process::ExitCode;

mod cli;
mod config;
mod dataset;
mod error;
mod export;
mod infer;
mod ingest;
mod utils;

fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("An error occurred: {err}");
            let code = err
                .downcast_ref::<error::TabcatError>()
                .map(error::TabcatError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}
