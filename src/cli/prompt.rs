//! Interactive output filename prompt.

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use std::io::{BufRead, IsTerminal};

use crate::error::TabcatError;

/// Ask for the output filename on standard input.
///
/// On a terminal this is a themed prompt; otherwise one raw line is read
/// so piped invocations keep working. The trimmed name must be non-empty
/// and no default is offered.
pub fn prompt_filename() -> Result<String> {
    let raw = if std::io::stdin().is_terminal() {
        Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt("Enter the filename (e.g. 'data.csv')")
            .allow_empty(true)
            .interact_text()?
    } else {
        let mut line = String::new();
        std::io::stdin().lock().read_line(&mut line)?;
        line
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TabcatError::Validation("Filename cannot be empty.".to_string()).into());
    }
    Ok(trimmed.to_string())
}
