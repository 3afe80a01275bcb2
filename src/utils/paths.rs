//! Home-relative path expansion and output directory defaults.

use std::path::{Path, PathBuf};

/// Expand a leading `~` component to the user's home directory.
///
/// Paths without the shorthand come back unchanged, as does `~` itself
/// when no home directory can be determined.
pub fn expand_home(path: &Path) -> PathBuf {
    let Some(text) = path.to_str() else {
        return path.to_path_buf();
    };

    if text == "~" {
        return dirs::home_dir().unwrap_or_else(|| path.to_path_buf());
    }
    if let Some(rest) = text.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }

    path.to_path_buf()
}

/// Default directory for written tables: the user's documents directory,
/// falling back to `~/Documents` and finally the current directory.
pub fn default_output_dir() -> PathBuf {
    if let Some(docs) = dirs::document_dir() {
        return docs;
    }
    if let Some(home) = dirs::home_dir() {
        return home.join("Documents");
    }
    PathBuf::from(".")
}

/// Make `path` absolute without requiring it to exist yet.
pub fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(_) => path.to_path_buf(),
        }
    }
}
