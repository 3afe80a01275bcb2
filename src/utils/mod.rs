//! Shared helpers: text decoding and path handling.

pub mod encoding;
pub mod paths;

pub use encoding::read_text;
pub use paths::{absolutize, default_output_dir, expand_home};
