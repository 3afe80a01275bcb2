//! Text decoding with a UTF-8 fast path and locale-encoding fallback.
//!
//! Input files are expected to be UTF-8, but locale-default encodings show
//! up in the wild; those are detected with chardetng and decoded with
//! replacement characters instead of failing the run.

use anyhow::{Context, Result};
use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_16BE, UTF_16LE};
use std::path::Path;

const SAMPLE_BYTES: usize = 8192;

/// Read a text file fully into memory.
///
/// Strict UTF-8 (with optional BOM) is the fast path; anything else goes
/// through BOM sniffing and encoding detection, decoding with replacement.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let without_bom = bytes.strip_prefix(&[0xef, 0xbb, 0xbf][..]).unwrap_or(&bytes);
    if let Ok(text) = std::str::from_utf8(without_bom) {
        return Ok(text.to_string());
    }

    let encoding = detect_encoding(&bytes);
    let (decoded, _, _) = encoding.decode(&bytes);
    Ok(decoded.into_owned())
}

/// Guess the encoding of non-UTF-8 content.
///
/// BOM markers win; otherwise chardetng decides from a leading sample.
fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    if bytes.starts_with(&[0xff, 0xfe]) {
        return UTF_16LE;
    }
    if bytes.starts_with(&[0xfe, 0xff]) {
        return UTF_16BE;
    }

    let sample = &bytes[..bytes.len().min(SAMPLE_BYTES)];
    let mut detector = EncodingDetector::new();
    detector.feed(sample, true);
    detector.guess(None, true)
}

#[cfg(test)]
mod tests {
    use super::read_text;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn reads_plain_utf8() {
        let mut file = NamedTempFile::new().expect("tmp");
        file.write_all("[{\"x\": 1}] 🚀".as_bytes()).expect("write");
        file.flush().expect("flush");

        let text = read_text(file.path()).expect("read");
        assert_eq!(text, "[{\"x\": 1}] 🚀");
    }

    #[test]
    fn strips_utf8_bom() {
        let mut file = NamedTempFile::new().expect("tmp");
        file.write_all(&[0xef, 0xbb, 0xbf]).expect("bom");
        file.write_all(b"[]").expect("write");
        file.flush().expect("flush");

        let text = read_text(file.path()).expect("read");
        assert_eq!(text, "[]");
    }

    #[test]
    fn decodes_non_utf8_with_fallback() {
        let mut file = NamedTempFile::new().expect("tmp");
        // "café" in latin-1: the 0xe9 byte is invalid UTF-8.
        file.write_all(&[b'c', b'a', b'f', 0xe9]).expect("write");
        file.flush().expect("flush");

        let text = read_text(file.path()).expect("read");
        assert_eq!(text, "café");
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = read_text(std::path::Path::new("/nonexistent/input.json"));
        assert!(result.is_err());
    }
}
