//! Loading the input report.

use std::fs;
use std::path::Path;

use crate::error::{Result, SplitterError};

/// Read a report file into memory.
///
/// The whole file is read at once. Bytes that are not valid UTF-8 are
/// dropped without error, and `\r\n` and lone `\r` line endings are
/// turned into `\n`.
pub fn read_input(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| SplitterError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;

    let text = decode_lossy(&bytes);
    if text.len() != bytes.len() {
        tracing::debug!(
            path = %path.display(),
            dropped = bytes.len() - text.len(),
            "Dropped invalid UTF-8 bytes from input"
        );
    }

    Ok(normalize_newlines(&text))
}

/// Convert `\r\n` and lone `\r` line endings to `\n`.
///
/// # Examples
/// ```
/// use section_splitter::input::normalize_newlines;
///
/// assert_eq!(normalize_newlines("a\r\nb\rc\n"), "a\nb\nc\n");
/// ```
pub fn normalize_newlines(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Decode bytes as UTF-8, skipping invalid sequences.
///
/// Unlike [`String::from_utf8_lossy`] no replacement character is inserted.
///
/// # Examples
/// ```
/// use section_splitter::input::decode_lossy;
///
/// assert_eq!(decode_lossy(b"caf\xc3\xa9"), "café");
/// assert_eq!(decode_lossy(b"ab\xffcd"), "abcd");
/// ```
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}
