//! Markdown source loading and text validation.

use crate::error::{Error, Result};
use crate::model::SourceDocument;
use std::fs;
use std::path::Path;

/// UTF-8 byte order mark.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Read a markdown source file.
///
/// # Arguments
/// * `path` - Path to the markdown file
///
/// # Returns
/// * `Ok(SourceDocument)` with the file's lines
/// * `Err(Error::Io)` if the file is missing or unreadable
/// * `Err(Error::InvalidUtf8)` if the file is not UTF-8 text
///
/// # Example
/// ```no_run
/// use mdreport::source::read_source;
///
/// let doc = read_source("notes.md").unwrap();
/// println!("{} lines", doc.line_count());
/// ```
pub fn read_source<P: AsRef<Path>>(path: P) -> Result<SourceDocument> {
    let path = path.as_ref();
    let data = fs::read(path)?;
    log::info!("Read {} bytes from {}", data.len(), path.display());
    decode_source(&data)
}

/// Decode markdown source bytes.
///
/// A leading UTF-8 byte order mark is dropped. Any invalid UTF-8 sequence
/// rejects the whole input.
pub fn decode_source(data: &[u8]) -> Result<SourceDocument> {
    let text = decode_text(data)?;
    Ok(SourceDocument::from_text(text))
}

/// Validate bytes as UTF-8 text, without the byte order mark.
pub fn decode_text(data: &[u8]) -> Result<&str> {
    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);
    std::str::from_utf8(data).map_err(|e| Error::InvalidUtf8 {
        offset: e.valid_up_to(),
    })
}

/// Check if bytes are usable as markdown source.
pub fn is_text_bytes(data: &[u8]) -> bool {
    decode_text(data).is_ok()
}
