//! Inline markdown cleanup for paragraph text.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static RE_LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").unwrap());

/// Replace every `[text](url)` with `text`.
pub fn rewrite_links(text: &str) -> Cow<'_, str> {
    RE_LINK.replace_all(text, "$1")
}

/// Remove bold (`**`) and then italic (`*`) markers.
///
/// Markers are removed wherever they appear; they are not checked for
/// balance.
pub fn strip_emphasis(text: &str) -> String {
    text.replace("**", "").replace('*', "")
}

/// Paragraph text as written: links rewritten, then emphasis stripped.
pub fn clean_paragraph(text: &str) -> String {
    strip_emphasis(&rewrite_links(text))
}
