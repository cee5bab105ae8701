//! Per-line classification rules.

use once_cell::sync::Lazy;
use regex::Regex;

use super::inline::clean_paragraph;
use crate::model::BlockKind;

/// Top-level title line skipped by default; the title page replaces it.
pub const DEFAULT_DOCUMENT_TITLE: &str = "# REQUIREMENT SPECIFICATION DOCUMENT";

const CODE_FENCE: &str = "```";

static RE_ORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.").unwrap());

/// Classification of one trimmed source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// Empty after trimming
    Blank,
    /// Starts with `---`
    Rule,
    /// The literal document title line
    DocumentTitle,
    /// `##`, `###` or `####` heading, as level 1, 2 or 3
    Heading(u8),
    /// Starts and ends with `**`
    BoldLine,
    /// Contains `|`
    TableRow,
    /// Starts with three backticks
    CodeFence,
    /// Starts with `- ` or `* `
    UnorderedItem,
    /// Starts with digits followed by `.`
    OrderedItem,
    /// Plain text
    Paragraph,
    /// Starts with `#` but is no recognised heading
    Unmatched,
}

impl LineKind {
    /// Check if the line produces no output.
    pub fn is_skipped(self) -> bool {
        self.block_kind().is_none()
    }

    /// The block kind emitted for this line, if any.
    pub fn block_kind(self) -> Option<BlockKind> {
        match self {
            LineKind::Heading(level) => Some(BlockKind::Heading { level }),
            LineKind::BoldLine => Some(BlockKind::BoldLine),
            LineKind::TableRow => Some(BlockKind::TableRow),
            LineKind::UnorderedItem => Some(BlockKind::UnorderedItem),
            LineKind::OrderedItem => Some(BlockKind::OrderedItem),
            LineKind::Paragraph => Some(BlockKind::Paragraph),
            LineKind::Blank
            | LineKind::Rule
            | LineKind::DocumentTitle
            | LineKind::CodeFence
            | LineKind::Unmatched => None,
        }
    }

    /// Text written for `line` under this classification.
    ///
    /// `line` is trimmed before the markdown syntax is removed. Returns
    /// `None` for skipped kinds.
    pub fn content_text(self, line: &str) -> Option<String> {
        let line = line.trim();
        let text = match self {
            LineKind::Heading(1) => line.replace("## ", ""),
            LineKind::Heading(2) => line.replace("### ", ""),
            LineKind::Heading(_) => line.replace("#### ", ""),
            LineKind::BoldLine => line.replace("**", ""),
            LineKind::TableRow => line.replace('|', " | "),
            LineKind::UnorderedItem => format!("  {}", line),
            LineKind::OrderedItem => line.to_string(),
            LineKind::Paragraph => clean_paragraph(line),
            _ => return None,
        };
        Some(text)
    }
}

/// Classify a raw source line.
///
/// The first matching rule wins, in this order: skipped lines (blank, `---`,
/// the document title), `## `/`### `/`#### ` headings, bold-only lines,
/// table rows, code fences (skipped), unordered items, ordered items, and
/// finally any line not starting with `#` as a paragraph.
pub fn classify_line(line: &str, document_title: &str) -> LineKind {
    let line = line.trim();

    if line.is_empty() {
        return LineKind::Blank;
    }
    if line.starts_with("---") {
        return LineKind::Rule;
    }
    if line == document_title.trim() {
        return LineKind::DocumentTitle;
    }

    if line.starts_with("## ") {
        LineKind::Heading(1)
    } else if line.starts_with("### ") {
        LineKind::Heading(2)
    } else if line.starts_with("#### ") {
        LineKind::Heading(3)
    } else if line.starts_with("**") && line.ends_with("**") {
        LineKind::BoldLine
    } else if line.contains('|') && !line.starts_with(CODE_FENCE) {
        LineKind::TableRow
    } else if line.starts_with(CODE_FENCE) {
        LineKind::CodeFence
    } else if line.starts_with("- ") || line.starts_with("* ") {
        LineKind::UnorderedItem
    } else if RE_ORDERED_ITEM.is_match(line) {
        LineKind::OrderedItem
    } else if !line.starts_with('#') {
        LineKind::Paragraph
    } else {
        LineKind::Unmatched
    }
}
