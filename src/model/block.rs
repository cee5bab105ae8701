//! Content block types.

use super::TextStyle;
use serde::{Deserialize, Serialize};

/// What a content block was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockKind {
    /// Content heading; level 1 comes from `##`, 2 from `###`, 3 from `####`
    Heading {
        /// Heading level (1-3)
        level: u8,
    },

    /// A line made of a single bold span
    BoldLine,

    /// A pipe-delimited row, written as plain text
    TableRow,

    /// A `- ` or `* ` list item
    UnorderedItem,

    /// A `1.` style list item
    OrderedItem,

    /// Any other text line
    Paragraph,
}

impl BlockKind {
    /// Font style and size the block is written with.
    pub fn text_style(self) -> TextStyle {
        match self {
            BlockKind::Heading { level: 1 } => TextStyle::bold(16.0),
            BlockKind::Heading { level: 2 } => TextStyle::bold(14.0),
            BlockKind::Heading { .. } => TextStyle::bold(12.0),
            BlockKind::BoldLine => TextStyle::bold(11.0),
            BlockKind::TableRow => TextStyle::regular(9.0),
            BlockKind::UnorderedItem | BlockKind::OrderedItem | BlockKind::Paragraph => {
                TextStyle::regular(10.0)
            }
        }
    }

    /// Height of one wrapped line, in millimetres.
    pub fn line_height(self) -> f32 {
        match self {
            BlockKind::Heading { level: 1 } => 10.0,
            BlockKind::Heading { level: 2 } => 8.0,
            BlockKind::Heading { .. } => 7.0,
            BlockKind::BoldLine => 6.0,
            _ => 5.0,
        }
    }

    /// Vertical space inserted before and after the block, in millimetres.
    pub fn spacing(self) -> (f32, f32) {
        match self {
            BlockKind::Heading { level: 1 } => (5.0, 3.0),
            BlockKind::Heading { level: 2 } => (3.0, 2.0),
            BlockKind::Heading { .. } => (2.0, 1.0),
            _ => (0.0, 0.0),
        }
    }

    /// Check if this is a heading of any level.
    pub fn is_heading(self) -> bool {
        matches!(self, BlockKind::Heading { .. })
    }

    /// Check if this is a list item of either kind.
    pub fn is_list_item(self) -> bool {
        matches!(self, BlockKind::UnorderedItem | BlockKind::OrderedItem)
    }
}

/// One styled unit of output text, produced from one classified line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Classification of the source line
    pub kind: BlockKind,

    /// Text to write, with markdown syntax already removed
    pub text: String,

    /// Font style and size
    pub style: TextStyle,

    /// Height of each wrapped line (mm)
    pub line_height: f32,

    /// Space before the block (mm)
    pub space_before: f32,

    /// Space after the block (mm)
    pub space_after: f32,
}

impl Block {
    /// Create a block with the fixed formatting of its kind.
    pub fn new(kind: BlockKind, text: impl Into<String>) -> Self {
        let (space_before, space_after) = kind.spacing();
        Self {
            kind,
            text: text.into(),
            style: kind.text_style(),
            line_height: kind.line_height(),
            space_before,
            space_after,
        }
    }

    /// Create a heading block; the level is clamped to 1-3.
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Self::new(
            BlockKind::Heading {
                level: level.clamp(1, 3),
            },
            text,
        )
    }

    /// Check if the block has no visible text.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FontStyle;

    #[test]
    fn test_heading_formatting() {
        let h1 = Block::heading(1, "Introduction");
        assert_eq!(h1.style, TextStyle::bold(16.0));
        assert_eq!(h1.line_height, 10.0);
        assert_eq!((h1.space_before, h1.space_after), (5.0, 3.0));

        let h3 = Block::heading(3, "Detail");
        assert_eq!(h3.style.size, 12.0);
        assert_eq!((h3.space_before, h3.space_after), (2.0, 1.0));
    }

    #[test]
    fn test_heading_level_clamped() {
        assert_eq!(Block::heading(0, "x").kind, BlockKind::Heading { level: 1 });
        assert_eq!(Block::heading(9, "x").kind, BlockKind::Heading { level: 3 });
    }

    #[test]
    fn test_body_blocks_have_no_spacing() {
        for kind in [
            BlockKind::BoldLine,
            BlockKind::TableRow,
            BlockKind::UnorderedItem,
            BlockKind::OrderedItem,
            BlockKind::Paragraph,
        ] {
            assert_eq!(kind.spacing(), (0.0, 0.0));
        }
        assert_eq!(BlockKind::TableRow.text_style().size, 9.0);
        assert_eq!(BlockKind::BoldLine.text_style().font, FontStyle::Bold);
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&BlockKind::Heading { level: 2 }).unwrap();
        assert_eq!(json, r#"{"type":"heading","level":2}"#);
        let json = serde_json::to_string(&BlockKind::UnorderedItem).unwrap();
        assert_eq!(json, r#"{"type":"unordered_item"}"#);
    }
}
