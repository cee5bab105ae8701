//! Rendering result with statistics.

use crate::model::BlockKind;
use serde::{Deserialize, Serialize};

/// A rendered report: PDF bytes plus what went into them.
#[derive(Debug, Clone)]
pub struct RenderOutput {
    /// Serialized PDF
    pub bytes: Vec<u8>,

    /// Rendering statistics
    pub stats: RenderStats,
}

impl RenderOutput {
    /// Create a new render output.
    pub fn new(bytes: Vec<u8>, stats: RenderStats) -> Self {
        Self { bytes, stats }
    }

    /// Size of the PDF in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if no bytes were produced.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Statistics collected during a rendering pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Physical source lines read
    pub line_count: u32,

    /// Lines that produced no block
    pub skipped_lines: u32,

    /// Heading blocks, all levels
    pub heading_count: u32,

    /// Bold-only line blocks
    pub bold_line_count: u32,

    /// Table row blocks
    pub table_row_count: u32,

    /// List item blocks, ordered and unordered
    pub list_item_count: u32,

    /// Paragraph blocks
    pub paragraph_count: u32,

    /// Pages in the output, title page included
    pub page_count: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a line that produced no block.
    pub fn add_skipped(&mut self) {
        self.line_count += 1;
        self.skipped_lines += 1;
    }

    /// Count a line that produced a block of `kind`.
    pub fn add_block(&mut self, kind: BlockKind) {
        self.line_count += 1;
        match kind {
            BlockKind::Heading { .. } => self.heading_count += 1,
            BlockKind::BoldLine => self.bold_line_count += 1,
            BlockKind::TableRow => self.table_row_count += 1,
            BlockKind::UnorderedItem | BlockKind::OrderedItem => self.list_item_count += 1,
            BlockKind::Paragraph => self.paragraph_count += 1,
        }
    }

    /// Total blocks emitted.
    pub fn block_count(&self) -> u32 {
        self.line_count - self.skipped_lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_stats_counts() {
        let mut stats = RenderStats::new();
        stats.add_block(BlockKind::Heading { level: 2 });
        stats.add_block(BlockKind::UnorderedItem);
        stats.add_block(BlockKind::OrderedItem);
        stats.add_skipped();

        assert_eq!(stats.line_count, 4);
        assert_eq!(stats.skipped_lines, 1);
        assert_eq!(stats.heading_count, 1);
        assert_eq!(stats.list_item_count, 2);
        assert_eq!(stats.block_count(), 3);
    }

    #[test]
    fn test_render_output_len() {
        let output = RenderOutput::new(b"%PDF-1.4".to_vec(), RenderStats::default());
        assert_eq!(output.len(), 8);
        assert!(!output.is_empty());
    }
}
