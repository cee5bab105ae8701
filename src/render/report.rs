//! Report rendering: title page followed by one block per source line.

use crate::error::Result;
use crate::model::{Block, SourceDocument, TextStyle, TitlePage};
use crate::parser::classify_line;
use crate::pdf::{Advance, Align, DocumentInfo, PageGeometry, PdfDocument};

use super::{RenderOutput, RenderStats, ReportDecorator, ReportOptions};

const TITLE_STYLE: TextStyle = TextStyle::bold(24.0);
const SUBTITLE_STYLE: TextStyle = TextStyle::bold(18.0);
const METADATA_STYLE: TextStyle = TextStyle::regular(12.0);
const TITLE_ROW_HEIGHT: f32 = 10.0;

/// Render markdown text to PDF bytes.
pub fn render_markdown(text: &str, options: &ReportOptions) -> Result<RenderOutput> {
    let renderer = ReportRenderer::new(options.clone());
    renderer.render(&SourceDocument::from_text(text))
}

/// Renders a source document into a paginated report.
#[derive(Debug, Clone, Default)]
pub struct ReportRenderer {
    options: ReportOptions,
}

impl ReportRenderer {
    /// Create a new report renderer.
    pub fn new(options: ReportOptions) -> Self {
        Self { options }
    }

    /// Options in use.
    pub fn options(&self) -> &ReportOptions {
        &self.options
    }

    /// Classify one raw line and build its block; `None` if the line is
    /// skipped.
    pub fn block_for_line(&self, line: &str) -> Option<Block> {
        let kind = classify_line(line, &self.options.document_title_line);
        let block_kind = kind.block_kind()?;
        let text = kind.content_text(line)?;
        Some(Block::new(block_kind, text))
    }

    /// All blocks of a document, in source order.
    pub fn blocks(&self, doc: &SourceDocument) -> Vec<Block> {
        doc.lines().filter_map(|line| self.block_for_line(line)).collect()
    }

    /// Render the title page and every block, and serialize the PDF.
    pub fn render(&self, doc: &SourceDocument) -> Result<RenderOutput> {
        let info = DocumentInfo {
            title: Some(self.options.title_page.document_title()),
            author: self.options.author.clone(),
            creator: Some(self.options.header_title.clone()),
            ..Default::default()
        };
        let mut pdf = PdfDocument::new(
            PageGeometry::a4(),
            ReportDecorator::new(self.options.header_title.clone()),
        )
        .with_info(info);

        write_title_page(&mut pdf, &self.options.title_page);
        pdf.add_page();

        let mut stats = RenderStats::new();
        for (index, line) in doc.lines().enumerate() {
            match self.block_for_line(line) {
                Some(block) => {
                    log::debug!("line {}: {:?}", index + 1, block.kind);
                    stats.add_block(block.kind);
                    write_block(&mut pdf, &block);
                }
                None => {
                    log::debug!("line {}: skipped", index + 1);
                    stats.add_skipped();
                }
            }
        }
        stats.page_count = pdf.page_count();

        let bytes = pdf.to_bytes()?;
        log::info!(
            "Rendered {} block(s) from {} line(s) onto {} page(s)",
            stats.block_count(),
            stats.line_count,
            stats.page_count
        );
        Ok(RenderOutput::new(bytes, stats))
    }
}

/// Title rows, subtitle rows and the three metadata rows, then a fresh page
/// is left to the caller.
fn write_title_page(pdf: &mut PdfDocument<ReportDecorator>, title_page: &TitlePage) {
    pdf.add_page();

    pdf.set_style(TITLE_STYLE);
    pdf.ln(60.0);
    for line in &title_page.title_lines {
        pdf.cell(0.0, TITLE_ROW_HEIGHT, line, Align::Center, Advance::NextLine);
    }

    pdf.ln(20.0);
    pdf.set_style(SUBTITLE_STYLE);
    for line in &title_page.subtitle_lines {
        pdf.cell(0.0, TITLE_ROW_HEIGHT, line, Align::Center, Advance::NextLine);
    }

    pdf.ln(40.0);
    pdf.set_style(METADATA_STYLE);
    pdf.cell(0.0, TITLE_ROW_HEIGHT, &title_page.program, Align::Center, Advance::NextLine);
    pdf.ln(10.0);
    pdf.cell(0.0, TITLE_ROW_HEIGHT, &title_page.submission_date, Align::Center, Advance::NextLine);
    pdf.cell(0.0, TITLE_ROW_HEIGHT, &title_page.version, Align::Center, Advance::NextLine);
}

fn write_block(pdf: &mut PdfDocument<ReportDecorator>, block: &Block) {
    if block.space_before > 0.0 {
        pdf.ln(block.space_before);
    }
    pdf.set_style(block.style);
    pdf.multi_cell(0.0, block.line_height, &block.text, Align::Justify);
    if block.space_after > 0.0 {
        pdf.ln(block.space_after);
    }
}
