//! # mdreport
//!
//! Render markdown documents into paginated PDF reports.
//!
//! Each source line is classified on its own (headings, bold lines, table
//! rows, list items, paragraphs) and written as one styled, justified block
//! after a generated title page. Every page after the first carries a running
//! header, and every page ends with a centered page number.
//!
//! ## Quick Start
//!
//! ```no_run
//! use mdreport::{convert_file, ReportOptions};
//!
//! fn main() -> mdreport::Result<()> {
//!     let options = ReportOptions::default();
//!     let stats = convert_file("notes.md", "notes.pdf", &options)?;
//!     println!("{} pages", stats.page_count);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Fixed formatting rules**: three heading levels, bold lines, table rows, lists
//! - **Inline cleanup**: links reduced to their text, emphasis markers removed
//! - **Core fonts only**: Helvetica family with WinAnsi encoding, no embedding
//! - **Block dump**: classified blocks as JSON, without producing a PDF

pub mod error;
pub mod model;
pub mod parser;
pub mod pdf;
pub mod render;
pub mod source;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{Block, BlockKind, FontStyle, SourceDocument, TextStyle, TitlePage};
pub use parser::{classify_line, LineKind};
pub use render::{
    render_markdown, to_json, JsonFormat, RenderOutput, RenderStats, ReportOptions,
    ReportRenderer,
};
pub use source::read_source;

use std::fs;
use std::path::Path;

/// Convert a markdown file into a PDF report.
///
/// The whole report is rendered in memory before the output file is
/// created, so a failing input leaves no output behind. An existing output
/// file is overwritten.
///
/// # Arguments
///
/// * `input` - Path to the markdown file
/// * `output` - Path of the PDF to write
/// * `options` - Header title, title page and metadata
///
/// # Example
///
/// ```no_run
/// use mdreport::{convert_file, ReportOptions};
///
/// let options = ReportOptions::new().with_header_title("Team Handbook");
/// let stats = convert_file("handbook.md", "handbook.pdf", &options).unwrap();
/// println!("{} blocks", stats.block_count());
/// ```
pub fn convert_file<P, Q>(input: P, output: Q, options: &ReportOptions) -> Result<RenderStats>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let output = output.as_ref();
    let doc = read_source(input)?;
    let rendered = ReportRenderer::new(options.clone()).render(&doc)?;
    fs::write(output, &rendered.bytes)?;
    log::info!("Wrote {} bytes to {}", rendered.len(), output.display());
    Ok(rendered.stats)
}

/// Convert using the input and output paths stored in `options`.
pub fn convert(options: &ReportOptions) -> Result<RenderStats> {
    convert_file(&options.input_path, &options.output_path, options)
}

/// Classify markdown text into the blocks a report would contain.
///
/// # Example
///
/// ```
/// use mdreport::{classify_document, BlockKind, ReportOptions};
///
/// let blocks = classify_document("## Scope\n---\n- item", &ReportOptions::default());
/// assert_eq!(blocks.len(), 2);
/// assert_eq!(blocks[0].kind, BlockKind::Heading { level: 1 });
/// ```
pub fn classify_document(text: &str, options: &ReportOptions) -> Vec<Block> {
    ReportRenderer::new(options.clone()).blocks(&SourceDocument::from_text(text))
}
