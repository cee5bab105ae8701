//! Minimal paginated PDF writer.
//!
//! Text is laid out by a cursor that moves down the page in millimetres:
//! each cell writes one row of text, and multi-line cells wrap and justify
//! text using the standard Helvetica metrics. Pages break automatically
//! above the bottom margin, calling the [`PageDecorator`] hooks for running
//! headers and footers. The finished page contents are assembled into a
//! `lopdf` document.

mod canvas;
mod document;
pub mod fonts;
mod wrap;

pub use canvas::{Advance, Align, Canvas, PageContent, PageGeometry, PT_PER_MM};
pub use document::{DocumentInfo, NoDecoration, PageDecorator, PdfDocument};
pub use fonts::{encode_win_ansi, CoreFont, EncodedText};
pub use wrap::{wrap_text, WrappedLine};
