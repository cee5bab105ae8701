//! Running header and page footer of reports.

use crate::model::TextStyle;
use crate::pdf::{Advance, Align, Canvas, PageDecorator};

const DECORATION_STYLE: TextStyle = TextStyle::italic(8.0);
const ROW_HEIGHT: f32 = 10.0;
const HEADER_GAP: f32 = 15.0;
const FOOTER_OFFSET: f32 = -15.0;

/// Header with the report title and page number on every page but the
/// first, and a centered page number footer on every page.
#[derive(Debug, Clone)]
pub struct ReportDecorator {
    header_title: String,
}

impl ReportDecorator {
    /// Create a decorator showing `header_title` in the running header.
    pub fn new(header_title: impl Into<String>) -> Self {
        Self {
            header_title: header_title.into(),
        }
    }

    /// Text shown on the left of the running header.
    pub fn header_title(&self) -> &str {
        &self.header_title
    }
}

/// Footer and header page label.
pub fn page_label(page_no: u32) -> String {
    format!("Page {}", page_no)
}

impl PageDecorator for ReportDecorator {
    fn header(&self, canvas: &mut Canvas, page_no: u32) {
        if page_no <= 1 {
            return;
        }
        canvas.set_style(DECORATION_STYLE);
        canvas.cell(0.0, ROW_HEIGHT, &self.header_title, Align::Left, Advance::Right);
        canvas.cell(0.0, ROW_HEIGHT, &page_label(page_no), Align::Right, Advance::Right);
        canvas.ln(HEADER_GAP);
    }

    fn footer(&self, canvas: &mut Canvas, page_no: u32) {
        canvas.set_y(FOOTER_OFFSET);
        canvas.set_style(DECORATION_STYLE);
        canvas.cell(0.0, ROW_HEIGHT, &page_label(page_no), Align::Center, Advance::Right);
    }
}
