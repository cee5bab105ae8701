//! Page geometry and the render cursor.

use std::collections::BTreeSet;

use lopdf::content::Operation;
use lopdf::Object;

use super::fonts::{encode_win_ansi, CoreFont};
use crate::model::TextStyle;

/// Points per millimetre.
pub const PT_PER_MM: f32 = 72.0 / 25.4;

/// Page size and margins, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    /// Page width
    pub width: f32,
    /// Page height
    pub height: f32,
    /// Left margin
    pub left_margin: f32,
    /// Top margin
    pub top_margin: f32,
    /// Right margin
    pub right_margin: f32,
    /// Distance from the bottom edge at which content breaks to a new page
    pub bottom_margin: f32,
    /// Horizontal padding inside a cell
    pub cell_margin: f32,
}

impl PageGeometry {
    /// A4 portrait with 10mm margins and a 15mm page-break margin.
    pub fn a4() -> Self {
        Self {
            width: 210.0,
            height: 297.0,
            left_margin: 10.0,
            top_margin: 10.0,
            right_margin: 10.0,
            bottom_margin: 15.0,
            cell_margin: 1.0,
        }
    }

    /// Set the bottom (page-break) margin.
    pub fn with_bottom_margin(mut self, margin: f32) -> Self {
        self.bottom_margin = margin;
        self
    }

    /// Vertical position past which content cells break to a new page.
    pub fn break_trigger(&self) -> f32 {
        self.height - self.bottom_margin
    }

    /// Width between the left and right margins.
    pub fn text_width(&self) -> f32 {
        self.width - self.left_margin - self.right_margin
    }

    /// MediaBox in points.
    pub fn media_box(&self) -> [f32; 4] {
        [0.0, 0.0, self.width * PT_PER_MM, self.height * PT_PER_MM]
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}

/// Horizontal placement of text within a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Flush left
    #[default]
    Left,
    /// Centered
    Center,
    /// Flush right
    Right,
    /// Flush left, with word spacing stretched by multi-line cells
    Justify,
}

/// Where the cursor goes after a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// To the right edge of the cell, same row
    Right,
    /// To the left margin of the next row
    NextLine,
    /// Below the cell, same x
    Below,
}

/// Content of one page.
#[derive(Debug, Clone, Default)]
pub struct PageContent {
    /// Content stream operations in drawing order
    pub operations: Vec<Operation>,
}

/// The render cursor: current page, position and font.
///
/// Drawing on a canvas never breaks pages; automatic page breaks are the
/// job of [`super::PdfDocument`], which is why header and footer hooks
/// receive a bare canvas.
#[derive(Debug, Clone)]
pub struct Canvas {
    geometry: PageGeometry,
    pages: Vec<PageContent>,
    x: f32,
    y: f32,
    style: TextStyle,
    used_fonts: BTreeSet<CoreFont>,
    replaced_chars: usize,
}

impl Canvas {
    /// Create an empty canvas with no pages.
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            pages: Vec::new(),
            x: geometry.left_margin,
            y: geometry.top_margin,
            style: TextStyle::default(),
            used_fonts: BTreeSet::new(),
            replaced_chars: 0,
        }
    }

    /// Page geometry.
    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Current page number (1-indexed); 0 before the first page.
    pub fn page_no(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Start a new page with the cursor at the top-left margin.
    pub fn begin_page(&mut self) {
        self.pages.push(PageContent::default());
        self.x = self.geometry.left_margin;
        self.y = self.geometry.top_margin;
    }

    /// Current font style and size.
    pub fn style(&self) -> TextStyle {
        self.style
    }

    /// Set the font for following text.
    pub fn set_style(&mut self, style: TextStyle) {
        self.style = style;
    }

    /// Horizontal cursor position.
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Vertical cursor position.
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Move the cursor horizontally.
    pub fn set_x(&mut self, x: f32) {
        self.x = if x >= 0.0 { x } else { self.geometry.width + x };
    }

    /// Move the cursor to a row and back to the left margin.
    ///
    /// Negative values are measured from the bottom edge.
    pub fn set_y(&mut self, y: f32) {
        self.x = self.geometry.left_margin;
        self.y = if y >= 0.0 { y } else { self.geometry.height + y };
    }

    /// Line break: back to the left margin, `h` millimetres down.
    pub fn ln(&mut self, h: f32) {
        self.x = self.geometry.left_margin;
        self.y += h;
    }

    /// Font size of the current style, in millimetres.
    pub fn font_size_mm(&self) -> f32 {
        self.style.size / PT_PER_MM
    }

    /// Font for the current style.
    pub fn font(&self) -> CoreFont {
        CoreFont::for_style(self.style.font)
    }

    /// Width of text in the current font, in millimetres.
    pub fn string_width(&self, text: &str) -> f32 {
        self.encoded_width(&encode_win_ansi(text).bytes)
    }

    pub(crate) fn encoded_width(&self, bytes: &[u8]) -> f32 {
        self.font().text_width(bytes) as f32 * self.font_size_mm() / 1000.0
    }

    /// Width from the cursor to the right margin.
    pub fn remaining_width(&self) -> f32 {
        self.geometry.width - self.geometry.right_margin - self.x
    }

    /// Draw one row of text in a cell of width `w` and height `h`.
    ///
    /// A width of 0 extends the cell to the right margin.
    pub fn cell(&mut self, w: f32, h: f32, text: &str, align: Align, advance: Advance) {
        let encoded = encode_win_ansi(text);
        if encoded.replaced > 0 {
            log::warn!(
                "{} character(s) not representable in WinAnsi replaced in {:?}",
                encoded.replaced,
                text
            );
            self.replaced_chars += encoded.replaced;
        }
        self.cell_bytes(w, h, &encoded.bytes, align, advance, 0.0);
    }

    /// Draw pre-encoded text with `word_spacing` millimetres added to each
    /// space.
    pub(crate) fn cell_bytes(
        &mut self,
        w: f32,
        h: f32,
        text: &[u8],
        align: Align,
        advance: Advance,
        word_spacing: f32,
    ) {
        let w = if w == 0.0 { self.remaining_width() } else { w };

        if !text.is_empty() && !self.pages.is_empty() {
            let dx = match align {
                Align::Right => w - self.geometry.cell_margin - self.encoded_width(text),
                Align::Center => (w - self.encoded_width(text)) / 2.0,
                Align::Left | Align::Justify => self.geometry.cell_margin,
            };
            let baseline = self.y + 0.5 * h + 0.3 * self.font_size_mm();
            let font = self.font();
            self.used_fonts.insert(font);

            let mut ops = vec![
                Operation::new("BT", vec![]),
                Operation::new(
                    "Tf",
                    vec![font.resource_name().into(), round2(self.style.size).into()],
                ),
            ];
            if word_spacing > 0.0 {
                ops.push(Operation::new("Tw", vec![round3(word_spacing * PT_PER_MM).into()]));
            }
            ops.push(Operation::new(
                "Td",
                vec![
                    round2((self.x + dx) * PT_PER_MM).into(),
                    round2((self.geometry.height - baseline) * PT_PER_MM).into(),
                ],
            ));
            ops.push(Operation::new("Tj", vec![Object::string_literal(text.to_vec())]));
            if word_spacing > 0.0 {
                ops.push(Operation::new("Tw", vec![0.into()]));
            }
            ops.push(Operation::new("ET", vec![]));

            if let Some(page) = self.pages.last_mut() {
                page.operations.extend(ops);
            }
        }

        match advance {
            Advance::Right => self.x += w,
            Advance::NextLine => {
                self.x = self.geometry.left_margin;
                self.y += h;
            }
            Advance::Below => self.y += h,
        }
    }

    /// Fonts drawn with so far, in resource-name order.
    pub fn used_fonts(&self) -> impl Iterator<Item = CoreFont> + '_ {
        self.used_fonts.iter().copied()
    }

    /// Total characters replaced because WinAnsi could not encode them.
    pub fn replaced_chars(&self) -> usize {
        self.replaced_chars
    }

    pub(crate) fn record_replaced(&mut self, count: usize) {
        self.replaced_chars += count;
    }

    /// Pages drawn so far.
    pub fn pages(&self) -> &[PageContent] {
        &self.pages
    }

    pub(crate) fn into_pages(self) -> Vec<PageContent> {
        self.pages
    }
}

fn round2(v: f32) -> f32 {
    (v * 100.0).round() / 100.0
}

fn round3(v: f32) -> f32 {
    (v * 1000.0).round() / 1000.0
}
