//! Paginated PDF document with automatic page breaks.

use chrono::{DateTime, Local};
use lopdf::content::Content;
use lopdf::{dictionary, Dictionary, Document, Object, Stream, StringFormat};

use super::canvas::{Advance, Align, Canvas, PageGeometry, PT_PER_MM};
use super::fonts::encode_win_ansi;
use super::wrap::wrap_text;
use crate::error::Result;
use crate::model::TextStyle;

/// Hooks invoked by the pagination mechanism.
///
/// `header` runs right after a page is started, `footer` right before it is
/// closed. Both draw on a [`Canvas`], which never breaks pages, and the font
/// in effect before the hook is restored afterwards.
pub trait PageDecorator {
    /// Draw the top of page `page_no`.
    fn header(&self, _canvas: &mut Canvas, _page_no: u32) {}

    /// Draw the bottom of page `page_no`.
    fn footer(&self, _canvas: &mut Canvas, _page_no: u32) {}
}

/// Decorator drawing nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDecoration;

impl PageDecorator for NoDecoration {}

/// Entries of the document information dictionary.
#[derive(Debug, Clone)]
pub struct DocumentInfo {
    /// Document title
    pub title: Option<String>,
    /// Author
    pub author: Option<String>,
    /// Application that created the content
    pub creator: Option<String>,
    /// Application that wrote the PDF
    pub producer: String,
    /// Creation time
    pub created: DateTime<Local>,
}

impl Default for DocumentInfo {
    fn default() -> Self {
        Self {
            title: None,
            author: None,
            creator: None,
            producer: format!("mdreport {}", env!("CARGO_PKG_VERSION")),
            created: Local::now(),
        }
    }
}

/// A paginated document being written top to bottom.
pub struct PdfDocument<D: PageDecorator> {
    canvas: Canvas,
    decorator: D,
    info: DocumentInfo,
    auto_page_break: bool,
}

impl<D: PageDecorator> PdfDocument<D> {
    /// Create an empty document.
    pub fn new(geometry: PageGeometry, decorator: D) -> Self {
        Self {
            canvas: Canvas::new(geometry),
            decorator,
            info: DocumentInfo::default(),
            auto_page_break: true,
        }
    }

    /// Set the information dictionary entries.
    pub fn with_info(mut self, info: DocumentInfo) -> Self {
        self.info = info;
        self
    }

    /// Enable or disable automatic page breaks.
    pub fn set_auto_page_break(&mut self, enabled: bool) {
        self.auto_page_break = enabled;
    }

    /// The render cursor.
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Number of pages started so far.
    pub fn page_count(&self) -> u32 {
        self.canvas.page_no()
    }

    /// Close the current page (if any) and start a new one.
    pub fn add_page(&mut self) {
        let style = self.canvas.style();
        let current = self.canvas.page_no();
        if current > 0 {
            self.decorator.footer(&mut self.canvas, current);
            self.canvas.set_style(style);
        }

        self.canvas.begin_page();
        let page_no = self.canvas.page_no();
        log::debug!("Started page {}", page_no);
        self.decorator.header(&mut self.canvas, page_no);
        self.canvas.set_style(style);
    }

    /// Set the font for following text.
    pub fn set_style(&mut self, style: TextStyle) {
        self.canvas.set_style(style);
    }

    /// Line break of `h` millimetres.
    pub fn ln(&mut self, h: f32) {
        self.canvas.ln(h);
    }

    /// Draw one row of text, breaking the page first if the row would not
    /// fit above the bottom margin.
    pub fn cell(&mut self, w: f32, h: f32, text: &str, align: Align, advance: Advance) {
        self.break_if_needed(h);
        self.canvas.cell(w, h, text, align, advance);
    }

    /// Draw text wrapped into rows of height `h` in a cell of width `w`.
    ///
    /// A width of 0 extends to the right margin. With [`Align::Justify`]
    /// every row that was wrapped at a space is stretched to the full width.
    /// The cursor ends at the left margin below the last row.
    pub fn multi_cell(&mut self, w: f32, h: f32, text: &str, align: Align) {
        let w = if w == 0.0 {
            self.canvas.remaining_width()
        } else {
            w
        };
        let cell_margin = self.canvas.geometry().cell_margin;
        let font_size = self.canvas.font_size_mm();
        let max_units = ((w - 2.0 * cell_margin) * 1000.0 / font_size).max(0.0) as u32;

        let encoded = encode_win_ansi(text);
        if encoded.replaced > 0 {
            log::warn!(
                "{} character(s) not representable in WinAnsi replaced in {:?}",
                encoded.replaced,
                text
            );
            self.canvas.record_replaced(encoded.replaced);
        }

        let font = self.canvas.font();
        for line in wrap_text(font, &encoded.bytes, max_units) {
            // `spaces` excludes the separator dropped at the break
            let word_spacing = if align == Align::Justify && line.soft_break && line.spaces > 0 {
                (max_units.saturating_sub(line.width)) as f32 / 1000.0 * font_size
                    / line.spaces as f32
            } else {
                0.0
            };
            self.break_if_needed(h);
            self.canvas.cell_bytes(
                w,
                h,
                &encoded.bytes[line.start..line.end],
                align,
                Advance::Below,
                word_spacing,
            );
        }
        self.canvas.set_x(self.canvas.geometry().left_margin);
    }

    fn break_if_needed(&mut self, h: f32) {
        let trigger = self.canvas.geometry().break_trigger();
        if self.auto_page_break && self.page_count() > 0 && self.canvas.y() + h > trigger {
            let x = self.canvas.x();
            self.add_page();
            self.canvas.set_x(x);
        }
    }

    /// Draw the last footer and build the PDF object graph.
    pub fn finish(mut self) -> Result<Document> {
        if self.page_count() == 0 {
            self.add_page();
        }
        let last = self.canvas.page_no();
        self.decorator.footer(&mut self.canvas, last);

        let geometry = *self.canvas.geometry();
        let fonts: Vec<_> = self.canvas.used_fonts().collect();
        let replaced = self.canvas.replaced_chars();
        if replaced > 0 {
            log::warn!("{} character(s) in total were not representable", replaced);
        }

        let mut doc = Document::with_version("1.4");
        let pages_id = doc.new_object_id();

        let mut font_dict = Dictionary::new();
        for font in fonts {
            let font_id = doc.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => font.base_font(),
                "Encoding" => "WinAnsiEncoding",
            });
            font_dict.set(font.resource_name(), font_id);
        }
        let resources_id = doc.add_object(dictionary! {
            "Font" => font_dict,
        });

        let mut kids: Vec<Object> = Vec::new();
        for page in self.canvas.into_pages() {
            let content = Content {
                operations: page.operations,
            };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let page_count = kids.len() as i64;
        let media_box: Vec<Object> = geometry
            .media_box()
            .iter()
            .map(|v| Object::from((v * 100.0).round() / 100.0))
            .collect();
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "Resources" => resources_id,
            "MediaBox" => media_box,
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        let info_id = doc.add_object(info_dictionary(&self.info));
        doc.trailer.set("Root", catalog_id);
        doc.trailer.set("Info", info_id);
        doc.compress();

        log::info!(
            "Finished PDF: {} page(s), {:.0}x{:.0}pt",
            page_count,
            geometry.width * PT_PER_MM,
            geometry.height * PT_PER_MM
        );
        Ok(doc)
    }

    /// Finish the document and serialize it.
    pub fn to_bytes(self) -> Result<Vec<u8>> {
        let mut doc = self.finish()?;
        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)?;
        Ok(bytes)
    }
}

fn info_dictionary(info: &DocumentInfo) -> Dictionary {
    let mut dict = Dictionary::new();
    if let Some(title) = &info.title {
        dict.set("Title", text_string(title));
    }
    if let Some(author) = &info.author {
        dict.set("Author", text_string(author));
    }
    if let Some(creator) = &info.creator {
        dict.set("Creator", text_string(creator));
    }
    dict.set("Producer", text_string(&info.producer));
    dict.set(
        "CreationDate",
        Object::string_literal(info.created.format("D:%Y%m%d%H%M%S").to_string()),
    );
    dict
}

/// PDF text string: literal for ASCII, UTF-16BE with a byte order mark
/// otherwise.
fn text_string(text: &str) -> Object {
    if text.is_ascii() {
        Object::string_literal(text)
    } else {
        let mut bytes = vec![0xFE, 0xFF];
        for unit in text.encode_utf16() {
            bytes.extend_from_slice(&unit.to_be_bytes());
        }
        Object::String(bytes, StringFormat::Hexadecimal)
    }
}
