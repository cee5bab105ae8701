//! End-to-end tests: markdown file in, PDF file out, read back with lopdf.

use std::fs;

use lopdf::Document;
use mdreport::render::DEFAULT_HEADER_TITLE;
use mdreport::{convert_file, render_markdown, Error, ReportOptions, TitlePage};
use tempfile::tempdir;

const MINIMAL: &str = "# REQUIREMENT SPECIFICATION DOCUMENT\n\
## Introduction\n\
This is a paragraph with a [link](https://example.com) and **bold** words.\n\
- First item\n";

fn page_text(doc: &Document, page: u32) -> String {
    doc.extract_text(&[page]).unwrap()
}

#[test]
fn test_minimal_document() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("report.md");
    let output = dir.path().join("report.pdf");
    fs::write(&input, MINIMAL).unwrap();

    let stats = convert_file(&input, &output, &ReportOptions::default()).unwrap();
    assert_eq!(stats.heading_count, 1);
    assert_eq!(stats.paragraph_count, 1);
    assert_eq!(stats.list_item_count, 1);

    let bytes = fs::read(&output).unwrap();
    assert!(!bytes.is_empty());
    let doc = Document::load_mem(&bytes).unwrap();
    assert!(doc.get_pages().len() >= 2);
    assert_eq!(doc.get_pages().len() as u32, stats.page_count);

    let content = page_text(&doc, 2);
    assert!(content.contains("Introduction"));
    assert!(!content.contains("## "));
    assert!(content.contains("This is a paragraph with a link and bold words."));
    assert!(!content.contains("example.com"));
    assert!(content.contains("- First item"));
}

#[test]
fn test_title_page() {
    let output = render_markdown(MINIMAL, &ReportOptions::default()).unwrap();
    let doc = Document::load_mem(&output.bytes).unwrap();

    let title = page_text(&doc, 1);
    assert!(title.contains("REQUIREMENT SPECIFICATION"));
    assert!(title.contains("Investment Tracker System"));
    assert!(title.contains("Version: 1.0"));
    assert!(!title.contains("Introduction"));
}

#[test]
fn test_header_skips_first_page() {
    let output = render_markdown(MINIMAL, &ReportOptions::default()).unwrap();
    let doc = Document::load_mem(&output.bytes).unwrap();

    assert!(!page_text(&doc, 1).contains(DEFAULT_HEADER_TITLE));
    assert!(page_text(&doc, 2).contains(DEFAULT_HEADER_TITLE));
}

#[test]
fn test_footer_on_every_page() {
    let body: String = (1..=200).map(|i| format!("Line number {}\n", i)).collect();
    let output = render_markdown(&body, &ReportOptions::default()).unwrap();
    let doc = Document::load_mem(&output.bytes).unwrap();

    let pages = doc.get_pages().len() as u32;
    assert!(pages >= 4);
    assert_eq!(pages, output.stats.page_count);
    for page in 1..=pages {
        assert!(page_text(&doc, page).contains(&format!("Page {}", page)));
    }
}

#[test]
fn test_long_paragraph_wraps() {
    let paragraph = "word ".repeat(400);
    let output = render_markdown(&paragraph, &ReportOptions::default()).unwrap();
    let doc = Document::load_mem(&output.bytes).unwrap();

    // One source line, but far more text than fits on one row
    assert_eq!(output.stats.paragraph_count, 1);
    let content = page_text(&doc, 2);
    assert!(content.matches("word").count() >= 300);
}

#[test]
fn test_custom_options() {
    let options = ReportOptions::new()
        .with_header_title("Team Handbook")
        .with_title_page(
            TitlePage::new("Handbook")
                .with_program("People Operations")
                .with_submission_date("Issued: May 2026")
                .with_version("Revision 3"),
        );
    let output = render_markdown("## Scope", &options).unwrap();
    let doc = Document::load_mem(&output.bytes).unwrap();

    let title = page_text(&doc, 1);
    assert!(title.contains("People Operations"));
    assert!(title.contains("Issued: May 2026"));
    assert!(title.contains("Revision 3"));
    assert!(page_text(&doc, 2).contains("Team Handbook"));
}

#[test]
fn test_missing_input_writes_nothing() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.pdf");

    let result = convert_file(dir.path().join("missing.md"), &output, &ReportOptions::default());

    assert!(matches!(result, Err(Error::Io(_))));
    assert!(!output.exists());
}

#[test]
fn test_invalid_utf8_input() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("binary.md");
    let output = dir.path().join("out.pdf");
    fs::write(&input, b"## Heading\n\xFF\xFE\xFD").unwrap();

    let result = convert_file(&input, &output, &ReportOptions::default());

    assert!(matches!(result, Err(Error::InvalidUtf8 { offset: 11 })));
    assert!(!output.exists());
}

#[test]
fn test_unwritable_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.md");
    fs::write(&input, "Body").unwrap();

    let result = convert_file(
        &input,
        dir.path().join("no/such/dir/out.pdf"),
        &ReportOptions::default(),
    );

    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_options_file() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("options.json");
    fs::write(&config, r#"{ "header_title": "From File" }"#).unwrap();

    let options = ReportOptions::from_json_file(&config).unwrap();
    let output = render_markdown("Body", &options).unwrap();
    let doc = Document::load_mem(&output.bytes).unwrap();

    assert!(page_text(&doc, 2).contains("From File"));
}
