//! Line classification through the public API.

use mdreport::{classify_document, classify_line, BlockKind, FontStyle, LineKind, ReportOptions};

fn kinds(text: &str) -> Vec<BlockKind> {
    classify_document(text, &ReportOptions::default())
        .into_iter()
        .map(|b| b.kind)
        .collect()
}

#[test]
fn test_skipped_lines() {
    let text = "\n   \n---\n----- \n# REQUIREMENT SPECIFICATION DOCUMENT\n```rust\n# Other title\n##### Deep\n##NoSpace";
    assert!(kinds(text).is_empty());
}

#[test]
fn test_heading_levels() {
    assert_eq!(
        kinds("## One\n### Two\n#### Three"),
        vec![
            BlockKind::Heading { level: 1 },
            BlockKind::Heading { level: 2 },
            BlockKind::Heading { level: 3 },
        ]
    );
}

#[test]
fn test_first_rule_wins() {
    // Bold line containing a pipe is still a bold line
    assert_eq!(kinds("**a | b**"), vec![BlockKind::BoldLine]);
    // List item containing a pipe is a table row
    assert_eq!(kinds("- a | b"), vec![BlockKind::TableRow]);
    // Fence containing a pipe is skipped
    assert!(kinds("```a|b").is_empty());
}

#[test]
fn test_code_fence_contents_are_classified() {
    let blocks = kinds("```\nlet x = 1;\n```");
    assert_eq!(blocks, vec![BlockKind::Paragraph]);
}

#[test]
fn test_indented_lines_are_trimmed() {
    let blocks = classify_document("    ## Indented\r", &ReportOptions::default());
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].text, "Indented");
}

#[test]
fn test_table_row_text() {
    let blocks = classify_document("|a|b|", &ReportOptions::default());
    assert_eq!(blocks[0].text, " | a | b | ");
    assert_eq!(blocks[0].style.size, 9.0);
    assert_eq!(blocks[0].line_height, 5.0);
}

#[test]
fn test_list_items() {
    let blocks = classify_document("* star\n12. twelve", &ReportOptions::default());
    assert_eq!(blocks[0].kind, BlockKind::UnorderedItem);
    assert_eq!(blocks[0].text, "  * star");
    assert_eq!(blocks[1].kind, BlockKind::OrderedItem);
    assert_eq!(blocks[1].text, "12. twelve");
}

#[test]
fn test_paragraph_cleanup() {
    let blocks = classify_document(
        "See [the docs](http://x.y/z) for *more* **detail**.",
        &ReportOptions::default(),
    );
    assert_eq!(blocks[0].text, "See the docs for more detail.");
    assert_eq!(blocks[0].style.font, FontStyle::Regular);
}

#[test]
fn test_classify_line_kinds() {
    let title = "# REQUIREMENT SPECIFICATION DOCUMENT";
    assert_eq!(classify_line("", title), LineKind::Blank);
    assert_eq!(classify_line("---", title), LineKind::Rule);
    assert_eq!(classify_line(title, title), LineKind::DocumentTitle);
    assert_eq!(classify_line("```", title), LineKind::CodeFence);
    assert_eq!(classify_line("# Other", title), LineKind::Unmatched);
}
