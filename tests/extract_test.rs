//! Integration tests for text extraction.

use issuedigest::compose::{render_to_bytes, ComposeOptions};
use issuedigest::extract::{extract_text, extract_text_from_file, is_pdf, try_extract_text};
use issuedigest::outline::parse_outline;

#[test]
fn test_extract_rendered_digest() {
    let outline = parse_outline("## Business\n### Banks rally\nProfits rose.");
    let bytes = render_to_bytes(&outline, "2026-01-10", &ComposeOptions::default()).unwrap();

    assert!(is_pdf(&bytes));
    let text = try_extract_text(&bytes).unwrap();
    assert!(text.contains("BUSINESS"));
    assert!(text.contains("Profits rose."));
}

#[test]
fn test_extract_pages_in_order() {
    let mut raw = String::from("## Leaders\n");
    for i in 0..30 {
        raw.push_str(&format!("### Story {}\nBody of story {}.\n", i, i));
    }
    let bytes =
        render_to_bytes(&parse_outline(&raw), "2026-01-10", &ComposeOptions::default()).unwrap();

    let text = extract_text(&bytes);
    let first = text.find("Page 1").unwrap();
    let second = text.find("Page 2").unwrap();
    assert!(first < second);
}

#[test]
fn test_extract_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("issue.pdf");
    std::fs::write(&path, b"this is not a pdf").unwrap();

    assert_eq!(extract_text_from_file(&path).unwrap(), "");
}
