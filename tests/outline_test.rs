//! Integration tests for outline parsing.

use issuedigest::outline::{classify_line, parse_outline, DocumentNode, LineKind, Outline};

const SUMMARY: &str = "\
## The world this week
### Politics
Parliament passed the budget.
Protests continued in the capital.

## Business
### Banks rally
Profits rose at the largest lenders.
### Chipmakers
No significant coverage this issue.
";

#[test]
fn test_parse_summary_structure() {
    let outline = parse_outline(SUMMARY);

    let titles: Vec<&str> = outline.sections().map(|s| s.text()).collect();
    assert_eq!(titles, vec!["The world this week", "Business"]);

    let business = &outline.nodes[1];
    assert_eq!(
        business.children(),
        &[
            DocumentNode::headline("Banks rally"),
            DocumentNode::body("Profits rose at the largest lenders."),
            DocumentNode::headline("Chipmakers"),
            DocumentNode::body("No significant coverage this issue."),
        ]
    );
    assert_eq!(outline.node_count(), 9);
}

#[test]
fn test_malformed_marker() {
    let outline = parse_outline("##NoSpace\nBody text");

    assert_eq!(outline.sections().count(), 0);
    assert_eq!(outline.nodes.len(), 2);
    assert!(outline
        .nodes
        .iter()
        .all(|n| matches!(n, DocumentNode::Body { .. })));
}

#[test]
fn test_blank_and_whitespace_lines_skipped() {
    let with_gaps = parse_outline("## A\n\n\n   \n### B\n\t\nC");
    let without = parse_outline("## A\n### B\nC");
    assert_eq!(with_gaps, without);
}

#[test]
fn test_empty_text_is_empty_outline() {
    assert_eq!(parse_outline(""), Outline::new());
}

#[test]
fn test_bold_markers_kept_verbatim() {
    let outline = parse_outline("**Leaders** matter");
    assert_eq!(outline.nodes[0].text(), "**Leaders** matter");
}

#[test]
fn test_classify_precedence() {
    assert_eq!(classify_line("### Story"), LineKind::Headline);
    assert_eq!(classify_line("## Story"), LineKind::Section);
    assert_eq!(classify_line("# Story"), LineKind::Body);
}

#[test]
fn test_smart_punctuation_survives() {
    let outline = parse_outline("## Britain\nThe PM’s “reset” — again…");
    assert_eq!(
        outline.nodes[0].children()[0].text(),
        "The PM’s “reset” — again…"
    );
}

#[test]
fn test_outline_json_shape() {
    let outline = parse_outline("## Europe\n### Polls");
    let json = serde_json::to_value(&outline).unwrap();

    assert_eq!(json["nodes"][0]["kind"], "section");
    assert_eq!(json["nodes"][0]["title"], "Europe");
    assert_eq!(json["nodes"][0]["children"][0]["kind"], "headline");
}
