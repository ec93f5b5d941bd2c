//! Outline parsing.
//!
//! The summarizer produces a two-level outline: `## ` opens a section,
//! `### ` marks a story headline, and every other non-blank line is body
//! text. Parsing is a single forward pass with no backtracking; spacing in
//! the input carries no meaning.

mod node;

pub use node::{DocumentNode, Outline};

use crate::encoding;

const SECTION_MARKER: &str = "## ";
const HEADLINE_MARKER: &str = "### ";

/// Classification of one normalized, non-blank line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `## ` section marker
    Section,
    /// `### ` headline marker
    Headline,
    /// Anything else
    Body,
}

/// Classify a trimmed line by its marker prefix.
///
/// A marker needs its trailing space: `"##Title"` and a bare `"###"` are
/// body text.
pub fn classify_line(line: &str) -> LineKind {
    if line.starts_with(SECTION_MARKER) {
        LineKind::Section
    } else if line.starts_with(HEADLINE_MARKER) {
        LineKind::Headline
    } else {
        LineKind::Body
    }
}

/// Parse outline text into a document tree.
///
/// Each line is restricted to the output character set (unsupported
/// characters become `?`) and trimmed; blank lines are skipped. Each
/// remaining body line becomes its own [`DocumentNode::Body`]. Empty input
/// gives an empty outline.
pub fn parse_outline(raw: &str) -> Outline {
    let mut outline = Outline::new();
    let mut replaced = 0;

    for line in raw.lines() {
        let sanitized = encoding::sanitize(line);
        replaced += sanitized.replaced;

        let clean = sanitized.text.trim();
        if clean.is_empty() {
            continue;
        }

        let node = match classify_line(clean) {
            LineKind::Section => DocumentNode::section(clean[SECTION_MARKER.len()..].trim()),
            LineKind::Headline => DocumentNode::headline(clean[HEADLINE_MARKER.len()..].trim()),
            LineKind::Body => DocumentNode::body(clean),
        };
        outline.push(node);
    }

    if replaced > 0 {
        log::debug!("Replaced {} unsupported characters in outline", replaced);
    }

    outline
}
