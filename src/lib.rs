//! # issuedigest
//!
//! Weekly magazine digests as paginated PDFs.
//!
//! This library finds the most recent issue in a dated folder tree and
//! renders a summarized outline of it into a styled, paginated PDF.
//!
//! ## Quick Start
//!
//! ```no_run
//! use issuedigest::{parse_outline, render_digest, ComposeOptions};
//!
//! fn main() -> issuedigest::Result<()> {
//!     let outline = parse_outline("## Business\n### Banks rally\nProfits rose.");
//!
//!     let digest = render_digest(&outline, "2026-01-10", &ComposeOptions::default(), "out")?;
//!     println!("{} ({} pages)", digest.path.display(), digest.page_count);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Latest-issue resolution**: date-aware selection over unordered listings
//! - **Outline parsing**: `## ` sections, `### ` headlines, body lines
//! - **PDF composition**: banner, page footer and automatic page breaks
//! - **Text extraction**: lenient per-page extraction from issue PDFs

pub mod compose;
pub mod encoding;
pub mod error;
pub mod extract;
pub mod locate;
pub mod outline;

// Re-export commonly used types
pub use compose::{
    digest_file_name, render_digest, render_to_bytes, Align, ComposeOptions, DocumentRenderer,
    Face, FontRole, PageCanvas, PageGeometry, PdfCanvas, Placement, RenderState, RenderStats,
    RenderedDigest,
};
pub use error::{Error, Result};
pub use extract::{extract_text, extract_text_from_file};
pub use locate::{
    resolve_latest_issue, DirectoryListing, LocatorOptions, RepoEntry, ResolvedIssue,
};
pub use outline::{parse_outline, DocumentNode, Outline};

use std::fs;
use std::path::Path;

/// Parse an outline file.
///
/// # Example
///
/// ```no_run
/// use issuedigest::parse_outline_file;
///
/// let outline = parse_outline_file("summary.md").unwrap();
/// println!("Sections: {}", outline.sections().count());
/// ```
pub fn parse_outline_file<P: AsRef<Path>>(path: P) -> Result<Outline> {
    let raw = fs::read_to_string(path)?;
    Ok(parse_outline(&raw))
}

/// Render an outline file to `{out_dir}/{product}_{label}.pdf`.
pub fn render_outline_file<P: AsRef<Path>, Q: AsRef<Path>>(
    path: P,
    issue_label: &str,
    options: &ComposeOptions,
    out_dir: Q,
) -> Result<RenderedDigest> {
    let outline = parse_outline_file(path)?;
    render_digest(&outline, issue_label, options, out_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_outline_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "## Britain\n### Rail strikes\nTrains stopped.").unwrap();

        let outline = parse_outline_file(file.path()).unwrap();
        assert_eq!(outline.sections().count(), 1);
        assert_eq!(outline.node_count(), 3);
    }

    #[test]
    fn test_parse_outline_file_missing() {
        let result = parse_outline_file("/nonexistent/summary.md");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_render_outline_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "## Europe\nElections loom.").unwrap();

        let digest = render_outline_file(
            file.path(),
            "2026-01-17",
            &ComposeOptions::default(),
            dir.path(),
        )
        .unwrap();

        assert_eq!(
            digest.path,
            dir.path().join("Economist_Summary_2026-01-17.pdf")
        );
        assert_eq!(digest.page_count, 1);
    }
}
