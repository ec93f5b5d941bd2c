//! Digest composition.
//!
//! Turns a parsed [`Outline`] into a paginated PDF. The
//! [`DocumentRenderer`] walks the outline and drives a [`PageCanvas`],
//! which owns pagination and the per-page banner and footer.

mod canvas;
pub mod metrics;
mod options;
mod pdf_canvas;
mod renderer;
mod state;

pub use canvas::{Align, Mark, PageCanvas, Placement};
pub use options::{
    ComposeOptions, Face, FontRole, PageChrome, PageGeometry, Rgb, Spacing, TextStyle, Typography,
};
pub use pdf_canvas::{PdfCanvas, RenderedDigest};
pub use renderer::{DocumentRenderer, RenderStats};
pub use state::RenderState;

use std::path::Path;

use crate::error::Result;
use crate::outline::Outline;

/// File name of a digest: `{product}_{label}.pdf`, with the label verbatim.
pub fn digest_file_name(product: &str, issue_label: &str) -> String {
    format!("{}_{}.pdf", product, issue_label)
}

/// Render an outline to `{out_dir}/{product}_{label}.pdf`.
pub fn render_digest(
    outline: &Outline,
    issue_label: &str,
    options: &ComposeOptions,
    out_dir: impl AsRef<Path>,
) -> Result<RenderedDigest> {
    let path = out_dir
        .as_ref()
        .join(digest_file_name(&options.product_name, issue_label));

    let mut canvas = document_canvas(options, issue_label);
    DocumentRenderer::new(options.clone()).render(outline, issue_label, &mut canvas)?;
    canvas.finish(path)
}

/// Render an outline to PDF bytes in memory.
pub fn render_to_bytes(
    outline: &Outline,
    issue_label: &str,
    options: &ComposeOptions,
) -> Result<Vec<u8>> {
    let mut canvas = document_canvas(options, issue_label);
    DocumentRenderer::new(options.clone()).render(outline, issue_label, &mut canvas)?;
    canvas.into_bytes()
}

fn document_canvas(options: &ComposeOptions, issue_label: &str) -> PdfCanvas {
    PdfCanvas::new(options).with_title(format!("{} {}", options.chrome.banner_title, issue_label))
}
