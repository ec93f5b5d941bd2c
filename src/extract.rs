//! Plain-text extraction from issue PDFs.
//!
//! Extraction is lenient: pages that fail to decode are skipped with a
//! warning, and [`extract_text`] turns any whole-document failure into an
//! empty string so the outline stage sees "no content" instead of an error.

use std::fs;
use std::path::Path;

use lopdf::Document as LopdfDocument;

use crate::error::{Error, Result};

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";

/// Check whether data starts with the PDF header.
pub fn is_pdf(data: &[u8]) -> bool {
    data.starts_with(PDF_MAGIC)
}

/// Extract the text of every page, in page order, joined by `\n`.
///
/// Fails only when the document itself cannot be loaded.
pub fn try_extract_text(data: &[u8]) -> Result<String> {
    if !is_pdf(data) {
        return Err(Error::Pdf("missing %PDF- header".to_string()));
    }

    let doc = LopdfDocument::load_mem(data)?;
    let pages = doc.get_pages();
    let mut texts = Vec::with_capacity(pages.len());

    for &page_num in pages.keys() {
        match doc.extract_text(&[page_num]) {
            Ok(text) => texts.push(text),
            Err(e) => log::warn!("Failed to extract text from page {}: {}", page_num, e),
        }
    }

    log::debug!("Extracted {} of {} pages", texts.len(), pages.len());
    Ok(texts.join("\n"))
}

/// Extract text, yielding an empty string on failure.
pub fn extract_text(data: &[u8]) -> String {
    try_extract_text(data).unwrap_or_else(|e| {
        log::warn!("Text extraction failed: {}", e);
        String::new()
    })
}

/// Extract text from a PDF file.
///
/// A missing or unreadable file is an error; a file that is not a readable
/// PDF yields an empty string.
pub fn extract_text_from_file(path: impl AsRef<Path>) -> Result<String> {
    let data = fs::read(path)?;
    Ok(extract_text(&data))
}
