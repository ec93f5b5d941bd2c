//! PDF canvas backed by lopdf.
//!
//! Pages are collected as content-stream operations and assembled into a
//! document when the canvas is finished. Text uses the standard Type 1
//! fonts with WinAnsiEncoding, so no font files are embedded.

use std::fs;
use std::path::{Path, PathBuf};

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document as LopdfDocument, Object, Stream, StringFormat};
use serde::Serialize;

use super::canvas::{Align, Mark, PageCanvas, Placement};
use super::metrics::{self, MM_PER_PT, PT_PER_MM};
use super::options::{
    ComposeOptions, Face, FontRole, PageChrome, PageGeometry, Rgb, TextStyle, Typography,
};
use super::state::RenderState;
use crate::encoding;
use crate::error::{Error, Result};

const PRODUCER: &str = concat!("issuedigest ", env!("CARGO_PKG_VERSION"));

fn real(value: f32) -> Object {
    Object::Real(value)
}

/// A digest written to disk.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedDigest {
    /// Location of the written file
    pub path: PathBuf,

    /// Number of pages in the document
    pub page_count: u32,

    /// Everything drawn, in drawing order
    #[serde(skip)]
    pub placements: Vec<Placement>,
}

impl RenderedDigest {
    /// Text placements on one page, in drawing order.
    pub fn page_text(&self, page: u32) -> Vec<&str> {
        self.placements
            .iter()
            .filter(|p| p.page == page)
            .filter_map(Placement::text)
            .collect()
    }
}

/// [`PageCanvas`] that produces a PDF document.
pub struct PdfCanvas {
    geometry: PageGeometry,
    chrome: PageChrome,
    typography: Typography,
    title: Option<String>,
    pages: Vec<Vec<Operation>>,
    placements: Vec<Placement>,
    footer_pending: bool,
}

impl PdfCanvas {
    /// Create a canvas with the layout from `options`.
    pub fn new(options: &ComposeOptions) -> Self {
        Self {
            geometry: options.geometry.clone(),
            chrome: options.chrome.clone(),
            typography: options.typography.clone(),
            title: None,
            pages: Vec::new(),
            placements: Vec::new(),
            footer_pending: false,
        }
    }

    /// Set the document title stored in the file metadata.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Number of pages opened so far.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Everything drawn so far.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Close the last page and serialize the document.
    pub fn into_bytes(mut self) -> Result<Vec<u8>> {
        self.close();
        let mut doc = self.build_document()?;
        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)?;
        Ok(buffer)
    }

    /// Close the last page and write the document to `path`.
    ///
    /// Parent directories are created as needed; an existing file is
    /// replaced.
    pub fn finish(mut self, path: impl AsRef<Path>) -> Result<RenderedDigest> {
        let path = path.as_ref().to_path_buf();
        self.close();

        let page_count = self.page_count();
        let placements = std::mem::take(&mut self.placements);
        let bytes = self.into_bytes()?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&path, bytes)?;
        log::info!("Wrote {} ({} pages)", path.display(), page_count);

        Ok(RenderedDigest {
            path,
            page_count,
            placements,
        })
    }

    fn close(&mut self) {
        if self.pages.is_empty() {
            let mut state = RenderState::new(&self.geometry);
            self.open_page(&mut state);
        }
        if self.footer_pending {
            let last = self.pages.len() as u32 - 1;
            self.draw_footer(last);
            self.footer_pending = false;
        }
    }

    fn open_page(&mut self, state: &mut RenderState) {
        if self.footer_pending {
            let previous = self.pages.len() as u32 - 1;
            self.draw_footer(previous);
        }

        self.pages.push(Vec::new());
        self.footer_pending = true;
        state.page_index = self.pages.len() as u32 - 1;
        log::debug!("Opened page {}", state.page_number());

        self.draw_banner(state.page_index);
        state.cursor_y = self.chrome.content_top().max(self.geometry.top_margin);
    }

    fn ensure_room(&mut self, state: &mut RenderState, height: f32) {
        if self.pages.is_empty() || state.cursor_y + height > self.geometry.break_trigger() {
            self.open_page(state);
        }
    }

    fn draw_banner(&mut self, page: u32) {
        let g = &self.geometry;
        let k = PT_PER_MM;
        let [r, gr, b] = self.chrome.banner_color.to_unit();
        let ops = vec![
            Operation::new("rg", vec![real(r), real(gr), real(b)]),
            Operation::new(
                "re",
                vec![
                    real(0.0),
                    real((g.height - self.chrome.banner_height) * k),
                    real(g.width * k),
                    real(self.chrome.banner_height * k),
                ],
            ),
            Operation::new("f", vec![]),
        ];
        self.page_ops(page).extend(ops);

        let left = self.geometry.left_margin;
        let title = self.chrome.banner_title.clone();
        let style = self.chrome.banner_style;
        let top = self.chrome.banner_text_top;
        let height = self.chrome.banner_cell_height;
        self.place_cell(page, left, top, height, &style, &title, Align::Center);
    }

    fn draw_footer(&mut self, page: u32) {
        let text = self.chrome.footer_text(page + 1);
        let style = self.chrome.footer_style;
        let left = self.geometry.left_margin;
        let top = self.geometry.height - self.chrome.footer_offset;
        let height = self.chrome.footer_cell_height;
        self.place_cell(page, left, top, height, &style, &text, Align::Center);
    }

    fn page_ops(&mut self, page: u32) -> &mut Vec<Operation> {
        &mut self.pages[page as usize]
    }

    #[allow(clippy::too_many_arguments)]
    fn place_cell(
        &mut self,
        page: u32,
        left: f32,
        top: f32,
        height: f32,
        style: &TextStyle,
        text: &str,
        align: Align,
    ) {
        let text = encoding::sanitize(text).text;
        let cell_width = self.geometry.text_width(left);
        let margin = self.geometry.cell_margin;
        let text_width = metrics::text_width(style.face, style.size, &text);

        let x = match align {
            Align::Left => left + margin,
            Align::Center => left + (cell_width - text_width) / 2.0,
            Align::Right => left + cell_width - margin - text_width,
        };
        let baseline = top + 0.5 * height + 0.3 * style.size * MM_PER_PT;

        self.place_text(page, x, baseline, style, text);
    }

    fn place_text(&mut self, page: u32, x: f32, baseline: f32, style: &TextStyle, text: String) {
        if text.is_empty() {
            return;
        }

        let k = PT_PER_MM;
        let [r, g, b] = style.color.to_unit();
        let y_pt = (self.geometry.height - baseline) * k;
        let ops = vec![
            Operation::new("BT", vec![]),
            Operation::new(
                "Tf",
                vec![
                    Object::Name(style.face.resource_name().as_bytes().to_vec()),
                    real(style.size),
                ],
            ),
            Operation::new("rg", vec![real(r), real(g), real(b)]),
            Operation::new("Td", vec![real(x * k), real(y_pt)]),
            Operation::new(
                "Tj",
                vec![Object::String(encoding::encode(&text), StringFormat::Literal)],
            ),
            Operation::new("ET", vec![]),
        ];
        self.page_ops(page).extend(ops);

        self.placements.push(Placement {
            page,
            x,
            y: baseline,
            mark: Mark::Text {
                face: style.face,
                size: style.size,
                text,
            },
        });
    }

    fn build_document(self) -> Result<LopdfDocument> {
        let k = PT_PER_MM;
        let mut doc = LopdfDocument::with_version("1.4");
        let pages_id = doc.new_object_id();

        let mut fonts = Dictionary::new();
        for face in Face::ALL {
            let font_id = doc.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => face.base_font(),
                "Encoding" => "WinAnsiEncoding"
            });
            fonts.set(face.resource_name(), font_id);
        }
        let resources_id = doc.add_object(dictionary! {
            "Font" => fonts
        });

        let mut kids: Vec<Object> = Vec::with_capacity(self.pages.len());
        for operations in self.pages {
            let content = Content { operations };
            let content_id = doc.add_object(Stream::new(Dictionary::new(), content.encode()?));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Resources" => resources_id,
                "Contents" => content_id
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        let media_box: Vec<Object> = vec![
            Object::Integer(0),
            Object::Integer(0),
            real(self.geometry.width * k),
            real(self.geometry.height * k),
        ];
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => media_box
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id
        });

        let mut info = dictionary! {
            "Producer" => Object::string_literal(PRODUCER),
            "CreationDate" => Object::string_literal(
                chrono::Local::now().format("D:%Y%m%d%H%M%S").to_string()
            )
        };
        if let Some(title) = self.title {
            info.set("Title", Object::String(encoding::encode(&title), StringFormat::Literal));
        }
        let info_id = doc.add_object(info);

        doc.trailer.set("Root", catalog_id);
        doc.trailer.set("Info", info_id);
        doc.compress();

        Ok(doc)
    }
}

impl PageCanvas for PdfCanvas {
    fn begin_document(&mut self, state: &mut RenderState) -> Result<()> {
        state.left_margin = self.geometry.left_margin;
        self.open_page(state);
        Ok(())
    }

    fn set_style(&mut self, state: &mut RenderState, role: FontRole) {
        state.role = role;
    }

    fn emit_cell(
        &mut self,
        state: &mut RenderState,
        text: &str,
        height: f32,
        align: Align,
    ) -> Result<()> {
        self.ensure_room(state, height);
        let style = self.typography.style(state.role);
        self.place_cell(
            state.page_index,
            state.left_margin,
            state.cursor_y,
            height,
            &style,
            text,
            align,
        );
        state.cursor_y += height;
        Ok(())
    }

    fn emit_wrapped_text(
        &mut self,
        state: &mut RenderState,
        text: &str,
        line_height: f32,
    ) -> Result<()> {
        let style = self.typography.style(state.role);
        let margin = self.geometry.cell_margin;
        let max_width = self.geometry.text_width(state.left_margin) - 2.0 * margin;
        let text = encoding::sanitize(text).text;
        let lines = metrics::wrap_text(style.face, style.size, &text, max_width);

        if lines.is_empty() {
            self.ensure_room(state, line_height);
            state.cursor_y += line_height;
            return Ok(());
        }

        for line in lines {
            self.ensure_room(state, line_height);
            let x = state.left_margin + margin;
            let baseline = state.cursor_y + 0.5 * line_height + 0.3 * style.size * MM_PER_PT;
            self.place_text(state.page_index, x, baseline, &style, line);
            state.cursor_y += line_height;
        }
        Ok(())
    }

    fn draw_horizontal_rule(&mut self, state: &RenderState, y: f32) -> Result<()> {
        if self.pages.is_empty() {
            return Err(Error::Render(
                "rule drawn before the document was begun".to_string(),
            ));
        }

        let k = PT_PER_MM;
        let x1 = state.left_margin;
        let x2 = self.geometry.width - self.geometry.right_margin;
        let y_pt = (self.geometry.height - y) * k;
        let [r, g, b] = Rgb::BLACK.to_unit();
        let ops = vec![
            Operation::new("w", vec![real(self.geometry.line_width * k)]),
            Operation::new("RG", vec![real(r), real(g), real(b)]),
            Operation::new("m", vec![real(x1 * k), real(y_pt)]),
            Operation::new("l", vec![real(x2 * k), real(y_pt)]),
            Operation::new("S", vec![]),
        ];
        self.page_ops(state.page_index).extend(ops);

        self.placements.push(Placement {
            page: state.page_index,
            x: x1,
            y,
            mark: Mark::Rule { length: x2 - x1 },
        });
        Ok(())
    }

    fn advance_cursor(&mut self, state: &mut RenderState, dy: f32) {
        state.cursor_y += dy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> (PdfCanvas, RenderState) {
        let options = ComposeOptions::default();
        let state = RenderState::new(&options.geometry);
        (PdfCanvas::new(&options), state)
    }

    #[test]
    fn test_begin_document_draws_banner() {
        let (mut canvas, mut state) = canvas();
        canvas.begin_document(&mut state).unwrap();

        assert_eq!(canvas.page_count(), 1);
        assert_eq!(state.page_index, 0);
        assert_eq!(state.cursor_y, 28.0);
        assert_eq!(canvas.placements()[0].text(), Some("The Weekly Digest"));
    }

    #[test]
    fn test_emit_cell_right_aligned() {
        let (mut canvas, mut state) = canvas();
        canvas.begin_document(&mut state).unwrap();
        canvas.set_style(&mut state, FontRole::Title);
        canvas
            .emit_cell(&mut state, "Issue Date: 2026-01-10", 12.0, Align::Right)
            .unwrap();

        let placement = canvas.placements().last().unwrap();
        let width = metrics::text_width(
            Face::HelveticaBold,
            14.0,
            "Issue Date: 2026-01-10",
        );
        assert!((placement.x + width - 133.0).abs() < 1e-3);
        assert_eq!(state.cursor_y, 40.0);
    }

    #[test]
    fn test_page_break_before_overflowing_line() {
        let (mut canvas, mut state) = canvas();
        canvas.begin_document(&mut state).unwrap();
        canvas.advance_cursor(&mut state, 160.0);
        assert_eq!(canvas.page_count(), 1);

        canvas.emit_wrapped_text(&mut state, "Spill over.", 8.0).unwrap();
        assert_eq!(canvas.page_count(), 2);
        assert_eq!(state.page_index, 1);
        assert_eq!(state.cursor_y, 36.0);
    }

    #[test]
    fn test_advance_cursor_never_breaks() {
        let (mut canvas, mut state) = canvas();
        canvas.begin_document(&mut state).unwrap();
        canvas.advance_cursor(&mut state, 500.0);
        assert_eq!(canvas.page_count(), 1);
    }

    #[test]
    fn test_footer_on_every_page() {
        let (mut canvas, mut state) = canvas();
        canvas.begin_document(&mut state).unwrap();
        canvas.advance_cursor(&mut state, 200.0);
        canvas.emit_cell(&mut state, "next", 8.0, Align::Left).unwrap();
        canvas.close();

        let footers: Vec<_> = canvas
            .placements()
            .iter()
            .filter_map(Placement::text)
            .filter(|t| t.starts_with("Page "))
            .collect();
        assert_eq!(footers, vec!["Page 1", "Page 2"]);
    }

    #[test]
    fn test_rule_requires_page() {
        let (mut canvas, state) = canvas();
        assert!(canvas.draw_horizontal_rule(&state, 40.0).is_err());
    }

    #[test]
    fn test_into_bytes_is_pdf() {
        let (mut canvas, mut state) = canvas();
        canvas.begin_document(&mut state).unwrap();
        canvas.emit_wrapped_text(&mut state, "Hello", 8.0).unwrap();

        let bytes = canvas.into_bytes().unwrap();
        assert!(bytes.starts_with(b"%PDF-1.4"));

        let doc = LopdfDocument::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn test_finish_without_content_has_one_page() {
        let dir = tempfile::tempdir().unwrap();
        let options = ComposeOptions::default();
        let digest = PdfCanvas::new(&options)
            .finish(dir.path().join("empty.pdf"))
            .unwrap();

        assert_eq!(digest.page_count, 1);
        assert!(digest.path.exists());
    }
}
