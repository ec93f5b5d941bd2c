//! Page canvas abstraction.

use serde::Serialize;

use super::options::{Face, FontRole};
use super::state::RenderState;
use crate::error::Result;

/// Horizontal alignment of text inside a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Flush left
    #[default]
    Left,
    /// Centred
    Center,
    /// Flush right
    Right,
}

/// What was drawn at a placement.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Mark {
    /// A run of text
    Text {
        /// Font face
        face: Face,
        /// Size in points
        size: f32,
        /// Text as written
        text: String,
    },
    /// A horizontal rule
    Rule {
        /// Rule length in millimetres
        length: f32,
    },
}

/// One drawn item with its position, in page coordinates from the top-left
/// corner in millimetres.
///
/// For text, `y` is the baseline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placement {
    /// Zero-based page index
    pub page: u32,
    /// Horizontal position
    pub x: f32,
    /// Vertical position
    pub y: f32,
    /// The drawn item
    pub mark: Mark,
}

impl Placement {
    /// Text of a text placement.
    pub fn text(&self) -> Option<&str> {
        match &self.mark {
            Mark::Text { text, .. } => Some(text),
            Mark::Rule { .. } => None,
        }
    }
}

/// A paginated drawing surface.
///
/// Operations that place content check the remaining space first and start
/// a new page (with its chrome) when the content would cross the bottom
/// margin. [`advance_cursor`](PageCanvas::advance_cursor) never breaks a
/// page.
pub trait PageCanvas {
    /// Open the first page.
    fn begin_document(&mut self, state: &mut RenderState) -> Result<()>;

    /// Switch the active font role. The role's colour applies to the text
    /// that follows.
    fn set_style(&mut self, state: &mut RenderState, role: FontRole);

    /// Place a single-line cell of the given height at the cursor, spanning
    /// from the left margin to the right margin, and move the cursor below it.
    fn emit_cell(
        &mut self,
        state: &mut RenderState,
        text: &str,
        height: f32,
        align: Align,
    ) -> Result<()>;

    /// Place text wrapped to the width between the left and right margins,
    /// one line per `line_height`, and move the cursor below it.
    fn emit_wrapped_text(&mut self, state: &mut RenderState, text: &str, line_height: f32)
        -> Result<()>;

    /// Draw a rule from the left margin to the right margin at `y`.
    fn draw_horizontal_rule(&mut self, state: &RenderState, y: f32) -> Result<()>;

    /// Move the cursor down by `dy`.
    fn advance_cursor(&mut self, state: &mut RenderState, dy: f32);
}
