//! Mutable layout state threaded through rendering.

use super::options::{FontRole, PageGeometry};

/// Layout state shared between the renderer and the canvas.
///
/// The renderer owns the left margin and the active role; the canvas owns
/// the cursor and the page index and updates them as it places content.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    /// Current left margin in millimetres
    pub left_margin: f32,

    /// Active typographic role
    pub role: FontRole,

    /// Vertical cursor from the top edge, in millimetres
    pub cursor_y: f32,

    /// Zero-based index of the current page
    pub page_index: u32,
}

impl RenderState {
    /// Initial state for a page geometry.
    pub fn new(geometry: &PageGeometry) -> Self {
        Self {
            left_margin: geometry.left_margin,
            role: FontRole::Body,
            cursor_y: geometry.top_margin,
            page_index: 0,
        }
    }

    /// One-based page number.
    pub fn page_number(&self) -> u32 {
        self.page_index + 1
    }
}
