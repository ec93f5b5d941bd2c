//! Outline to page rendering.

use serde::{Deserialize, Serialize};

use super::canvas::{Align, PageCanvas};
use super::options::{ComposeOptions, FontRole};
use super::state::RenderState;
use crate::error::Result;
use crate::outline::{DocumentNode, Outline};

/// Counts of what a render pass emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Section titles rendered
    pub section_count: u32,

    /// Headlines rendered
    pub headline_count: u32,

    /// Body lines rendered
    pub body_count: u32,

    /// Pages used
    pub page_count: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Renders an outline onto a [`PageCanvas`].
///
/// Every page carries the banner and a page-number footer (drawn by the
/// canvas). The first page starts with a right-aligned issue date line.
/// Sections get an upper-cased title with a rule underneath; headlines and
/// body lines wrap, with body text indented.
pub struct DocumentRenderer {
    options: ComposeOptions,
    stats: RenderStats,
}

impl DocumentRenderer {
    /// Create a new renderer.
    pub fn new(options: ComposeOptions) -> Self {
        Self {
            options,
            stats: RenderStats::new(),
        }
    }

    /// Render the outline for an issue onto `canvas`.
    pub fn render<C: PageCanvas + ?Sized>(
        mut self,
        outline: &Outline,
        issue_label: &str,
        canvas: &mut C,
    ) -> Result<RenderStats> {
        let mut state = RenderState::new(&self.options.geometry);
        canvas.begin_document(&mut state)?;

        self.render_issue_date(&mut state, canvas, issue_label)?;
        for node in &outline.nodes {
            self.render_node(&mut state, canvas, node)?;
        }

        self.stats.page_count = state.page_number();
        log::debug!(
            "Rendered {} sections, {} headlines, {} body lines on {} pages",
            self.stats.section_count,
            self.stats.headline_count,
            self.stats.body_count,
            self.stats.page_count
        );
        Ok(self.stats)
    }

    fn render_issue_date<C: PageCanvas + ?Sized>(
        &mut self,
        state: &mut RenderState,
        canvas: &mut C,
        issue_label: &str,
    ) -> Result<()> {
        let spacing = &self.options.spacing;
        let line = format!("{}{}", self.options.issue_date_prefix, issue_label);

        canvas.set_style(state, FontRole::Title);
        canvas.emit_cell(state, &line, spacing.issue_date_height, Align::Right)?;
        canvas.advance_cursor(state, spacing.after_issue_date);
        Ok(())
    }

    fn render_node<C: PageCanvas + ?Sized>(
        &mut self,
        state: &mut RenderState,
        canvas: &mut C,
        node: &DocumentNode,
    ) -> Result<()> {
        match node {
            DocumentNode::Section { title, children } => {
                self.render_section_title(state, canvas, title)?;
                for child in children {
                    self.render_node(state, canvas, child)?;
                }
            }
            DocumentNode::Headline { text } => self.render_headline(state, canvas, text)?,
            DocumentNode::Body { text } => self.render_body(state, canvas, text)?,
        }
        Ok(())
    }

    fn render_section_title<C: PageCanvas + ?Sized>(
        &mut self,
        state: &mut RenderState,
        canvas: &mut C,
        title: &str,
    ) -> Result<()> {
        let spacing = &self.options.spacing;

        canvas.advance_cursor(state, spacing.before_section);
        canvas.set_style(state, FontRole::SectionHeader);
        canvas.emit_cell(
            state,
            &title.to_uppercase(),
            spacing.section_title_height,
            Align::Left,
        )?;

        // rule sits directly under the title cell, on the same page
        let rule_y = state.cursor_y;
        canvas.draw_horizontal_rule(state, rule_y)?;
        canvas.advance_cursor(state, spacing.after_section_rule);
        canvas.set_style(state, FontRole::Body);

        self.stats.section_count += 1;
        Ok(())
    }

    fn render_headline<C: PageCanvas + ?Sized>(
        &mut self,
        state: &mut RenderState,
        canvas: &mut C,
        text: &str,
    ) -> Result<()> {
        let spacing = &self.options.spacing;

        canvas.set_style(state, FontRole::Headline);
        canvas.emit_wrapped_text(state, text, spacing.headline_line_height)?;
        canvas.advance_cursor(state, spacing.after_headline);

        self.stats.headline_count += 1;
        Ok(())
    }

    fn render_body<C: PageCanvas + ?Sized>(
        &mut self,
        state: &mut RenderState,
        canvas: &mut C,
        text: &str,
    ) -> Result<()> {
        let spacing = &self.options.spacing;
        let margin = state.left_margin;

        canvas.set_style(state, FontRole::Body);
        state.left_margin = margin + spacing.body_indent;
        let result = canvas.emit_wrapped_text(state, text, spacing.body_line_height);
        state.left_margin = margin;
        result?;
        canvas.advance_cursor(state, spacing.after_body);

        self.stats.body_count += 1;
        Ok(())
    }
}
