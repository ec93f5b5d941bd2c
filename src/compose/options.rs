//! Layout and typography configuration.
//!
//! All lengths are in millimetres; font sizes are in points.

use serde::Serialize;

/// An RGB colour with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Black.
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    /// White.
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Grey with equal channels.
    pub const fn gray(level: u8) -> Self {
        Rgb(level, level, level)
    }

    /// Channels scaled to 0.0..=1.0 for PDF colour operators.
    pub fn to_unit(self) -> [f32; 3] {
        [
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
        ]
    }
}

/// Standard PDF font faces available to the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Face {
    /// Helvetica regular
    Helvetica,
    /// Helvetica bold
    HelveticaBold,
    /// Helvetica oblique
    HelveticaOblique,
    /// Times roman
    TimesRoman,
}

impl Face {
    /// Every face, in resource order.
    pub const ALL: [Face; 4] = [
        Face::Helvetica,
        Face::HelveticaBold,
        Face::HelveticaOblique,
        Face::TimesRoman,
    ];

    /// PostScript name of the standard font.
    pub fn base_font(self) -> &'static str {
        match self {
            Face::Helvetica => "Helvetica",
            Face::HelveticaBold => "Helvetica-Bold",
            Face::HelveticaOblique => "Helvetica-Oblique",
            Face::TimesRoman => "Times-Roman",
        }
    }

    /// Name of the font in the page resource dictionary.
    pub fn resource_name(self) -> &'static str {
        match self {
            Face::Helvetica => "F1",
            Face::HelveticaBold => "F2",
            Face::HelveticaOblique => "F3",
            Face::TimesRoman => "F4",
        }
    }
}

/// Font face, size and colour for one kind of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font face
    pub face: Face,
    /// Size in points
    pub size: f32,
    /// Fill colour
    pub color: Rgb,
}

impl TextStyle {
    /// Create a text style.
    pub const fn new(face: Face, size: f32, color: Rgb) -> Self {
        Self { face, size, color }
    }
}

/// Typographic role of the text being emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontRole {
    /// Issue date line under the banner
    Title,
    /// Section banner title
    SectionHeader,
    /// Story headline
    Headline,
    /// Body text
    #[default]
    Body,
}

/// Text styles per role.
#[derive(Debug, Clone, PartialEq)]
pub struct Typography {
    /// Issue date line
    pub title: TextStyle,
    /// Section titles
    pub section_header: TextStyle,
    /// Story headlines
    pub headline: TextStyle,
    /// Body text
    pub body: TextStyle,
}

impl Typography {
    /// Style for a role.
    pub fn style(&self, role: FontRole) -> TextStyle {
        match role {
            FontRole::Title => self.title,
            FontRole::SectionHeader => self.section_header,
            FontRole::Headline => self.headline,
            FontRole::Body => self.body,
        }
    }
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            title: TextStyle::new(Face::HelveticaBold, 14.0, Rgb::gray(100)),
            section_header: TextStyle::new(Face::HelveticaBold, 20.0, Rgb(227, 18, 11)),
            headline: TextStyle::new(Face::HelveticaBold, 16.0, Rgb::BLACK),
            body: TextStyle::new(Face::TimesRoman, 14.0, Rgb::gray(20)),
        }
    }
}

/// Page size and margins.
#[derive(Debug, Clone, PartialEq)]
pub struct PageGeometry {
    /// Page width
    pub width: f32,
    /// Page height
    pub height: f32,
    /// Left margin
    pub left_margin: f32,
    /// Top margin
    pub top_margin: f32,
    /// Right margin
    pub right_margin: f32,
    /// Distance from the bottom edge that triggers a page break
    pub bottom_margin: f32,
    /// Inner padding of a text cell
    pub cell_margin: f32,
    /// Stroke width for rules
    pub line_width: f32,
}

impl PageGeometry {
    /// A5 portrait with the digest's margins.
    pub fn a5() -> Self {
        Self {
            width: 148.0,
            height: 210.0,
            left_margin: 14.0,
            top_margin: 18.0,
            right_margin: 14.0,
            bottom_margin: 18.0,
            cell_margin: 1.0,
            line_width: 0.2,
        }
    }

    /// A4 portrait with the same margins.
    pub fn a4() -> Self {
        Self {
            width: 210.0,
            height: 297.0,
            ..Self::a5()
        }
    }

    /// Cursor position past which the next line goes to a new page.
    pub fn break_trigger(&self) -> f32 {
        self.height - self.bottom_margin
    }

    /// Width available to a cell starting at `left`.
    pub fn text_width(&self, left: f32) -> f32 {
        self.width - self.right_margin - left
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a5()
    }
}

/// Fixed page chrome drawn on every page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageChrome {
    /// Text centred in the top banner
    pub banner_title: String,
    /// Banner fill colour
    pub banner_color: Rgb,
    /// Banner title style
    pub banner_style: TextStyle,
    /// Banner height
    pub banner_height: f32,
    /// Top of the banner title cell
    pub banner_text_top: f32,
    /// Height of the banner title cell
    pub banner_cell_height: f32,
    /// Page number style
    pub footer_style: TextStyle,
    /// Distance of the footer cell from the bottom edge
    pub footer_offset: f32,
    /// Height of the footer cell
    pub footer_cell_height: f32,
}

impl PageChrome {
    /// Cursor position where content starts below the banner.
    pub fn content_top(&self) -> f32 {
        self.banner_text_top + self.banner_height
    }

    /// Footer text for a 1-based page number.
    pub fn footer_text(&self, page_number: u32) -> String {
        format!("Page {}", page_number)
    }
}

impl Default for PageChrome {
    fn default() -> Self {
        Self {
            banner_title: "The Weekly Digest".to_string(),
            banner_color: Rgb(227, 18, 11),
            banner_style: TextStyle::new(Face::HelveticaBold, 24.0, Rgb::WHITE),
            banner_height: 22.0,
            banner_text_top: 6.0,
            banner_cell_height: 12.0,
            footer_style: TextStyle::new(Face::HelveticaOblique, 10.0, Rgb::gray(128)),
            footer_offset: 16.0,
            footer_cell_height: 10.0,
        }
    }
}

/// Vertical rhythm of the rendered elements.
#[derive(Debug, Clone, PartialEq)]
pub struct Spacing {
    /// Height of the issue date cell
    pub issue_date_height: f32,
    /// Gap after the issue date line
    pub after_issue_date: f32,
    /// Gap before a section title
    pub before_section: f32,
    /// Height of the section title cell
    pub section_title_height: f32,
    /// Gap after the rule under a section title
    pub after_section_rule: f32,
    /// Line height of headlines
    pub headline_line_height: f32,
    /// Gap after a headline
    pub after_headline: f32,
    /// Line height of body text
    pub body_line_height: f32,
    /// Extra left indent of body text
    pub body_indent: f32,
    /// Gap after a body line
    pub after_body: f32,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            issue_date_height: 12.0,
            after_issue_date: 6.0,
            before_section: 10.0,
            section_title_height: 12.0,
            after_section_rule: 6.0,
            headline_line_height: 8.0,
            after_headline: 3.0,
            body_line_height: 8.0,
            body_indent: 5.0,
            after_body: 8.0,
        }
    }
}

/// Options for composing a digest document.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposeOptions {
    /// Product name used as the output file prefix
    pub product_name: String,

    /// Prefix of the issue date line
    pub issue_date_prefix: String,

    /// Page size and margins
    pub geometry: PageGeometry,

    /// Banner and footer
    pub chrome: PageChrome,

    /// Text styles
    pub typography: Typography,

    /// Vertical spacing
    pub spacing: Spacing,
}

impl ComposeOptions {
    /// Create new compose options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the product name.
    pub fn with_product_name(mut self, name: impl Into<String>) -> Self {
        self.product_name = name.into();
        self
    }

    /// Set the banner title.
    pub fn with_banner_title(mut self, title: impl Into<String>) -> Self {
        self.chrome.banner_title = title.into();
        self
    }

    /// Set the issue date prefix.
    pub fn with_issue_date_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.issue_date_prefix = prefix.into();
        self
    }

    /// Set the page geometry.
    pub fn with_geometry(mut self, geometry: PageGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Set the page chrome.
    pub fn with_chrome(mut self, chrome: PageChrome) -> Self {
        self.chrome = chrome;
        self
    }

    /// Set the typography.
    pub fn with_typography(mut self, typography: Typography) -> Self {
        self.typography = typography;
        self
    }

    /// Set the spacing.
    pub fn with_spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            product_name: "Economist_Summary".to_string(),
            issue_date_prefix: "Issue Date: ".to_string(),
            geometry: PageGeometry::default(),
            chrome: PageChrome::default(),
            typography: Typography::default(),
            spacing: Spacing::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_options_builder() {
        let options = ComposeOptions::new()
            .with_product_name("Digest")
            .with_banner_title("Morning Brief")
            .with_issue_date_prefix("Edition: ")
            .with_geometry(PageGeometry::a4());

        assert_eq!(options.product_name, "Digest");
        assert_eq!(options.chrome.banner_title, "Morning Brief");
        assert_eq!(options.issue_date_prefix, "Edition: ");
        assert_eq!(options.geometry.width, 210.0);
        assert_eq!(options.geometry.left_margin, 14.0);
    }

    #[test]
    fn test_geometry_a5() {
        let g = PageGeometry::a5();
        assert_eq!(g.break_trigger(), 192.0);
        assert_eq!(g.text_width(14.0), 120.0);
        assert_eq!(g.text_width(19.0), 115.0);
    }

    #[test]
    fn test_chrome_defaults() {
        let chrome = PageChrome::default();
        assert_eq!(chrome.content_top(), 28.0);
        assert_eq!(chrome.footer_text(3), "Page 3");
    }

    #[test]
    fn test_typography_roles() {
        let t = Typography::default();
        assert_eq!(t.style(FontRole::Body).face, Face::TimesRoman);
        assert_eq!(t.style(FontRole::SectionHeader).size, 20.0);
        assert_eq!(t.style(FontRole::Headline).color, Rgb::BLACK);
    }

    #[test]
    fn test_rgb_to_unit() {
        assert_eq!(Rgb::WHITE.to_unit(), [1.0, 1.0, 1.0]);
        assert_eq!(Rgb::BLACK.to_unit(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_face_resources_unique() {
        let names: std::collections::HashSet<_> =
            Face::ALL.iter().map(|f| f.resource_name()).collect();
        assert_eq!(names.len(), Face::ALL.len());
    }
}
