//! The shared stylesheet applied to converted documents.
//!
//! All callers share one stylesheet value, so every generated document uses
//! the same style table.

use genpdf::style::{Color, Style};

const DARK_BLUE: Color = Color::Rgb(0, 0, 139);
const BLUE: Color = Color::Rgb(0, 0, 255);
const CODE_GRAY: Color = Color::Rgb(64, 64, 64);

/// Named styles for each block kind plus the glyph prefixed to bullet items.
#[derive(Clone, Debug)]
pub struct StyleSheet {
    title: Style,
    heading1: Style,
    heading2: Style,
    body: Style,
    code: Style,
    bullet_glyph: String,
}

impl StyleSheet {
    /// The documentation stylesheet: dark-blue bold title and headings,
    /// regular body text, and smaller gray preformatted text.
    pub fn documentation() -> Self {
        let mut title = Style::new();
        title.set_bold();
        title.set_font_size(20);
        title.set_color(DARK_BLUE);

        let mut heading1 = Style::new();
        heading1.set_bold();
        heading1.set_font_size(16);
        heading1.set_color(DARK_BLUE);

        let mut heading2 = Style::new();
        heading2.set_bold();
        heading2.set_font_size(14);
        heading2.set_color(BLUE);

        let mut body = Style::new();
        body.set_font_size(10);

        let mut code = Style::new();
        code.set_font_size(9);
        code.set_color(CODE_GRAY);

        Self {
            title,
            heading1,
            heading2,
            body,
            code,
            bullet_glyph: "\u{2022}".to_owned(),
        }
    }

    /// Returns the style for title blocks.
    pub fn title(&self) -> Style {
        self.title.clone()
    }

    /// Returns the style for level-1 heading blocks.
    pub fn heading1(&self) -> Style {
        self.heading1.clone()
    }

    /// Returns the style for level-2 heading blocks.
    pub fn heading2(&self) -> Style {
        self.heading2.clone()
    }

    /// Returns the style for body, bullet and numbered-item blocks.
    pub fn body(&self) -> Style {
        self.body.clone()
    }

    /// Returns the style for preformatted code blocks.
    pub fn code(&self) -> Style {
        self.code.clone()
    }

    /// Returns the glyph prefixed to bullet items by the renderer.
    pub fn bullet_glyph(&self) -> &str {
        &self.bullet_glyph
    }

    /// Replaces the bullet glyph and returns the updated stylesheet.
    pub fn with_bullet_glyph(mut self, glyph: impl Into<String>) -> Self {
        self.bullet_glyph = glyph.into();
        self
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::documentation()
    }
}

#[cfg(test)]
mod tests {
    use super::StyleSheet;

    #[test]
    fn documentation_styles_descend_in_size() {
        let styles = StyleSheet::documentation();
        assert!(styles.title().font_size() > styles.heading1().font_size());
        assert!(styles.heading1().font_size() > styles.heading2().font_size());
        assert!(styles.body().font_size() > styles.code().font_size());
    }

    #[test]
    fn bullet_glyph_is_configurable() {
        let styles = StyleSheet::default().with_bullet_glyph("-");
        assert_eq!(styles.bullet_glyph(), "-");
    }
}
