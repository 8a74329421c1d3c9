#![forbid(unsafe_code)]

//! Label handles that price segments are pushed onto.

use pricetext_style::{Color, FontStyle};

/// A single-line text element owned by a composite widget.
///
/// Hosts implement this for their real text widgets. Every setter replaces
/// the previous value; there is no partial styling.
pub trait Label {
    /// Replace the displayed text.
    fn set_text(&mut self, text: &str);
    /// Set the text size in pixels.
    fn set_text_size(&mut self, px: f32);
    fn set_text_color(&mut self, color: Color);
    fn set_font_style(&mut self, style: FontStyle);
}

impl<L: Label + ?Sized> Label for &mut L {
    fn set_text(&mut self, text: &str) {
        (**self).set_text(text);
    }

    fn set_text_size(&mut self, px: f32) {
        (**self).set_text_size(px);
    }

    fn set_text_color(&mut self, color: Color) {
        (**self).set_text_color(color);
    }

    fn set_font_style(&mut self, style: FontStyle) {
        (**self).set_font_style(style);
    }
}

impl<L: Label + ?Sized> Label for Box<L> {
    fn set_text(&mut self, text: &str) {
        (**self).set_text(text);
    }

    fn set_text_size(&mut self, px: f32) {
        (**self).set_text_size(px);
    }

    fn set_text_color(&mut self, color: Color) {
        (**self).set_text_color(color);
    }

    fn set_font_style(&mut self, style: FontStyle) {
        (**self).set_font_style(style);
    }
}

/// Labels whose current text can be read back.
pub trait ReadLabel: Label {
    fn text(&self) -> &str;
}

/// An in-memory label that records the last value of every property.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextLabel {
    text: String,
    text_size: f32,
    color: Color,
    font_style: FontStyle,
}

impl TextLabel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn text_size(&self) -> f32 {
        self.text_size
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn font_style(&self) -> FontStyle {
        self.font_style
    }
}

impl Label for TextLabel {
    fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.text);
    }

    fn set_text_size(&mut self, px: f32) {
        self.text_size = px;
    }

    fn set_text_color(&mut self, color: Color) {
        self.color = color;
    }

    fn set_font_style(&mut self, style: FontStyle) {
        self.font_style = style;
    }
}

impl ReadLabel for TextLabel {
    fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_label_records_last_values() {
        let mut label = TextLabel::new();
        label.set_text("12");
        label.set_text("34");
        label.set_text_size(24.0);
        label.set_text_color(Color::RED);
        label.set_font_style(FontStyle::Bold);

        assert_eq!(label.text(), "34");
        assert_eq!(label.text_size(), 24.0);
        assert_eq!(label.color(), Color::RED);
        assert_eq!(label.font_style(), FontStyle::Bold);
    }

    fn push_text<L: Label>(mut label: L, text: &str) {
        label.set_text(text);
    }

    #[test]
    fn borrowed_and_boxed_labels_forward() {
        let mut inner = TextLabel::new();
        push_text(&mut inner, "via ref");
        assert_eq!(inner.text(), "via ref");

        let mut boxed = Box::new(TextLabel::new());
        push_text(&mut boxed, "via box");
        assert_eq!(boxed.text(), "via box");
    }
}
