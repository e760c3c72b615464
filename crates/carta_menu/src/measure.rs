//! Text metrics
//!
//! Font rasterization lives outside this crate. Menus measure text through
//! a [`TextMeasurer`]; [`MonospaceMeasurer`] is the estimate used when the
//! host provides nothing better.

/// Font metrics provider
pub trait TextMeasurer {
    /// Rendered width of `text` in px
    fn text_width(&self, text: &str, font_name: &str, font_size: u32) -> f32;

    /// Height of one line of text in px
    fn line_height(&self, font_size: u32) -> f32;
}

/// Fixed-advance estimate: every glyph is `advance_ratio * font_size` wide
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospaceMeasurer {
    pub advance_ratio: f32,
    pub line_ratio: f32,
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self {
            advance_ratio: 0.6,
            line_ratio: 1.2,
        }
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn text_width(&self, text: &str, _font_name: &str, font_size: u32) -> f32 {
        text.chars().count() as f32 * font_size as f32 * self.advance_ratio
    }

    fn line_height(&self, font_size: u32) -> f32 {
        font_size as f32 * self.line_ratio
    }
}
