//! Color input with RGB or hex entry and a preview swatch

use carta_core::{Color, Key};
use serde_json::{json, Value};

use crate::options::Extras;

/// Entry format
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorMode {
    /// `r,g,b` channels in `0..=255`
    Rgb,
    /// `#RRGGBB`
    Hex,
}

/// Letter case applied to hex digits
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HexFormat {
    /// Keep what was typed
    #[default]
    None,
    Lower,
    Upper,
}

impl HexFormat {
    fn apply(self, c: char) -> char {
        match self {
            Self::None => c,
            Self::Lower => c.to_ascii_lowercase(),
            Self::Upper => c.to_ascii_uppercase(),
        }
    }
}

/// Initial value of a color input
#[derive(Clone, Debug, PartialEq)]
pub enum ColorValue {
    Rgb([u8; 3]),
    /// `"#RRGGBB"`, or empty
    Hex(String),
}

/// `(current color, extras)`; the color is `None` while incomplete
pub type ColorCallback = Box<dyn FnMut(Option<[u8; 3]>, &Extras)>;

/// Layout settings of the input and its preview
#[derive(Clone, Debug, PartialEq)]
pub struct ColorInputOptions {
    pub separator: char,
    pub underline: Option<char>,
    pub underline_vmargin: u32,
    pub hex_format: HexFormat,
    pub dynamic_width: bool,
    /// Gap between text and preview in px
    pub preview_margin: f32,
    /// Preview width as a factor of the font size
    pub preview_width: f32,
    pub cursor_color: Color,
    pub cursor_switch_ms: u64,
}

pub struct ColorInput {
    mode: ColorMode,
    text: String,
    options: ColorInputOptions,
    onchange: Option<ColorCallback>,
    onreturn: Option<ColorCallback>,
    extras: Extras,
}

impl ColorInput {
    pub(crate) fn new(mode: ColorMode, options: ColorInputOptions) -> Self {
        Self {
            mode,
            text: match mode {
                ColorMode::Rgb => String::new(),
                ColorMode::Hex => "#".to_string(),
            },
            options,
            onchange: None,
            onreturn: None,
            extras: Extras::new(),
        }
    }

    pub(crate) fn with_callbacks(
        mut self,
        onchange: Option<ColorCallback>,
        onreturn: Option<ColorCallback>,
        extras: Extras,
    ) -> Self {
        self.onchange = onchange;
        self.onreturn = onreturn;
        self.extras = extras;
        self
    }

    /// Load the initial value; the factory has checked it matches the mode
    pub(crate) fn set_default(&mut self, value: &ColorValue) {
        self.text = match value {
            ColorValue::Rgb([r, g, b]) => {
                let sep = self.options.separator;
                format!("{r}{sep}{g}{sep}{b}")
            }
            ColorValue::Hex(hex) if hex.is_empty() => "#".to_string(),
            ColorValue::Hex(hex) => hex.chars().map(|c| self.options.hex_format.apply(c)).collect(),
        };
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &ColorInputOptions {
        &self.options
    }

    pub fn extras(&self) -> &Extras {
        &self.extras
    }

    /// Complete color, if the entry holds one
    pub fn color(&self) -> Option<[u8; 3]> {
        match self.mode {
            ColorMode::Rgb => {
                let channels: Vec<u8> = self
                    .text
                    .split(self.options.separator)
                    .map(|part| part.parse::<u8>().ok())
                    .collect::<Option<Vec<_>>>()?;
                match channels.as_slice() {
                    [r, g, b] => Some([*r, *g, *b]),
                    _ => None,
                }
            }
            ColorMode::Hex => {
                if self.text.len() != 7 {
                    return None;
                }
                Color::parse_hex(&self.text).ok().map(|c| c.to_rgb8())
            }
        }
    }

    /// `[r, g, b]` or `null` while incomplete
    pub fn value(&self) -> Value {
        match self.color() {
            Some(rgb) => json!(rgb),
            None => Value::Null,
        }
    }

    /// Preview swatch width in px; zero while the color is incomplete
    pub fn preview_width(&self, font_size: u32) -> f32 {
        if self.color().is_none() && self.options.dynamic_width {
            return 0.0;
        }
        font_size as f32 * self.options.preview_width
    }

    /// Entry plus preview in px, given the width of the typed text
    pub fn content_width(&self, text_width: f32, font_size: u32) -> f32 {
        let preview = self.preview_width(font_size);
        if preview > 0.0 {
            text_width + self.options.preview_margin + preview
        } else {
            text_width
        }
    }

    /// Append a typed char if it keeps the entry well formed
    pub fn push_char(&mut self, c: char) -> bool {
        let accepted = match self.mode {
            ColorMode::Rgb => self.push_rgb(c),
            ColorMode::Hex => self.push_hex(c),
        };
        if accepted {
            self.fire(false);
        }
        accepted
    }

    pub fn backspace(&mut self) -> bool {
        let floor = match self.mode {
            ColorMode::Rgb => 0,
            ColorMode::Hex => 1,
        };
        if self.text.len() <= floor {
            return false;
        }
        self.text.pop();
        self.fire(false);
        true
    }

    pub(crate) fn handle_key(&mut self, key: &Key) -> bool {
        match key {
            Key::Char(c) => self.push_char(*c),
            Key::Paste(text) => {
                let mut changed = false;
                for c in text.chars() {
                    changed |= self.push_char(c);
                }
                changed
            }
            Key::Backspace | Key::Delete => self.backspace(),
            Key::Return => {
                self.fire(true);
                true
            }
            _ => false,
        }
    }

    fn push_rgb(&mut self, c: char) -> bool {
        let sep = self.options.separator;
        let last = self.text.rsplit(sep).next().unwrap_or("");
        if c == sep {
            let separators = self.text.matches(sep).count();
            return if !last.is_empty() && separators < 2 {
                self.text.push(sep);
                true
            } else {
                false
            };
        }
        if !c.is_ascii_digit() {
            return false;
        }
        let candidate = format!("{last}{c}");
        if candidate.len() > 3 || candidate.parse::<u16>().map_or(true, |v| v > 255) {
            return false;
        }
        self.text.push(c);
        true
    }

    fn push_hex(&mut self, c: char) -> bool {
        if self.text.len() >= 7 || !c.is_ascii_hexdigit() {
            return false;
        }
        self.text.push(self.options.hex_format.apply(c));
        true
    }

    fn fire(&mut self, on_return: bool) {
        let color = self.color();
        let callback = if on_return {
            self.onreturn.as_mut()
        } else {
            self.onchange.as_mut()
        };
        if let Some(callback) = callback {
            callback(color, &self.extras);
        }
    }
}
