//! Single-line text input
//!
//! Editing is char based: the cursor is an index into the chars of the
//! value, never a byte offset. Typed text is filtered by the input type,
//! the optional set of valid chars and `maxchar`.

use carta_core::{Color, Key};
use serde_json::{json, Value};

use crate::options::Extras;

/// Accepted data type
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputType {
    #[default]
    Text,
    Integer,
    Float,
}

impl InputType {
    /// Whether `text` is a complete value of this type (empty is allowed)
    pub fn accepts(self, text: &str) -> bool {
        if text.is_empty() {
            return true;
        }
        match self {
            Self::Text => true,
            Self::Integer => text.parse::<i64>().is_ok(),
            Self::Float => text.parse::<f64>().is_ok_and(f64::is_finite),
        }
    }

    /// Whether `c` may be inserted at `position` into `current`
    fn allows(self, current: &str, position: usize, c: char) -> bool {
        match self {
            Self::Text => !c.is_control(),
            Self::Integer => c.is_ascii_digit() || (c == '-' && position == 0 && !current.starts_with('-')),
            Self::Float => {
                c.is_ascii_digit()
                    || (c == '-' && position == 0 && !current.starts_with('-'))
                    || (c == '.' && !current.contains('.'))
            }
        }
    }
}

/// Cursor look, taken from the theme
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorStyle {
    pub color: Color,
    pub selection_color: Color,
    /// Blink interval
    pub switch_ms: u64,
}

/// `(current text, extras)`
pub type TextCallback = Box<dyn FnMut(&str, &Extras)>;

/// Editing limits and flags
#[derive(Clone, Debug, PartialEq)]
pub struct TextInputOptions {
    pub input_type: InputType,
    pub password: bool,
    /// 0 is unlimited
    pub maxchar: usize,
    /// Visible chars, 0 is unlimited
    pub maxwidth: usize,
    pub input_underline: String,
    pub input_underline_len: usize,
    pub input_underline_vmargin: u32,
    pub tab_size: usize,
    pub copy_paste_enable: bool,
    pub cursor_selection_enable: bool,
    pub valid_chars: Option<Vec<char>>,
}

impl Default for TextInputOptions {
    fn default() -> Self {
        Self {
            input_type: InputType::Text,
            password: false,
            maxchar: 0,
            maxwidth: 0,
            input_underline: String::new(),
            input_underline_len: 0,
            input_underline_vmargin: 0,
            tab_size: 4,
            copy_paste_enable: true,
            cursor_selection_enable: true,
            valid_chars: None,
        }
    }
}

pub struct TextInput {
    value: Vec<char>,
    cursor: usize,
    options: TextInputOptions,
    cursor_style: CursorStyle,
    onchange: Option<TextCallback>,
    onreturn: Option<TextCallback>,
    extras: Extras,
}

impl TextInput {
    pub(crate) fn new(default: &str, options: TextInputOptions, cursor_style: CursorStyle) -> Self {
        let value: Vec<char> = default.chars().collect();
        Self {
            cursor: value.len(),
            value,
            options,
            cursor_style,
            onchange: None,
            onreturn: None,
            extras: Extras::new(),
        }
    }

    pub(crate) fn with_callbacks(
        mut self,
        onchange: Option<TextCallback>,
        onreturn: Option<TextCallback>,
        extras: Extras,
    ) -> Self {
        self.onchange = onchange;
        self.onreturn = onreturn;
        self.extras = extras;
        self
    }

    pub fn text(&self) -> String {
        self.value.iter().collect()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn options(&self) -> &TextInputOptions {
        &self.options
    }

    pub fn cursor_style(&self) -> &CursorStyle {
        &self.cursor_style
    }

    pub fn extras(&self) -> &Extras {
        &self.extras
    }

    /// Text as drawn: masked for passwords, clipped to `maxwidth` around the cursor
    pub fn display_text(&self) -> String {
        let chars: Vec<char> = if self.options.password {
            vec!['*'; self.value.len()]
        } else {
            self.value.clone()
        };
        let maxwidth = self.options.maxwidth;
        if maxwidth == 0 || chars.len() <= maxwidth {
            return chars.into_iter().collect();
        }
        let end = self.cursor.max(maxwidth).min(chars.len());
        chars[end - maxwidth..end].iter().collect()
    }

    /// Underline drawn below the text
    pub fn underline(&self) -> String {
        let len = match self.options.input_underline_len {
            0 => self.options.maxwidth.max(self.options.maxchar),
            n => n,
        };
        self.options.input_underline.repeat(len)
    }

    /// Typed value: a string, or a number for numeric inputs (empty is 0)
    pub fn value(&self) -> Value {
        let text = self.text();
        match self.options.input_type {
            InputType::Text => Value::String(text),
            InputType::Integer => json!(text.parse::<i64>().unwrap_or(0)),
            InputType::Float => json!(text.parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0)),
        }
    }

    /// Insert `c` at the cursor if allowed
    pub fn insert_char(&mut self, c: char) -> bool {
        if !self.can_insert(c) {
            return false;
        }
        self.value.insert(self.cursor, c);
        self.cursor += 1;
        self.fire_change();
        true
    }

    /// Insert pasted text; rejected as a whole if any char is invalid
    pub fn paste(&mut self, text: &str) -> bool {
        if !self.options.copy_paste_enable {
            return false;
        }
        let before = (self.value.clone(), self.cursor);
        let mut inserted = false;
        for c in text.chars().filter(|c| *c != '\n' && *c != '\r') {
            if self.at_capacity() {
                break;
            }
            if !self.can_insert(c) {
                (self.value, self.cursor) = before;
                return false;
            }
            self.value.insert(self.cursor, c);
            self.cursor += 1;
            inserted = true;
        }
        if inserted {
            self.fire_change();
        }
        inserted
    }

    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.value.remove(self.cursor);
        self.fire_change();
        true
    }

    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.value.len() {
            return false;
        }
        self.value.remove(self.cursor);
        self.fire_change();
        true
    }

    pub fn apply(&mut self) {
        let text = self.text();
        if let Some(callback) = self.onreturn.as_mut() {
            callback(&text, &self.extras);
        }
    }

    pub(crate) fn handle_key(&mut self, key: &Key) -> bool {
        match key {
            Key::Char(c) => self.insert_char(*c),
            Key::Paste(text) => self.paste(text),
            Key::Backspace => self.backspace(),
            Key::Delete => self.delete(),
            Key::Left if self.cursor > 0 => {
                self.cursor -= 1;
                true
            }
            Key::Right if self.cursor < self.value.len() => {
                self.cursor += 1;
                true
            }
            Key::Tab if self.options.input_type == InputType::Text => {
                let mut changed = false;
                for _ in 0..self.options.tab_size {
                    if !self.can_insert(' ') {
                        break;
                    }
                    self.value.insert(self.cursor, ' ');
                    self.cursor += 1;
                    changed = true;
                }
                if changed {
                    self.fire_change();
                }
                changed
            }
            Key::Return => {
                self.apply();
                true
            }
            _ => false,
        }
    }

    fn at_capacity(&self) -> bool {
        self.options.maxchar != 0 && self.value.len() >= self.options.maxchar
    }

    fn can_insert(&self, c: char) -> bool {
        if self.at_capacity() {
            return false;
        }
        if let Some(valid) = &self.options.valid_chars {
            if !valid.contains(&c) {
                return false;
            }
        }
        let current = self.text();
        self.options.input_type.allows(&current, self.cursor, c)
    }

    fn fire_change(&mut self) {
        let text = self.text();
        if let Some(callback) = self.onchange.as_mut() {
            callback(&text, &self.extras);
        }
    }
}
