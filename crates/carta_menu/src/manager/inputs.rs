use carta_core::Color;
use serde_json::Value;

use crate::error::{MenuError, Result};
use crate::options::StyleOverrides;
use crate::widget::{
    ColorCallback, ColorInput, ColorInputOptions, ColorMode, ColorValue, CursorStyle, HexFormat,
    InputType, SelectCallback, Selector, SelectorCallback, SelectorItem, SwitchAppearance,
    TextCallback, TextInput, TextInputOptions, ToggleCallback, ToggleSwitch, Widget, WidgetKind,
};

use super::{check_non_negative, check_positive, single_char, WidgetManager};

/// Color input parameters
pub struct ColorInputParams {
    pub color_id: String,
    /// Must match the mode; `None` starts empty
    pub default: Option<ColorValue>,
    pub hex_format: HexFormat,
    /// Channel separator in RGB mode
    pub input_separator: String,
    pub input_underline: String,
    pub input_underline_vmargin: u32,
    /// Width follows the text and the preview only shows for complete colors
    pub dynamic_width: bool,
    pub preview_margin: f32,
    /// Preview width as a factor of the font size
    pub preview_width: f32,
    pub onchange: Option<ColorCallback>,
    pub onreturn: Option<ColorCallback>,
    pub onselect: Option<SelectCallback>,
    pub style: StyleOverrides,
}

impl Default for ColorInputParams {
    fn default() -> Self {
        Self {
            color_id: String::new(),
            default: None,
            hex_format: HexFormat::None,
            input_separator: ",".to_string(),
            input_underline: "_".to_string(),
            input_underline_vmargin: 0,
            dynamic_width: true,
            preview_margin: 10.0,
            preview_width: 3.0,
            onchange: None,
            onreturn: None,
            onselect: None,
            style: StyleOverrides::default(),
        }
    }
}

/// Selector parameters
#[derive(Default)]
pub struct SelectorParams {
    pub selector_id: String,
    /// Index of the initially selected item
    pub default: usize,
    pub onchange: Option<SelectorCallback>,
    pub onreturn: Option<SelectorCallback>,
    pub onselect: Option<SelectCallback>,
    pub style: StyleOverrides,
}

/// Toggle switch parameters
pub struct ToggleSwitchParams {
    pub toggle_id: String,
    /// Initial state, 0 or 1
    pub default: usize,
    pub state_text: (String, String),
    pub state_values: (Value, Value),
    /// Left on state 0 and right on state 1 wrap around
    pub infinite: bool,
    pub appearance: SwitchAppearance,
    pub onchange: Option<ToggleCallback>,
    pub onselect: Option<SelectCallback>,
    pub style: StyleOverrides,
}

impl Default for ToggleSwitchParams {
    fn default() -> Self {
        Self {
            toggle_id: String::new(),
            default: 0,
            state_text: ("Off".to_string(), "On".to_string()),
            state_values: (Value::Bool(false), Value::Bool(true)),
            infinite: false,
            appearance: SwitchAppearance::default(),
            onchange: None,
            onselect: None,
            style: StyleOverrides::default(),
        }
    }
}

/// Text input parameters
pub struct TextInputParams {
    pub textinput_id: String,
    pub default: String,
    pub input_type: InputType,
    /// Masks the text; the default must be empty
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
    /// `None` accepts every char
    pub valid_chars: Option<Vec<char>>,
    pub onchange: Option<TextCallback>,
    pub onreturn: Option<TextCallback>,
    pub onselect: Option<SelectCallback>,
    pub style: StyleOverrides,
}

impl Default for TextInputParams {
    fn default() -> Self {
        Self {
            textinput_id: String::new(),
            default: String::new(),
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
            onchange: None,
            onreturn: None,
            onselect: None,
            style: StyleOverrides::default(),
        }
    }
}

impl WidgetManager<'_> {
    /// Add a color input. Unrecognized style keys are passed to the callbacks.
    pub fn color_input(
        &mut self,
        title: impl Into<String>,
        mode: ColorMode,
        params: ColorInputParams,
    ) -> Result<&mut Widget> {
        let ColorInputParams {
            color_id,
            default,
            hex_format,
            input_separator,
            input_underline,
            input_underline_vmargin,
            dynamic_width,
            preview_margin,
            preview_width,
            onchange,
            onreturn,
            onselect,
            mut style,
        } = params;

        let underline = single_char("input_underline", &input_underline)?;
        let separator = match mode {
            ColorMode::Rgb => {
                let separator = single_char("input_separator", &input_separator)?
                    .ok_or_else(|| MenuError::validation("input_separator", "must not be empty"))?;
                if separator.is_ascii_digit() {
                    return Err(MenuError::validation(
                        "input_separator",
                        "cannot be a digit",
                    ));
                }
                if Some(separator) == underline {
                    return Err(MenuError::validation(
                        "input_separator",
                        "cannot be the same as the underline",
                    ));
                }
                separator
            }
            // Not used in hex mode
            ColorMode::Hex => input_separator.chars().next().unwrap_or(','),
        };
        check_non_negative("preview_margin", preview_margin)?;
        check_positive("preview_width", preview_width)?;
        if let Some(default) = &default {
            check_color_default(mode, default)?;
        }

        let bundle = self.resolve(&mut style)?;
        let extras = style.take_extras();
        let theme = self.menu()?.theme();

        let options = ColorInputOptions {
            separator,
            underline,
            underline_vmargin: input_underline_vmargin,
            hex_format,
            dynamic_width,
            preview_margin,
            preview_width,
            cursor_color: theme.cursor_color,
            cursor_switch_ms: theme.cursor_switch_ms,
        };
        let mut input = ColorInput::new(mode, options).with_callbacks(onchange, onreturn, extras);
        if let Some(default) = &default {
            input.set_default(default);
        }

        let mut widget = Widget::new(color_id, title, WidgetKind::ColorInput(input));
        widget.base_mut().set_onselect(onselect);
        self.configure(&mut widget, bundle)?;
        self.register(widget)
    }

    /// Add a selector over `items`. Unrecognized style keys are passed to the callbacks.
    pub fn selector(
        &mut self,
        title: impl Into<String>,
        items: Vec<SelectorItem>,
        params: SelectorParams,
    ) -> Result<&mut Widget> {
        let SelectorParams {
            selector_id,
            default,
            onchange,
            onreturn,
            onselect,
            mut style,
        } = params;

        if items.is_empty() {
            return Err(MenuError::validation("items", "need at least one item"));
        }
        if default >= items.len() {
            return Err(MenuError::validation(
                "default",
                format!("index {default} is out of range for {} items", items.len()),
            ));
        }

        let bundle = self.resolve(&mut style)?;
        let extras = style.take_extras();

        let selector = Selector::new(items, default).with_callbacks(onchange, onreturn, extras);
        let mut widget = Widget::new(selector_id, title, WidgetKind::Selector(selector));
        widget.base_mut().set_onselect(onselect);
        self.configure(&mut widget, bundle)?;
        self.register(widget)
    }

    /// Add a two-state switch. Unrecognized style keys are passed to `onchange`.
    pub fn toggle_switch(
        &mut self,
        title: impl Into<String>,
        params: ToggleSwitchParams,
    ) -> Result<&mut Widget> {
        let ToggleSwitchParams {
            toggle_id,
            default,
            state_text,
            state_values,
            infinite,
            appearance,
            onchange,
            onselect,
            mut style,
        } = params;

        if default > 1 {
            return Err(MenuError::validation("default", "default value can be 0 or 1"));
        }
        check_appearance(&appearance)?;

        let bundle = self.resolve(&mut style)?;
        let extras = style.take_extras();

        let toggle = ToggleSwitch::new(
            default,
            [state_text.0, state_text.1],
            [state_values.0, state_values.1],
            infinite,
            appearance,
        )
        .with_onchange(onchange, extras);
        let mut widget = Widget::new(toggle_id, title, WidgetKind::ToggleSwitch(toggle));
        widget.base_mut().set_onselect(onselect);
        self.configure(&mut widget, bundle)?;
        self.register(widget)
    }

    /// Add a text input. Unrecognized style keys are passed to the callbacks.
    pub fn text_input(
        &mut self,
        title: impl Into<String>,
        params: TextInputParams,
    ) -> Result<&mut Widget> {
        let TextInputParams {
            textinput_id,
            default,
            input_type,
            password,
            maxchar,
            maxwidth,
            input_underline,
            input_underline_len,
            input_underline_vmargin,
            tab_size,
            copy_paste_enable,
            cursor_selection_enable,
            valid_chars,
            onchange,
            onreturn,
            onselect,
            mut style,
        } = params;

        if password && !default.is_empty() {
            return Err(MenuError::InvalidState(
                "default value must be empty if the input is a password".to_string(),
            ));
        }
        if !input_type.accepts(&default) {
            return Err(MenuError::validation(
                "default",
                format!("{default:?} does not match the input type {input_type:?}"),
            ));
        }
        if maxchar != 0 && default.chars().count() > maxchar {
            return Err(MenuError::validation(
                "default",
                format!("longer than maxchar {maxchar}"),
            ));
        }
        if let Some(valid) = &valid_chars {
            if let Some(c) = default.chars().find(|c| !valid.contains(c)) {
                return Err(MenuError::validation(
                    "default",
                    format!("{c:?} is not a valid char"),
                ));
            }
        }
        single_char("input_underline", &input_underline)?;

        let bundle = self.resolve(&mut style)?;
        let extras = style.take_extras();
        let theme = self.menu()?.theme();
        let cursor = CursorStyle {
            color: theme.cursor_color,
            selection_color: theme.cursor_selection_color,
            switch_ms: theme.cursor_switch_ms,
        };

        let options = TextInputOptions {
            input_type,
            password,
            maxchar,
            maxwidth,
            input_underline,
            input_underline_len,
            input_underline_vmargin,
            tab_size,
            copy_paste_enable,
            cursor_selection_enable,
            valid_chars,
        };
        let input = TextInput::new(&default, options, cursor).with_callbacks(onchange, onreturn, extras);
        let mut widget = Widget::new(textinput_id, title, WidgetKind::TextInput(input));
        widget.base_mut().set_onselect(onselect);
        self.configure(&mut widget, bundle)?;
        self.register(widget)
    }
}

fn check_color_default(mode: ColorMode, default: &ColorValue) -> Result<()> {
    match (mode, default) {
        (ColorMode::Rgb, ColorValue::Rgb(_)) => Ok(()),
        (ColorMode::Hex, ColorValue::Hex(hex)) => {
            if hex.is_empty() || (hex.len() == 7 && Color::parse_hex(hex).is_ok()) {
                Ok(())
            } else {
                Err(MenuError::validation(
                    "default",
                    format!("{hex:?} is not a #RRGGBB color"),
                ))
            }
        }
        _ => Err(MenuError::validation(
            "default",
            format!("value does not match the {mode:?} color mode"),
        )),
    }
}

fn check_appearance(appearance: &SwitchAppearance) -> Result<()> {
    let colors = [
        ("state_color", appearance.state_color.0),
        ("state_color", appearance.state_color.1),
        ("state_text_font_color", appearance.state_text_font_color.0),
        ("state_text_font_color", appearance.state_text_font_color.1),
        ("slider_color", appearance.slider_color),
        ("switch_border_color", appearance.switch_border_color),
    ];
    for (param, color) in colors {
        if !color.is_well_formed() {
            return Err(MenuError::validation(param, format!("malformed color {color:?}")));
        }
    }
    if appearance.state_text_font_size == Some(0) {
        return Err(MenuError::validation(
            "state_text_font_size",
            "font size must be greater than zero",
        ));
    }
    if appearance.slider_thickness == 0 {
        return Err(MenuError::validation(
            "slider_thickness",
            "must be greater than zero",
        ));
    }
    if appearance.width == 0 {
        return Err(MenuError::validation("width", "must be greater than zero"));
    }
    check_positive("switch_height", appearance.switch_height)?;
    check_non_negative("switch_margin", appearance.switch_margin.0)?;
    check_non_negative("switch_margin", appearance.switch_margin.1)?;
    Ok(())
}
