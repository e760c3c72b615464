//! Theme record
//!
//! A [`Theme`] is a passive record of widget style defaults. Menus share
//! their theme as `Rc<Theme>` and never mutate it; widget factories read it
//! to fill every style attribute the caller left out.

use crate::tokens::*;
use carta_core::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Theme loading and validation errors
#[derive(Error, Debug)]
pub enum ThemeError {
    /// The TOML document could not be parsed
    #[error("failed to parse theme: {0}")]
    Parse(#[from] toml::de::Error),

    /// The theme could not be written as TOML
    #[error("failed to serialize theme: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A field holds a value no widget can use
    #[error("invalid theme field `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Default style values for every widget attribute
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Display name of the theme
    pub name: String,

    /// Menu background
    pub background_color: Background,

    /// Text cursor color of input widgets
    pub cursor_color: Color,
    /// Text selection color of input widgets
    pub cursor_selection_color: Color,
    /// Cursor blink interval in milliseconds
    pub cursor_switch_ms: u64,

    /// Font color of readonly widgets
    pub readonly_color: Color,
    /// Font color of readonly widgets when selected
    pub readonly_selected_color: Color,
    /// Font color of the selected widget
    pub selection_color: Color,

    pub widget_alignment: Align,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub widget_background_color: Option<Background>,
    pub widget_background_inflate: (f32, f32),
    pub widget_border_color: Color,
    pub widget_border_inflate: (u32, u32),
    pub widget_border_width: u32,
    /// Font name or path handed to the renderer
    pub widget_font: String,
    pub widget_font_antialias: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub widget_font_background_color: Option<Color>,
    /// Copy the menu background color behind widget text when no font
    /// background is set
    pub widget_font_background_color_from_menu: bool,
    pub widget_font_color: Color,
    pub widget_font_size: u32,
    pub widget_margin: Margin,
    pub widget_padding: Padding,
    pub widget_selection_effect: SelectionEffect,
    pub widget_shadow: bool,
    pub widget_shadow_color: Color,
    pub widget_shadow_offset: f32,
    pub widget_shadow_position: ShadowPosition,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "Default".to_string(),
            background_color: Background::Color(Color::from_rgb8(220, 220, 220)),
            cursor_color: Color::BLACK,
            cursor_selection_color: Color::from_rgba8(30, 30, 30, 120),
            cursor_switch_ms: 1000,
            readonly_color: Color::from_rgb8(120, 120, 120),
            readonly_selected_color: Color::from_rgb8(190, 190, 190),
            selection_color: Color::WHITE,
            widget_alignment: Align::Center,
            widget_background_color: None,
            widget_background_inflate: (0.0, 0.0),
            widget_border_color: Color::BLACK,
            widget_border_inflate: (0, 0),
            widget_border_width: 0,
            widget_font: "opensans".to_string(),
            widget_font_antialias: true,
            widget_font_background_color: None,
            widget_font_background_color_from_menu: false,
            widget_font_color: Color::from_rgb8(70, 70, 70),
            widget_font_size: 30,
            widget_margin: Margin::new(0.0, 0.0),
            widget_padding: Padding::symmetric(4.0, 8.0),
            widget_selection_effect: SelectionEffect::highlight(),
            widget_shadow: false,
            widget_shadow_color: Color::BLACK,
            widget_shadow_offset: 2.0,
            widget_shadow_position: ShadowPosition::NorthWest,
        }
    }
}

impl Theme {
    /// Parse a theme from TOML; missing fields keep their defaults
    pub fn from_toml_str(source: &str) -> Result<Self, ThemeError> {
        let theme: Theme = toml::from_str(source)?;
        theme.validate()?;
        tracing::debug!("loaded theme {:?}", theme.name);
        Ok(theme)
    }

    /// Write the theme as TOML
    pub fn to_toml_string(&self) -> Result<String, ThemeError> {
        Ok(toml::to_string(self)?)
    }

    /// The menu background color, when the menu background is a flat color
    pub fn menu_background_color(&self) -> Option<Color> {
        self.background_color.as_color()
    }

    /// Check that every default is usable by the widget factory
    pub fn validate(&self) -> Result<(), ThemeError> {
        let colors = [
            ("cursor_color", self.cursor_color),
            ("cursor_selection_color", self.cursor_selection_color),
            ("readonly_color", self.readonly_color),
            ("readonly_selected_color", self.readonly_selected_color),
            ("selection_color", self.selection_color),
            ("widget_border_color", self.widget_border_color),
            ("widget_font_color", self.widget_font_color),
            ("widget_shadow_color", self.widget_shadow_color),
        ];
        for (field, color) in colors {
            if !color.is_well_formed() {
                return Err(invalid(field, format!("malformed color {color:?}")));
            }
        }
        if self.widget_font_size == 0 {
            return Err(invalid("widget_font_size", "must be greater than zero".into()));
        }
        if self.widget_font.is_empty() {
            return Err(invalid("widget_font", "must not be empty".into()));
        }
        if !self.widget_margin.is_valid() {
            return Err(invalid("widget_margin", "components must be non-negative".into()));
        }
        if !self.widget_padding.is_valid() {
            return Err(invalid("widget_padding", "components must be non-negative".into()));
        }
        let (ix, iy) = self.widget_background_inflate;
        if !(ix >= 0.0 && iy >= 0.0) {
            return Err(invalid(
                "widget_background_inflate",
                "components must be non-negative".into(),
            ));
        }
        if !(self.widget_shadow_offset.is_finite() && self.widget_shadow_offset >= 0.0) {
            return Err(invalid("widget_shadow_offset", "must be non-negative".into()));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ThemeError {
    ThemeError::Invalid { field, reason }
}
