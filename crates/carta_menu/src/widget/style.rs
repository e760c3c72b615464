//! Applied widget style

use carta_core::Color;
use carta_theme::{Align, Background, Margin, Padding, SelectionEffect, ShadowPosition};

use crate::attributes::AttributeBundle;

/// Border drawn around the widget
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Border {
    pub width: u32,
    pub color: Color,
    pub inflate: (u32, u32),
}

/// Font used to draw the widget title
#[derive(Clone, Debug, PartialEq)]
pub struct FontStyle {
    pub name: String,
    pub size: u32,
    pub color: Color,
    pub background: Option<Color>,
    pub antialias: bool,
    pub selected_color: Color,
    pub readonly_color: Color,
    pub readonly_selected_color: Color,
}

/// Text shadow
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextShadow {
    pub enabled: bool,
    pub color: Color,
    pub position: ShadowPosition,
    pub offset: f32,
}

impl TextShadow {
    /// Shadow displacement in px, zero when disabled
    pub fn displacement(&self) -> (f32, f32) {
        if !self.enabled {
            return (0.0, 0.0);
        }
        let (dx, dy) = self.position.direction();
        (dx * self.offset, dy * self.offset)
    }
}

/// Style a widget carries once configured
#[derive(Clone, Debug, PartialEq)]
pub struct WidgetStyle {
    pub align: Align,
    pub background: Option<Background>,
    pub background_inflate: (f32, f32),
    pub border: Border,
    pub font: FontStyle,
    pub margin: Margin,
    pub padding: Padding,
    pub selection_effect: SelectionEffect,
    pub shadow: TextShadow,
}

impl WidgetStyle {
    /// Font color for the current widget state
    pub fn font_color(&self, selected: bool, readonly: bool) -> Color {
        match (readonly, selected) {
            (true, true) => self.font.readonly_selected_color,
            (true, false) => self.font.readonly_color,
            (false, true) => self.font.selected_color,
            (false, false) => self.font.color,
        }
    }
}

impl From<AttributeBundle> for WidgetStyle {
    fn from(bundle: AttributeBundle) -> Self {
        Self {
            align: bundle.align,
            background: bundle.background_color,
            background_inflate: bundle.background_inflate,
            border: Border {
                width: bundle.border_width,
                color: bundle.border_color,
                inflate: bundle.border_inflate,
            },
            font: FontStyle {
                name: bundle.font_name,
                size: bundle.font_size,
                color: bundle.font_color,
                background: bundle.font_background_color,
                antialias: bundle.font_antialias,
                selected_color: bundle.selection_color,
                readonly_color: bundle.readonly_color,
                readonly_selected_color: bundle.readonly_selected_color,
            },
            margin: bundle.margin,
            padding: bundle.padding,
            selection_effect: bundle.selection_effect,
            shadow: TextShadow {
                enabled: bundle.shadow,
                color: bundle.shadow_color,
                position: bundle.shadow_position,
                offset: bundle.shadow_offset,
            },
        }
    }
}
