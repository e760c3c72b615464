//! Built-in theme presets.

use crate::theme::Theme;
use crate::tokens::*;
use carta_core::Color;
use std::fmt::{Display, Formatter};

/// Built-in theme preset catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemePreset {
    /// Light grey theme used when nothing else is configured.
    #[default]
    Default,
    /// Pale blue theme.
    Blue,
    /// Dark theme with light text.
    Dark,
    /// Muted green theme.
    Green,
    /// Saturated orange theme.
    Orange,
    /// Solarized light palette.
    Solarized,
}

impl ThemePreset {
    /// Stable preset id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Blue => "blue",
            Self::Dark => "dark",
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Solarized => "solarized",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Blue => "Blue",
            Self::Dark => "Dark",
            Self::Green => "Green",
            Self::Orange => "Orange",
            Self::Solarized => "Solarized",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [ThemePreset] {
        const PRESETS: [ThemePreset; 6] = [
            ThemePreset::Default,
            ThemePreset::Blue,
            ThemePreset::Dark,
            ThemePreset::Green,
            ThemePreset::Orange,
            ThemePreset::Solarized,
        ];
        &PRESETS
    }

    /// Look a preset up by its stable id.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|p| p.id() == id)
    }

    /// Build the theme for this preset.
    pub fn theme(self) -> Theme {
        match self {
            Self::Default => Theme::default(),
            Self::Blue => palette_theme(
                self,
                Palette {
                    background: Color::from_rgb8(228, 230, 246),
                    font: Color::from_rgb8(62, 62, 62),
                    selection: Color::from_rgb8(62, 149, 195),
                    readonly: Color::from_rgb8(130, 130, 150),
                    cursor: Color::BLACK,
                },
            ),
            Self::Dark => palette_theme(
                self,
                Palette {
                    background: Color::from_rgb8(40, 41, 35),
                    font: Color::from_rgb8(200, 200, 200),
                    selection: Color::WHITE,
                    readonly: Color::from_rgb8(120, 120, 120),
                    cursor: Color::WHITE,
                },
            ),
            Self::Green => palette_theme(
                self,
                Palette {
                    background: Color::from_rgb8(186, 214, 177),
                    font: Color::from_rgb8(70, 70, 70),
                    selection: Color::from_rgb8(125, 121, 114),
                    readonly: Color::from_rgb8(120, 140, 115),
                    cursor: Color::BLACK,
                },
            ),
            Self::Orange => {
                let mut theme = palette_theme(
                    self,
                    Palette {
                        background: Color::from_rgb8(228, 100, 36),
                        font: Color::from_rgb8(50, 50, 50),
                        selection: Color::WHITE,
                        readonly: Color::from_rgb8(160, 80, 40),
                        cursor: Color::BLACK,
                    },
                );
                theme.widget_selection_effect = SelectionEffect::left_arrow();
                theme
            }
            Self::Solarized => {
                let mut theme = palette_theme(
                    self,
                    Palette {
                        background: Color::from_rgb8(239, 231, 211),
                        font: Color::from_rgb8(102, 122, 130),
                        selection: Color::from_rgb8(207, 62, 132),
                        readonly: Color::from_rgb8(147, 161, 161),
                        cursor: Color::BLACK,
                    },
                );
                theme.widget_font_background_color_from_menu = true;
                theme
            }
        }
    }
}

impl Display for ThemePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Convenience free function for ergonomic imports.
pub fn preset_theme(preset: ThemePreset) -> Theme {
    preset.theme()
}

#[derive(Clone, Copy)]
struct Palette {
    background: Color,
    font: Color,
    selection: Color,
    readonly: Color,
    cursor: Color,
}

fn palette_theme(preset: ThemePreset, palette: Palette) -> Theme {
    Theme {
        name: preset.display_name().to_string(),
        background_color: Background::Color(palette.background),
        cursor_color: palette.cursor,
        readonly_color: palette.readonly,
        readonly_selected_color: Color::lerp(&palette.readonly, &palette.selection, 0.5),
        selection_color: palette.selection,
        widget_font_color: palette.font,
        ..Theme::default()
    }
}
