//! Attribute resolution
//!
//! Merges a widget's [`StyleOverrides`] with its menu's [`Theme`] into a
//! complete, validated [`AttributeBundle`]. Every recognized field is taken
//! out of the overrides as it is resolved, so whatever is left afterwards
//! was not understood and can be checked with [`ensure_consumed`].

use carta_core::Color;
use carta_theme::{Align, Background, Margin, Padding, SelectionEffect, ShadowPosition, Theme};

use crate::error::{MenuError, Result};
use crate::options::StyleOverrides;

/// Resolved generic style attributes for one widget
#[derive(Clone, Debug, PartialEq)]
pub struct AttributeBundle {
    pub align: Align,
    pub background_color: Option<Background>,
    pub background_inflate: (f32, f32),
    pub border_color: Color,
    pub border_inflate: (u32, u32),
    pub border_width: u32,
    pub font_antialias: bool,
    pub font_background_color: Option<Color>,
    pub font_color: Color,
    pub font_name: String,
    pub font_size: u32,
    pub margin: Margin,
    pub padding: Padding,
    pub readonly_color: Color,
    pub readonly_selected_color: Color,
    pub selection_color: Color,
    pub selection_effect: SelectionEffect,
    pub shadow: bool,
    pub shadow_color: Color,
    pub shadow_position: ShadowPosition,
    pub shadow_offset: f32,
}

impl AttributeBundle {
    /// The bundle a widget gets when nothing is overridden
    pub fn from_theme(theme: &Theme) -> Result<Self> {
        resolve(&mut StyleOverrides::default(), theme)
    }
}

/// Resolve the style bundle, consuming every recognized field of `overrides`.
///
/// Nothing is returned on failure; the error names the offending parameter.
pub fn resolve(overrides: &mut StyleOverrides, theme: &Theme) -> Result<AttributeBundle> {
    let align = overrides.align.take().unwrap_or(theme.widget_alignment);

    let background_color = overrides
        .background_color
        .take()
        .unwrap_or_else(|| theme.widget_background_color.clone());
    let mut background_is_color = false;
    if let Some(Background::Color(color)) = &background_color {
        check_color("background_color", *color)?;
        background_is_color = true;
    }

    let background_inflate = overrides
        .background_inflate
        .take()
        .unwrap_or(theme.widget_background_inflate);
    let (ix, iy) = background_inflate;
    if !(ix.is_finite() && iy.is_finite() && ix >= 0.0 && iy >= 0.0) {
        return Err(MenuError::validation(
            "background_inflate",
            "both components must be equal or greater than zero",
        ));
    }

    let border_color = overrides.border_color.take().unwrap_or(theme.widget_border_color);
    check_color("border_color", border_color)?;

    let border_inflate = overrides
        .border_inflate
        .take()
        .unwrap_or(theme.widget_border_inflate);
    let border_width = overrides.border_width.take().unwrap_or(theme.widget_border_width);

    let font_antialias = theme.widget_font_antialias;

    let mut font_background_color = overrides
        .font_background_color
        .take()
        .unwrap_or(theme.widget_font_background_color);
    if font_background_color.is_none()
        && theme.widget_font_background_color_from_menu
        && !background_is_color
    {
        if let Some(menu_color) = theme.menu_background_color() {
            check_color("font_background_color", menu_color)?;
            tracing::trace!("font background derived from menu background");
            font_background_color = Some(menu_color);
        }
    }
    if let Some(color) = font_background_color {
        check_color("font_background_color", color)?;
    }

    let font_color = overrides.font_color.take().unwrap_or(theme.widget_font_color);
    check_color("font_color", font_color)?;

    let font_name = overrides
        .font_name
        .take()
        .unwrap_or_else(|| theme.widget_font.clone());
    if font_name.is_empty() {
        return Err(MenuError::validation("font_name", "must not be empty"));
    }

    let font_size = overrides.font_size.take().unwrap_or(theme.widget_font_size);
    if font_size == 0 {
        return Err(MenuError::validation(
            "font_size",
            "font size must be greater than zero",
        ));
    }

    let margin = overrides.margin.take().unwrap_or(theme.widget_margin);
    if !margin.is_valid() {
        return Err(MenuError::validation(
            "margin",
            "both components must be equal or greater than zero",
        ));
    }

    let padding = overrides.padding.take().unwrap_or(theme.widget_padding);
    if !padding.is_valid() {
        return Err(MenuError::validation(
            "padding",
            "all components must be equal or greater than zero",
        ));
    }

    let readonly_color = overrides.readonly_color.take().unwrap_or(theme.readonly_color);
    check_color("readonly_color", readonly_color)?;

    let readonly_selected_color = overrides
        .readonly_selected_color
        .take()
        .unwrap_or(theme.readonly_selected_color);
    check_color("readonly_selected_color", readonly_selected_color)?;

    let selection_color = overrides.selection_color.take().unwrap_or(theme.selection_color);
    check_color("selection_color", selection_color)?;

    let selection_effect = overrides
        .selection_effect
        .take()
        .unwrap_or_else(|| theme.widget_selection_effect.clone());

    let shadow = overrides.shadow.take().unwrap_or(theme.widget_shadow);

    let shadow_color = overrides.shadow_color.take().unwrap_or(theme.widget_shadow_color);
    check_color("shadow_color", shadow_color)?;

    let shadow_position = overrides
        .shadow_position
        .take()
        .unwrap_or(theme.widget_shadow_position);

    let shadow_offset = overrides.shadow_offset.take().unwrap_or(theme.widget_shadow_offset);
    if !(shadow_offset.is_finite() && shadow_offset >= 0.0) {
        return Err(MenuError::validation(
            "shadow_offset",
            "must be equal or greater than zero",
        ));
    }

    Ok(AttributeBundle {
        align,
        background_color,
        background_inflate,
        border_color,
        border_inflate,
        border_width,
        font_antialias,
        font_background_color,
        font_color,
        font_name,
        font_size,
        margin,
        padding,
        readonly_color,
        readonly_selected_color,
        selection_color,
        selection_effect,
        shadow,
        shadow_color,
        shadow_position,
        shadow_offset,
    })
}

/// Closed-set check: fail on the first parameter nobody consumed
pub fn ensure_consumed(overrides: &StyleOverrides) -> Result<()> {
    if let Some(key) = overrides.style_keys().first() {
        return Err(MenuError::UnrecognizedParameter(key.to_string()));
    }
    match overrides.extras.keys().next() {
        Some(key) => Err(MenuError::UnrecognizedParameter(key.clone())),
        None => Ok(()),
    }
}

fn check_color(param: &str, color: Color) -> Result<()> {
    if color.is_well_formed() {
        Ok(())
    } else {
        Err(MenuError::validation(
            param,
            format!("malformed color {color:?}"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carta_core::ImageSource;
    use serde_json::json;

    #[test]
    fn test_omitted_keys_fall_back_to_theme() {
        let theme = Theme::default();
        let bundle = AttributeBundle::from_theme(&theme).unwrap();

        assert_eq!(bundle.align, theme.widget_alignment);
        assert_eq!(bundle.background_color, theme.widget_background_color);
        assert_eq!(bundle.border_width, theme.widget_border_width);
        assert_eq!(bundle.font_color, theme.widget_font_color);
        assert_eq!(bundle.font_name, theme.widget_font);
        assert_eq!(bundle.font_size, theme.widget_font_size);
        assert_eq!(bundle.margin, theme.widget_margin);
        assert_eq!(bundle.padding, theme.widget_padding);
        assert_eq!(bundle.selection_color, theme.selection_color);
        assert_eq!(bundle.selection_effect, theme.widget_selection_effect);
        assert_eq!(bundle.shadow, theme.widget_shadow);
        assert_eq!(bundle.shadow_offset, theme.widget_shadow_offset);
        assert_eq!(bundle.font_antialias, theme.widget_font_antialias);
    }

    #[test]
    fn test_supplied_keys_override_theme() {
        let theme = Theme::default();
        let mut overrides = StyleOverrides::new()
            .align(Align::Left)
            .font_size(12)
            .font_color(Color::RED)
            .margin(3.0, 4.0)
            .shadow(true)
            .border(2, Color::BLUE);
        let bundle = resolve(&mut overrides, &theme).unwrap();

        assert_eq!(bundle.align, Align::Left);
        assert_eq!(bundle.font_size, 12);
        assert_eq!(bundle.font_color, Color::RED);
        assert_eq!(bundle.margin, Margin::new(3.0, 4.0));
        assert!(bundle.shadow);
        assert_eq!(bundle.border_width, 2);
        assert_eq!(bundle.border_color, Color::BLUE);
    }

    #[test]
    fn test_resolution_consumes_every_style_key() {
        let theme = Theme::default();
        let mut overrides = StyleOverrides::from_pairs(
            crate::options::STYLE_KEYS
                .iter()
                .filter(|k| **k != "background_color" && **k != "font_background_color")
                .map(|k| {
                    let value = match *k {
                        "align" => json!("right"),
                        "background_inflate" | "margin" => json!([1, 1]),
                        "border_inflate" => json!([1, 1]),
                        "border_width" | "font_size" => json!(2),
                        "font_name" => json!("mono"),
                        "padding" => json!(3),
                        "selection_effect" => json!("underline"),
                        "shadow" => json!(true),
                        "shadow_position" => json!("south"),
                        "shadow_offset" => json!(1.5),
                        _ => json!("#102030"),
                    };
                    (*k, value)
                }),
        )
        .unwrap()
        .extra("volume", json!(11));

        resolve(&mut overrides, &theme).unwrap();
        assert!(!overrides.has_style_keys());
        assert_eq!(
            ensure_consumed(&overrides),
            Err(MenuError::UnrecognizedParameter("volume".into()))
        );
    }

    #[test]
    fn test_validation_names_parameter() {
        let theme = Theme::default();

        let mut overrides = StyleOverrides::new().font_size(0);
        let err = resolve(&mut overrides, &theme).unwrap_err();
        assert_eq!(err.param(), Some("font_size"));

        let mut overrides = StyleOverrides::new().font_color(Color::rgb(2.0, 0.0, 0.0));
        let err = resolve(&mut overrides, &theme).unwrap_err();
        assert_eq!(err.param(), Some("font_color"));

        let mut overrides = StyleOverrides::new().padding(Padding::uniform(-1.0));
        let err = resolve(&mut overrides, &theme).unwrap_err();
        assert_eq!(err.param(), Some("padding"));

        let mut overrides = StyleOverrides::new().background_inflate(-1.0, 0.0);
        let err = resolve(&mut overrides, &theme).unwrap_err();
        assert_eq!(err.param(), Some("background_inflate"));
    }

    #[test]
    fn test_image_background_skips_color_validation() {
        let theme = Theme::default();
        let mut overrides = StyleOverrides::new().background_image(ImageSource::file("bg.png"));
        let bundle = resolve(&mut overrides, &theme).unwrap();
        assert!(matches!(bundle.background_color, Some(Background::Image(_))));
    }

    #[test]
    fn test_font_background_derived_from_menu() {
        let theme = Theme {
            widget_font_background_color_from_menu: true,
            background_color: Background::Color(Color::from_rgb8(1, 2, 3)),
            ..Theme::default()
        };

        let bundle = AttributeBundle::from_theme(&theme).unwrap();
        assert_eq!(bundle.font_background_color, Some(Color::from_rgb8(1, 2, 3)));

        // A flat widget background keeps the font background empty
        let mut overrides = StyleOverrides::new().background_color(Color::WHITE);
        let bundle = resolve(&mut overrides, &theme).unwrap();
        assert_eq!(bundle.font_background_color, None);

        // An explicit font background wins
        let mut overrides = StyleOverrides::new().font_background_color(Color::RED);
        let bundle = resolve(&mut overrides, &theme).unwrap();
        assert_eq!(bundle.font_background_color, Some(Color::RED));
    }

    #[test]
    fn test_null_font_background_overrides_theme() {
        let theme = Theme {
            widget_font_background_color: Some(Color::RED),
            ..Theme::default()
        };
        let mut overrides =
            StyleOverrides::from_pairs([("font_background_color", json!(null))]).unwrap();
        assert!(overrides.has_style_keys());
        let bundle = resolve(&mut overrides, &theme).unwrap();
        assert_eq!(bundle.font_background_color, None);

        let mut overrides = StyleOverrides::new().no_font_background();
        let bundle = resolve(&mut overrides, &theme).unwrap();
        assert_eq!(bundle.font_background_color, None);

        let bundle = resolve(&mut StyleOverrides::new(), &theme).unwrap();
        assert_eq!(bundle.font_background_color, Some(Color::RED));
    }

    #[test]
    fn test_explicit_no_background_overrides_theme() {
        let theme = Theme {
            widget_background_color: Some(Background::Color(Color::WHITE)),
            ..Theme::default()
        };
        let mut overrides = StyleOverrides::new().no_background();
        let bundle = resolve(&mut overrides, &theme).unwrap();
        assert_eq!(bundle.background_color, None);
    }
}
