//! Optional style overrides
//!
//! [`StyleOverrides`] is the typed optional-parameter set every widget
//! factory accepts. Each recognized style key has its own `Option` field;
//! anything else lands in the [`Extras`] slot, which is either forwarded to
//! a widget callback or rejected by the closed-set check.

use carta_core::{Color, ImageSource};
use carta_theme::{Align, Background, Margin, Padding, SelectionEffect, ShadowPosition};
use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{MenuError, Result};

/// Unrecognized parameters, in insertion order
pub type Extras = IndexMap<String, Value>;

/// Every style key the attribute resolver consumes
pub const STYLE_KEYS: [&str; 20] = [
    "align",
    "background_color",
    "background_inflate",
    "border_color",
    "border_inflate",
    "border_width",
    "font_background_color",
    "font_color",
    "font_name",
    "font_size",
    "margin",
    "padding",
    "readonly_color",
    "readonly_selected_color",
    "selection_color",
    "selection_effect",
    "shadow",
    "shadow_color",
    "shadow_position",
    "shadow_offset",
];

/// Keys that make no sense for widgets without text
pub(crate) const TEXT_KEYS: [&str; 8] = [
    "font_background_color",
    "font_color",
    "font_name",
    "font_size",
    "shadow",
    "shadow_color",
    "shadow_position",
    "shadow_offset",
];

/// Caller-supplied style overrides for one widget
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleOverrides {
    pub align: Option<Align>,
    /// `Some(None)` removes the theme's widget background
    pub background_color: Option<Option<Background>>,
    pub background_inflate: Option<(f32, f32)>,
    pub border_color: Option<Color>,
    pub border_inflate: Option<(u32, u32)>,
    pub border_width: Option<u32>,
    /// `Some(None)` removes the theme's font background
    pub font_background_color: Option<Option<Color>>,
    pub font_color: Option<Color>,
    pub font_name: Option<String>,
    pub font_size: Option<u32>,
    pub margin: Option<Margin>,
    pub padding: Option<Padding>,
    pub readonly_color: Option<Color>,
    pub readonly_selected_color: Option<Color>,
    pub selection_color: Option<Color>,
    pub selection_effect: Option<SelectionEffect>,
    pub shadow: Option<bool>,
    pub shadow_color: Option<Color>,
    pub shadow_position: Option<ShadowPosition>,
    pub shadow_offset: Option<f32>,
    /// Keys outside the style set
    pub extras: Extras,
}

impl StyleOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    pub fn background_color(mut self, background: impl Into<Background>) -> Self {
        self.background_color = Some(Some(background.into()));
        self
    }

    pub fn background_image(mut self, source: ImageSource) -> Self {
        self.background_color = Some(Some(Background::Image(source)));
        self
    }

    /// Draw no background even if the theme sets one
    pub fn no_background(mut self) -> Self {
        self.background_color = Some(None);
        self
    }

    pub fn background_inflate(mut self, x: f32, y: f32) -> Self {
        self.background_inflate = Some((x, y));
        self
    }

    pub fn border(mut self, width: u32, color: Color) -> Self {
        self.border_width = Some(width);
        self.border_color = Some(color);
        self
    }

    pub fn border_inflate(mut self, x: u32, y: u32) -> Self {
        self.border_inflate = Some((x, y));
        self
    }

    pub fn font_background_color(mut self, color: Color) -> Self {
        self.font_background_color = Some(Some(color));
        self
    }

    /// Draw text without a background even if the theme sets one
    pub fn no_font_background(mut self) -> Self {
        self.font_background_color = Some(None);
        self
    }

    pub fn font_color(mut self, color: Color) -> Self {
        self.font_color = Some(color);
        self
    }

    pub fn font_name(mut self, name: impl Into<String>) -> Self {
        self.font_name = Some(name.into());
        self
    }

    pub fn font_size(mut self, size: u32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn margin(mut self, x: f32, y: f32) -> Self {
        self.margin = Some(Margin::new(x, y));
        self
    }

    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn readonly_colors(mut self, color: Color, selected: Color) -> Self {
        self.readonly_color = Some(color);
        self.readonly_selected_color = Some(selected);
        self
    }

    pub fn selection_color(mut self, color: Color) -> Self {
        self.selection_color = Some(color);
        self
    }

    pub fn selection_effect(mut self, effect: SelectionEffect) -> Self {
        self.selection_effect = Some(effect);
        self
    }

    pub fn shadow(mut self, enabled: bool) -> Self {
        self.shadow = Some(enabled);
        self
    }

    pub fn shadow_color(mut self, color: Color) -> Self {
        self.shadow_color = Some(color);
        self
    }

    pub fn shadow_position(mut self, position: ShadowPosition) -> Self {
        self.shadow_position = Some(position);
        self
    }

    pub fn shadow_offset(mut self, offset: f32) -> Self {
        self.shadow_offset = Some(offset);
        self
    }

    /// Add a parameter outside the style set
    pub fn extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extras.insert(key.into(), value);
        self
    }

    /// Set a parameter by name.
    ///
    /// Style keys are parsed into their typed field; a value of the wrong
    /// shape is a validation error naming the key. Other keys go to
    /// [`extras`](Self::extras).
    pub fn insert(&mut self, key: &str, value: Value) -> Result<()> {
        match key {
            "align" => {
                let name = as_str(key, &value)?;
                self.align = Some(
                    Align::from_name(name)
                        .ok_or_else(|| MenuError::validation(key, format!("unknown alignment {name:?}")))?,
                );
            }
            "background_color" => {
                self.background_color = Some(parse_background(key, &value)?);
            }
            "background_inflate" => {
                let [x, y] = parse_pair(key, &value)?;
                self.background_inflate = Some((x as f32, y as f32));
            }
            "border_color" => self.border_color = Some(parse_color(key, &value)?),
            "border_inflate" => {
                let [x, y] = parse_pair(key, &value)?;
                self.border_inflate = Some((as_u32(key, x)?, as_u32(key, y)?));
            }
            "border_width" => {
                self.border_width = Some(as_u32(key, as_f64(key, &value)?)?);
            }
            "font_background_color" => {
                self.font_background_color = Some(match value {
                    Value::Null => None,
                    _ => Some(parse_color(key, &value)?),
                });
            }
            "font_color" => self.font_color = Some(parse_color(key, &value)?),
            "font_name" => self.font_name = Some(as_str(key, &value)?.to_string()),
            "font_size" => self.font_size = Some(as_u32(key, as_f64(key, &value)?)?),
            "margin" => {
                let [x, y] = parse_pair(key, &value)?;
                self.margin = Some(Margin::new(x as f32, y as f32));
            }
            "padding" => self.padding = Some(parse_padding(key, &value)?),
            "readonly_color" => self.readonly_color = Some(parse_color(key, &value)?),
            "readonly_selected_color" => {
                self.readonly_selected_color = Some(parse_color(key, &value)?)
            }
            "selection_color" => self.selection_color = Some(parse_color(key, &value)?),
            "selection_effect" => {
                self.selection_effect = Some(match &value {
                    Value::Null => SelectionEffect::None,
                    _ => {
                        let name = as_str(key, &value)?;
                        SelectionEffect::from_name(name).ok_or_else(|| {
                            MenuError::validation(key, format!("unknown selection effect {name:?}"))
                        })?
                    }
                });
            }
            "shadow" => {
                self.shadow = Some(
                    value
                        .as_bool()
                        .ok_or_else(|| MenuError::validation(key, "expected a boolean"))?,
                );
            }
            "shadow_color" => self.shadow_color = Some(parse_color(key, &value)?),
            "shadow_position" => {
                let name = as_str(key, &value)?;
                self.shadow_position = Some(ShadowPosition::from_name(name).ok_or_else(|| {
                    MenuError::validation(key, format!("unknown shadow position {name:?}"))
                })?);
            }
            "shadow_offset" => self.shadow_offset = Some(as_f64(key, &value)? as f32),
            _ => {
                self.extras.insert(key.to_string(), value);
            }
        }
        Ok(())
    }

    /// Build overrides from `(key, value)` pairs
    pub fn from_pairs<I, K>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: AsRef<str>,
    {
        let mut overrides = Self::default();
        for (key, value) in pairs {
            overrides.insert(key.as_ref(), value)?;
        }
        Ok(overrides)
    }

    /// Whether any typed style field is still set
    pub fn has_style_keys(&self) -> bool {
        !self.style_keys().is_empty()
    }

    /// Names of the typed style fields that are still set
    pub fn style_keys(&self) -> Vec<&'static str> {
        let set = [
            self.align.is_some(),
            self.background_color.is_some(),
            self.background_inflate.is_some(),
            self.border_color.is_some(),
            self.border_inflate.is_some(),
            self.border_width.is_some(),
            self.font_background_color.is_some(),
            self.font_color.is_some(),
            self.font_name.is_some(),
            self.font_size.is_some(),
            self.margin.is_some(),
            self.padding.is_some(),
            self.readonly_color.is_some(),
            self.readonly_selected_color.is_some(),
            self.selection_color.is_some(),
            self.selection_effect.is_some(),
            self.shadow.is_some(),
            self.shadow_color.is_some(),
            self.shadow_position.is_some(),
            self.shadow_offset.is_some(),
        ];
        STYLE_KEYS
            .iter()
            .zip(set)
            .filter_map(|(key, is_set)| is_set.then_some(*key))
            .collect()
    }

    /// Take the leftover parameters out
    pub fn take_extras(&mut self) -> Extras {
        std::mem::take(&mut self.extras)
    }

    /// Drop font and shadow settings, typed or not
    pub(crate) fn discard_text_keys(&mut self) {
        self.font_background_color = None;
        self.font_color = None;
        self.font_name = None;
        self.font_size = None;
        self.shadow = None;
        self.shadow_color = None;
        self.shadow_position = None;
        self.shadow_offset = None;
        for key in TEXT_KEYS {
            self.extras.shift_remove(key);
        }
    }
}

fn as_str<'v>(key: &str, value: &'v Value) -> Result<&'v str> {
    value
        .as_str()
        .ok_or_else(|| MenuError::validation(key, "expected a string"))
}

fn as_f64(key: &str, value: &Value) -> Result<f64> {
    value
        .as_f64()
        .ok_or_else(|| MenuError::validation(key, "expected a number"))
}

fn as_u32(key: &str, value: f64) -> Result<u32> {
    if value.fract() != 0.0 || value < 0.0 || value > u32::MAX as f64 {
        return Err(MenuError::validation(
            key,
            format!("expected a non-negative integer, got {value}"),
        ));
    }
    Ok(value as u32)
}

fn parse_numbers(key: &str, value: &Value) -> Result<Vec<f64>> {
    match value {
        Value::Array(items) => items.iter().map(|v| as_f64(key, v)).collect(),
        _ => Ok(vec![as_f64(key, value)?]),
    }
}

fn parse_pair(key: &str, value: &Value) -> Result<[f64; 2]> {
    match parse_numbers(key, value)?.as_slice() {
        [x, y] => Ok([*x, *y]),
        other => Err(MenuError::validation(
            key,
            format!("expected 2 components, got {}", other.len()),
        )),
    }
}

fn parse_padding(key: &str, value: &Value) -> Result<Padding> {
    let components: Vec<f32> = parse_numbers(key, value)?
        .into_iter()
        .map(|v| v as f32)
        .collect();
    Padding::from_components(&components).ok_or_else(|| {
        MenuError::validation(
            key,
            format!("expected 1, 2 or 4 components, got {}", components.len()),
        )
    })
}

/// Colors are `"#RRGGBB[AA]"` strings or 3/4 channel arrays in `0..=255`
pub(crate) fn parse_color(key: &str, value: &Value) -> Result<Color> {
    if let Some(s) = value.as_str() {
        return Color::parse_hex(s).map_err(|e| MenuError::validation(key, e.to_string()));
    }
    let channels = match value {
        Value::Array(items) => items
            .iter()
            .map(|v| {
                v.as_u64()
                    .filter(|c| *c <= 255)
                    .map(|c| c as u8)
                    .ok_or_else(|| MenuError::validation(key, "color channels must be 0..=255"))
            })
            .collect::<Result<Vec<u8>>>()?,
        _ => return Err(MenuError::validation(key, "expected a color")),
    };
    match channels.as_slice() {
        [r, g, b] => Ok(Color::from_rgb8(*r, *g, *b)),
        [r, g, b, a] => Ok(Color::from_rgba8(*r, *g, *b, *a)),
        _ => Err(MenuError::validation(key, "color must have 3 or 4 channels")),
    }
}

fn parse_background(key: &str, value: &Value) -> Result<Option<Background>> {
    match value {
        Value::Null => Ok(None),
        Value::Object(map) => {
            let path = map
                .get("image")
                .and_then(Value::as_str)
                .ok_or_else(|| MenuError::validation(key, "expected an `image` path"))?;
            Ok(Some(Background::Image(ImageSource::file(path))))
        }
        _ => Ok(Some(Background::Color(parse_color(key, value)?))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_routes_style_keys_to_fields() {
        let overrides = StyleOverrides::from_pairs([
            ("font_size", json!(24)),
            ("font_color", json!("#FF0000")),
            ("padding", json!([2, 4])),
            ("align", json!("left")),
            ("player", json!("one")),
        ])
        .unwrap();

        assert_eq!(overrides.font_size, Some(24));
        assert_eq!(overrides.font_color, Some(Color::RED));
        assert_eq!(overrides.padding, Some(Padding::symmetric(2.0, 4.0)));
        assert_eq!(overrides.align, Some(Align::Left));
        assert_eq!(overrides.extras.get("player"), Some(&json!("one")));
        assert_eq!(
            overrides.style_keys(),
            vec!["align", "font_color", "font_size", "padding"]
        );
    }

    #[test]
    fn test_insert_names_the_bad_key() {
        let mut overrides = StyleOverrides::new();
        let err = overrides.insert("border_width", json!(-1)).unwrap_err();
        assert_eq!(err.param(), Some("border_width"));

        let err = overrides.insert("padding", json!([1, 2, 3])).unwrap_err();
        assert_eq!(err.param(), Some("padding"));

        let err = overrides.insert("font_color", json!([300, 0, 0])).unwrap_err();
        assert_eq!(err.param(), Some("font_color"));

        let err = overrides.insert("shadow_position", json!("up")).unwrap_err();
        assert_eq!(err.param(), Some("shadow_position"));
    }

    #[test]
    fn test_background_null_and_image() {
        let mut overrides = StyleOverrides::new();
        overrides.insert("background_color", Value::Null).unwrap();
        assert_eq!(overrides.background_color, Some(None));

        overrides
            .insert("background_color", json!({"image": "bg.png"}))
            .unwrap();
        assert_eq!(
            overrides.background_color,
            Some(Some(Background::Image(ImageSource::file("bg.png"))))
        );
    }

    #[test]
    fn test_discard_text_keys() {
        let mut overrides = StyleOverrides::new()
            .font_size(12)
            .shadow(true)
            .align(Align::Right)
            .extra("font_color", json!("#000000"));
        overrides.discard_text_keys();
        assert_eq!(overrides.style_keys(), vec!["align"]);
        assert!(overrides.extras.is_empty());
    }
}
