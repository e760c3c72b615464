//! Alignment, margin and padding tokens

use serde::{Deserialize, Serialize};

/// Horizontal alignment of a widget inside its menu row
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    Left,
    #[default]
    Center,
    Right,
}

impl Align {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "left" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" => Some(Self::Right),
            _ => None,
        }
    }
}

/// Outer widget margin `(x, y)` in px
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f32, f32)", into = "(f32, f32)")]
pub struct Margin {
    pub x: f32,
    pub y: f32,
}

impl Margin {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_valid(&self) -> bool {
        [self.x, self.y].iter().all(|v| v.is_finite() && *v >= 0.0)
    }
}

impl From<(f32, f32)> for Margin {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl From<Margin> for (f32, f32) {
    fn from(m: Margin) -> Self {
        (m.x, m.y)
    }
}

/// Inner widget padding following box-model order
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PaddingRepr", into = "PaddingRepr")]
pub struct Padding {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Padding {
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Same padding on all four sides
    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// `(vertical, horizontal)` padding
    pub const fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Build from a scalar, a 2-tuple or a 4-tuple of components
    pub fn from_components(components: &[f32]) -> Option<Self> {
        match *components {
            [v] => Some(Self::uniform(v)),
            [v, h] => Some(Self::symmetric(v, h)),
            [t, r, b, l] => Some(Self::new(t, r, b, l)),
            _ => None,
        }
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    pub fn is_valid(&self) -> bool {
        [self.top, self.right, self.bottom, self.left]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum PaddingRepr {
    Scalar(f32),
    Components(Vec<f32>),
}

impl TryFrom<PaddingRepr> for Padding {
    type Error = String;

    fn try_from(repr: PaddingRepr) -> Result<Self, Self::Error> {
        match repr {
            PaddingRepr::Scalar(v) => Ok(Padding::uniform(v)),
            PaddingRepr::Components(c) => Padding::from_components(&c)
                .ok_or_else(|| format!("padding must have 1, 2 or 4 components, got {}", c.len())),
        }
    }
}

impl From<Padding> for PaddingRepr {
    fn from(p: Padding) -> Self {
        PaddingRepr::Components(vec![p.top, p.right, p.bottom, p.left])
    }
}
