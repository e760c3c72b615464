//! Selection effect tokens

use serde::{Deserialize, Serialize};

/// Visual decoration drawn around the selected widget
///
/// The effect color is the widget's selection color.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SelectionEffect {
    /// No decoration
    None,
    /// Rectangle drawn around the widget
    Highlight {
        border_width: u32,
        margin_x: f32,
        margin_y: f32,
    },
    /// Line drawn under the widget
    Underline { margin: f32, thickness: u32 },
    /// Arrow drawn left of the widget
    LeftArrow { arrow_size: (f32, f32) },
    /// Arrow drawn right of the widget
    RightArrow { arrow_size: (f32, f32) },
}

impl SelectionEffect {
    pub fn highlight() -> Self {
        Self::Highlight {
            border_width: 1,
            margin_x: 16.0,
            margin_y: 8.0,
        }
    }

    pub fn underline() -> Self {
        Self::Underline {
            margin: 1.0,
            thickness: 2,
        }
    }

    pub fn left_arrow() -> Self {
        Self::LeftArrow {
            arrow_size: (10.0, 15.0),
        }
    }

    pub fn right_arrow() -> Self {
        Self::RightArrow {
            arrow_size: (10.0, 15.0),
        }
    }

    /// Build the default variant for an effect name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "none" => Some(Self::None),
            "highlight" => Some(Self::highlight()),
            "underline" => Some(Self::underline()),
            "left_arrow" => Some(Self::left_arrow()),
            "right_arrow" => Some(Self::right_arrow()),
            _ => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl Default for SelectionEffect {
    fn default() -> Self {
        Self::highlight()
    }
}
