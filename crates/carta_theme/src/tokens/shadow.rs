//! Text shadow tokens

use serde::{Deserialize, Serialize};

/// Direction the text shadow is cast towards
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShadowPosition {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    #[default]
    NorthWest,
}

impl ShadowPosition {
    /// Unit direction of the shadow offset (screen coordinates, y down)
    pub fn direction(self) -> (f32, f32) {
        match self {
            Self::North => (0.0, -1.0),
            Self::NorthEast => (1.0, -1.0),
            Self::East => (1.0, 0.0),
            Self::SouthEast => (1.0, 1.0),
            Self::South => (0.0, 1.0),
            Self::SouthWest => (-1.0, 1.0),
            Self::West => (-1.0, 0.0),
            Self::NorthWest => (-1.0, -1.0),
        }
    }

    /// Parse a position name such as `"north_west"`
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "north" => Some(Self::North),
            "north_east" => Some(Self::NorthEast),
            "east" => Some(Self::East),
            "south_east" => Some(Self::SouthEast),
            "south" => Some(Self::South),
            "south_west" => Some(Self::SouthWest),
            "west" => Some(Self::West),
            "north_west" => Some(Self::NorthWest),
            _ => None,
        }
    }
}
