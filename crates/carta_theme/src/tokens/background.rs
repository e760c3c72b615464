//! Background tokens

use carta_core::{Color, ImageSource};
use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::path::PathBuf;

/// A widget or menu background: a flat color or an image
#[derive(Clone, Debug, PartialEq)]
pub enum Background {
    Color(Color),
    Image(ImageSource),
}

impl Background {
    /// The flat color, if this background is one
    pub fn as_color(&self) -> Option<Color> {
        match self {
            Self::Color(c) => Some(*c),
            Self::Image(_) => None,
        }
    }

    pub fn is_color(&self) -> bool {
        matches!(self, Self::Color(_))
    }
}

impl From<Color> for Background {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

impl From<ImageSource> for Background {
    fn from(source: ImageSource) -> Self {
        Self::Image(source)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum BackgroundRepr {
    Color(Color),
    Image { image: PathBuf },
}

impl Serialize for Background {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let repr = match self {
            Self::Color(c) => BackgroundRepr::Color(*c),
            Self::Image(ImageSource::File(path)) => BackgroundRepr::Image {
                image: path.clone(),
            },
            Self::Image(_) => {
                return Err(S::Error::custom(
                    "only file images can be serialized as backgrounds",
                ))
            }
        };
        repr.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Background {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match BackgroundRepr::deserialize(deserializer) {
            Ok(BackgroundRepr::Color(c)) => Ok(Self::Color(c)),
            Ok(BackgroundRepr::Image { image }) => Ok(Self::Image(ImageSource::File(image))),
            Err(_) => Err(D::Error::custom(
                "background must be a color or a table with an `image` path",
            )),
        }
    }
}
