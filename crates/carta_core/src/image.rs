//! Image source types
//!
//! Images are opaque to the menu layer: a source is handed through to the
//! rendering collaborator unchanged. Only a prebuilt [`ImageResource`]
//! exposes its pixel size.

use std::path::PathBuf;
use std::rc::Rc;

/// Pre-decoded RGBA image data (already in memory)
#[derive(Debug, Clone, PartialEq)]
pub struct ImageResource {
    /// RGBA pixel data (4 bytes per pixel)
    pub data: Vec<u8>,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl ImageResource {
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            data,
            width,
            height,
        }
    }
}

/// Source of an image
#[derive(Debug, Clone, PartialEq)]
pub enum ImageSource {
    /// An already built image, shared between widgets
    Resource(Rc<ImageResource>),

    /// Load from a file path
    File(PathBuf),

    /// Load from an in-memory byte stream with an optional format hint
    Bytes {
        data: Vec<u8>,
        format: Option<ImageFormat>,
    },
}

impl ImageSource {
    /// Create a file source
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    /// Create a bytes source
    pub fn bytes(data: Vec<u8>) -> Self {
        Self::Bytes { data, format: None }
    }

    /// Create a bytes source with format hint
    pub fn bytes_with_format(data: Vec<u8>, format: ImageFormat) -> Self {
        Self::Bytes {
            data,
            format: Some(format),
        }
    }

    /// Wrap a prebuilt image
    pub fn resource(resource: ImageResource) -> Self {
        Self::Resource(Rc::new(resource))
    }

    /// Whether the source is a prebuilt resource
    pub fn is_resource(&self) -> bool {
        matches!(self, Self::Resource(_))
    }

    /// Pixel size, known only for prebuilt resources
    pub fn size(&self) -> Option<(u32, u32)> {
        match self {
            Self::Resource(r) => Some((r.width, r.height)),
            _ => None,
        }
    }

    /// Format hint from the file extension or the byte stream hint
    pub fn format(&self) -> Option<ImageFormat> {
        match self {
            Self::Resource(_) => None,
            Self::File(path) => path
                .extension()
                .and_then(|ext| ext.to_str())
                .and_then(ImageFormat::from_extension),
            Self::Bytes { format, .. } => *format,
        }
    }
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        Self::File(path)
    }
}

impl From<&std::path::Path> for ImageSource {
    fn from(path: &std::path::Path) -> Self {
        Self::File(path.to_path_buf())
    }
}

impl From<ImageResource> for ImageSource {
    fn from(resource: ImageResource) -> Self {
        Self::resource(resource)
    }
}

/// Image format hint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    WebP,
    Bmp,
}

impl ImageFormat {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "gif" => Some(Self::Gif),
            "webp" => Some(Self::WebP),
            "bmp" => Some(Self::Bmp),
            _ => None,
        }
    }
}
