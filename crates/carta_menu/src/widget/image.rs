//! Image widget

use carta_core::ImageSource;

#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    source: ImageSource,
    /// Rotation in degrees
    angle: f32,
    scale: (f32, f32),
    scale_smooth: bool,
}

impl Image {
    /// Prebuilt resources are used as-is; angle and scale only apply to
    /// sources the renderer still has to load
    pub(crate) fn new(source: ImageSource, angle: f32, scale: (f32, f32), scale_smooth: bool) -> Self {
        if source.is_resource() {
            return Self {
                source,
                angle: 0.0,
                scale: (1.0, 1.0),
                scale_smooth,
            };
        }
        Self {
            source,
            angle,
            scale,
            scale_smooth,
        }
    }

    pub fn source(&self) -> &ImageSource {
        &self.source
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn scale(&self) -> (f32, f32) {
        self.scale
    }

    pub fn scale_smooth(&self) -> bool {
        self.scale_smooth
    }

    /// Drawn size in px, known once the pixels are available
    pub fn size(&self) -> Option<(f32, f32)> {
        self.source
            .size()
            .map(|(w, h)| (w as f32 * self.scale.0, h as f32 * self.scale.1))
    }
}
