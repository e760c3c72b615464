//! Carta Core
//!
//! Foundational primitives shared by the Carta menu crates:
//!
//! - **Colors**: RGBA colors with hex parsing and well-formedness checks
//! - **Image sources**: opaque image references handed to the renderer
//! - **Input devices**: shared device handles and menu key events
//!
//! # Example
//!
//! ```rust
//! use carta_core::Color;
//!
//! let accent = Color::parse_hex("#FF8800").unwrap();
//! assert_eq!(accent.to_rgb8(), [255, 136, 0]);
//! assert!(accent.is_well_formed());
//! ```

pub mod color;
pub mod image;
pub mod input;

pub use color::{Color, ColorParseError};
pub use image::{ImageFormat, ImageResource, ImageSource};
pub use input::{DeviceHandle, DeviceKind, InputControls, Key};
