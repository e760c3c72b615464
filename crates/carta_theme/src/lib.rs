//! Carta Theme System
//!
//! Widget style defaults for Carta menus.
//!
//! # Overview
//!
//! A [`Theme`] supplies a default for every style attribute a widget
//! factory resolves: alignment, background, border, font, margin, padding,
//! selection effect and text shadow. Themes are plain data; a menu shares
//! one as `Rc<Theme>` and never mutates it.
//!
//! # Quick Start
//!
//! ```rust
//! use carta_theme::{Theme, ThemePreset};
//!
//! let dark = ThemePreset::Dark.theme();
//! assert_eq!(dark.name, "Dark");
//!
//! // Partial documents override only the fields they name
//! let custom = Theme::from_toml_str("widget_font_size = 18").unwrap();
//! assert_eq!(custom.widget_font_size, 18);
//! ```
//!
//! # Tokens
//!
//! - [`Align`]: horizontal widget alignment
//! - [`Background`]: flat color or image background
//! - [`Margin`] / [`Padding`]: outer and inner spacing
//! - [`SelectionEffect`]: decoration of the selected widget
//! - [`ShadowPosition`]: text shadow direction

pub mod presets;
pub mod theme;
pub mod tokens;

// Re-export commonly used types
pub use presets::{preset_theme, ThemePreset};
pub use theme::{Theme, ThemeError};
pub use tokens::*;
