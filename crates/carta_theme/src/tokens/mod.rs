//! Style tokens for theming
//!
//! Tokens are the value types a theme supplies defaults for:
//! - Alignment
//! - Backgrounds (flat colors or images)
//! - Margins and box-model padding
//! - Selection effects
//! - Text shadow positions

mod background;
mod layout;
mod selection;
mod shadow;

pub use background::*;
pub use layout::*;
pub use selection::*;
pub use shadow::*;
