//! Reusable UI components
//!
//! Light dashboard palette with:
//! - Floating labels on form controls
//! - Blue focus and red error borders
//! - Inline glyph icons

mod button;
mod dynamic_input;
mod icons;

pub use button::*;
pub use dynamic_input::*;
pub use icons::*;
