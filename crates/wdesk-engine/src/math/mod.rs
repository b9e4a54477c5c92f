//! Core geometry types for the window engine
//!
//! These types provide basic 2D math for window positions, sizes and
//! viewport-relative placement. All coordinates are CSS pixels.

mod rect;
mod size;
mod style;
mod vec2;

pub use rect::Rect;
pub use size::Size;
pub use style::{WindowChrome, ZLayers, WINDOW_CHROME, Z_LAYERS};
pub use vec2::Vec2;
