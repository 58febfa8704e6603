//! 2D geometry for overlay placement
//!
//! Points double as sizes (x = width, y = height), the same way the
//! viewer's coordinate code uses them.

pub mod point;
pub mod rect;

pub use point::Point;
pub use rect::Rect;
