//! Axis-aligned rectangle value type

use super::Point;
use serde::{Deserialize, Serialize};

/// Rectangle given by its top-left corner and extent
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Zero-sized rectangle sitting on a point
    pub fn at_point(point: Point) -> Self {
        Self::new(point.x, point.y, 0.0, 0.0)
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Extent as a (width, height) point
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_and_size() {
        let rect = Rect::new(1.5, 2.0, 30.0, 40.0);
        assert_eq!(rect.top_left(), Point::new(1.5, 2.0));
        assert_eq!(rect.size(), Point::new(30.0, 40.0));
    }

    #[test]
    fn test_at_point_has_no_extent() {
        let rect = Rect::at_point(Point::new(7.0, 8.0));
        assert_eq!(rect, Rect::new(7.0, 8.0, 0.0, 0.0));
    }
}
