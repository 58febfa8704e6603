//! Logical-to-pixel mapping for overlay refreshes
//!
//! The renderer keeps overlays in logical (image) coordinates. Before each
//! draw their bounds are mapped into container pixels with the current pan
//! and zoom.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Visible region of the logical plane and its zoom
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    /// Logical point shown at the container's top-left pixel
    pub origin: Point,

    /// Container pixels per logical unit
    pub pixels_per_unit: f64,
}

impl Viewport {
    pub fn new(origin: Point, pixels_per_unit: f64) -> Self {
        Self {
            origin,
            pixels_per_unit,
        }
    }

    /// Pixel position of a logical point
    pub fn pixel_from_point(&self, point: Point) -> Point {
        (point - self.origin) * self.pixels_per_unit
    }

    /// Pixel extent of a logical extent (origin-independent)
    pub fn delta_pixels_from_points(&self, delta: Point) -> Point {
        delta * self.pixels_per_unit
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(Point::default(), 1.0)
    }
}
