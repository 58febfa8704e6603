//! Overlay placement anchors
//!
//! The anchor names the point on the overlay's box that lines up with the
//! overlay's logical position. Codes follow the viewer's numbering, with
//! `TopLeft = 0` through `Center = 8`.

use crate::geometry::Point;
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Point of the overlay box aligned to its logical position
#[derive(Serialize_repr, Deserialize_repr, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum OverlayPlacement {
    #[default]
    TopLeft = 0,
    Top = 1,
    TopRight = 2,
    Right = 3,
    BottomRight = 4,
    Bottom = 5,
    BottomLeft = 6,
    Left = 7,
    Center = 8,
}

impl OverlayPlacement {
    /// All anchors in code order
    pub const ALL: [OverlayPlacement; 9] = [
        OverlayPlacement::TopLeft,
        OverlayPlacement::Top,
        OverlayPlacement::TopRight,
        OverlayPlacement::Right,
        OverlayPlacement::BottomRight,
        OverlayPlacement::Bottom,
        OverlayPlacement::BottomLeft,
        OverlayPlacement::Left,
        OverlayPlacement::Center,
    ];

    /// Decode a numeric anchor code; `None` for codes past `Center`
    pub fn try_from_u8(code: u8) -> Option<Self> {
        OverlayPlacement::ALL.get(code as usize).copied()
    }

    /// Decode a numeric anchor code; unknown codes decode as `Center`
    pub fn from_u8(code: u8) -> Self {
        Self::try_from_u8(code).unwrap_or(OverlayPlacement::Center)
    }

    /// Decode an anchor name such as `"BOTTOM_RIGHT"` (case-insensitive)
    pub fn try_from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_uppercase();
        OverlayPlacement::ALL
            .into_iter()
            .find(|placement| placement.name() == name)
    }

    /// Decode an anchor name; unknown names decode as `Center`
    pub fn from_name(name: &str) -> Self {
        Self::try_from_name(name).unwrap_or(OverlayPlacement::Center)
    }

    pub fn name(&self) -> &'static str {
        match self {
            OverlayPlacement::TopLeft => "TOP_LEFT",
            OverlayPlacement::Top => "TOP",
            OverlayPlacement::TopRight => "TOP_RIGHT",
            OverlayPlacement::Right => "RIGHT",
            OverlayPlacement::BottomRight => "BOTTOM_RIGHT",
            OverlayPlacement::Bottom => "BOTTOM",
            OverlayPlacement::BottomLeft => "BOTTOM_LEFT",
            OverlayPlacement::Left => "LEFT",
            OverlayPlacement::Center => "CENTER",
        }
    }

    /// Shift a top-left `position` so that this anchor of a box of `size`
    /// sits on it. Returns the box's new top-left corner.
    pub fn adjust(&self, position: Point, size: Point) -> Point {
        let (dx, dy) = match self {
            OverlayPlacement::TopLeft => (0.0, 0.0),
            OverlayPlacement::Top => (-size.x / 2.0, 0.0),
            OverlayPlacement::TopRight => (-size.x, 0.0),
            OverlayPlacement::Right => (-size.x, -size.y / 2.0),
            OverlayPlacement::BottomRight => (-size.x, -size.y),
            OverlayPlacement::Bottom => (-size.x / 2.0, -size.y),
            OverlayPlacement::BottomLeft => (0.0, -size.y),
            OverlayPlacement::Left => (0.0, -size.y / 2.0),
            OverlayPlacement::Center => (-size.x / 2.0, -size.y / 2.0),
        };

        Point::new(position.x + dx, position.y + dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjust_all_anchors() {
        let position = Point::new(100.0, 100.0);
        let size = Point::new(40.0, 20.0);

        let expected = [
            (OverlayPlacement::TopLeft, Point::new(100.0, 100.0)),
            (OverlayPlacement::Top, Point::new(80.0, 100.0)),
            (OverlayPlacement::TopRight, Point::new(60.0, 100.0)),
            (OverlayPlacement::Right, Point::new(60.0, 90.0)),
            (OverlayPlacement::BottomRight, Point::new(60.0, 80.0)),
            (OverlayPlacement::Bottom, Point::new(80.0, 80.0)),
            (OverlayPlacement::BottomLeft, Point::new(100.0, 80.0)),
            (OverlayPlacement::Left, Point::new(100.0, 90.0)),
            (OverlayPlacement::Center, Point::new(80.0, 90.0)),
        ];

        for (placement, want) in expected {
            assert_eq!(placement.adjust(position, size), want, "{}", placement.name());
        }
    }

    #[test]
    fn test_unknown_code_is_center() {
        let position = Point::new(100.0, 100.0);
        let size = Point::new(40.0, 20.0);

        assert_eq!(OverlayPlacement::from_u8(9), OverlayPlacement::Center);
        assert_eq!(OverlayPlacement::from_u8(255), OverlayPlacement::Center);
        assert_eq!(
            OverlayPlacement::from_u8(42).adjust(position, size),
            OverlayPlacement::Center.adjust(position, size)
        );
    }

    #[test]
    fn test_codes_round_trip_through_from_u8() {
        for (code, placement) in OverlayPlacement::ALL.iter().enumerate() {
            assert_eq!(OverlayPlacement::from_u8(code as u8), *placement);
        }
    }

    #[test]
    fn test_from_name() {
        assert_eq!(OverlayPlacement::from_name("BOTTOM_RIGHT"), OverlayPlacement::BottomRight);
        assert_eq!(OverlayPlacement::from_name("top_left"), OverlayPlacement::TopLeft);
        assert_eq!(OverlayPlacement::from_name(" left "), OverlayPlacement::Left);
        assert_eq!(OverlayPlacement::from_name("MIDDLE"), OverlayPlacement::Center);
        assert_eq!(OverlayPlacement::from_name(""), OverlayPlacement::Center);
    }

    #[test]
    fn test_try_decoders_reject_unknown_values() {
        assert_eq!(OverlayPlacement::try_from_u8(8), Some(OverlayPlacement::Center));
        assert_eq!(OverlayPlacement::try_from_u8(9), None);
        assert_eq!(OverlayPlacement::try_from_name("center"), Some(OverlayPlacement::Center));
        assert_eq!(OverlayPlacement::try_from_name("MIDDLE"), None);
    }

    #[test]
    fn test_adjust_leaves_inputs_alone() {
        let position = Point::new(10.0, 10.0);
        let size = Point::new(4.0, 4.0);
        let moved = OverlayPlacement::Center.adjust(position, size);

        assert_eq!(moved, Point::new(8.0, 8.0));
        assert_eq!(position, Point::new(10.0, 10.0));
    }
}
