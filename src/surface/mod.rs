//! Host surfaces an overlay can be drawn on
//!
//! An overlay never owns its element. It only needs to attach the element to
//! a container, detach it again, measure it, and write a handful of inline
//! style properties. `OverlayElement` captures exactly that, so the same
//! overlay logic drives real DOM nodes (`dom`) and in-memory nodes
//! (`headless`).

pub mod dom;
pub mod headless;

use crate::errors::OverlayError;
use crate::geometry::Point;

/// Inline style properties written by overlays
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleProperty {
    Top,
    Left,
    Width,
    Height,
    Position,
}

impl StyleProperty {
    /// CSS property name
    pub fn css_name(&self) -> &'static str {
        match self {
            StyleProperty::Top => "top",
            StyleProperty::Left => "left",
            StyleProperty::Width => "width",
            StyleProperty::Height => "height",
            StyleProperty::Position => "position",
        }
    }
}

/// Format a whole-pixel CSS length
pub fn px(value: f64) -> String {
    // Values arrive already floored or ceiled; -0 is written as 0
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{}px", value)
}

/// A visual element that can be positioned by an overlay
///
/// Handles are shared references (like DOM nodes), so every operation takes
/// `&self`.
pub trait OverlayElement {
    /// Surface the element is appended to
    type Container;

    /// True when `container` is the element's current parent
    fn is_child_of(&self, container: &Self::Container) -> bool;

    /// Append the element to `container`, moving it from any previous parent
    fn attach_to(&self, container: &Self::Container) -> Result<(), OverlayError>;

    /// Remove the element from its parent; a no-op when detached
    fn detach(&self) -> Result<(), OverlayError>;

    /// Current rendered size in pixels
    fn measure(&self) -> Point;

    /// Set an inline style property to `value`
    fn set_style(&self, property: StyleProperty, value: &str) -> Result<(), OverlayError>;

    /// Reset an inline style property to empty
    fn clear_style(&self, property: StyleProperty) -> Result<(), OverlayError>;
}
