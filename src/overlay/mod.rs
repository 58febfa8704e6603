//! Overlay placement and drawing
//!
//! An `Overlay` ties one element to a logical location. A point location
//! anchors the element at that point using its natural size; a rectangle
//! location scales the element to cover the rectangle and is always
//! anchored top-left.

pub mod placement;

pub use placement::OverlayPlacement;

use serde::{Deserialize, Serialize};

use crate::errors::OverlayError;
use crate::geometry::{Point, Rect};
use crate::surface::{px, OverlayElement, StyleProperty};
use crate::viewport::Viewport;

/// Where an overlay lives: a single anchor point or a region it scales to
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Location {
    Point(Point),
    Rect(Rect),
}

impl Location {
    /// True for region locations
    pub fn scales(&self) -> bool {
        matches!(self, Location::Rect(_))
    }

    /// Bounding rectangle; a point has no extent
    pub fn bounds(&self) -> Rect {
        match self {
            Location::Point(point) => Rect::at_point(*point),
            Location::Rect(rect) => *rect,
        }
    }

    /// Anchor actually used for this location (regions are always top-left)
    pub fn effective_placement(&self, requested: OverlayPlacement) -> OverlayPlacement {
        match self {
            Location::Point(_) => requested,
            Location::Rect(_) => OverlayPlacement::TopLeft,
        }
    }
}

impl From<Point> for Location {
    fn from(point: Point) -> Self {
        Location::Point(point)
    }
}

impl From<Rect> for Location {
    fn from(rect: Rect) -> Self {
        Location::Rect(rect)
    }
}

/// Serializable snapshot of an overlay's placement fields
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OverlayState {
    pub scales_to_region: bool,
    pub bounds: Rect,
    pub placement: OverlayPlacement,
    pub position: Point,
    pub size: Point,
}

/// An element positioned over the viewer
#[derive(Debug)]
pub struct Overlay<E> {
    element: E,
    scales: bool,
    bounds: Rect,
    placement: OverlayPlacement,
    position: Point,
    size: Point,
}

impl<E: OverlayElement> Overlay<E> {
    /// Bind `element` to `location`
    ///
    /// `placement` only applies to point locations.
    pub fn new(element: E, location: Location, placement: OverlayPlacement) -> Self {
        let bounds = location.bounds();

        Self {
            element,
            scales: location.scales(),
            bounds,
            placement: location.effective_placement(placement),
            position: bounds.top_left(),
            size: bounds.size(),
        }
    }

    /// Move the overlay to a new logical location
    ///
    /// Pixel position and size are left as they are until the next refresh.
    pub fn update(&mut self, location: Location, placement: OverlayPlacement) {
        self.scales = location.scales();
        self.bounds = location.bounds();
        self.placement = location.effective_placement(placement);

        log::trace!(
            "overlay updated: bounds={:?}, scales={}, placement={}",
            self.bounds,
            self.scales,
            self.placement.name()
        );
    }

    /// Top-left corner of the element once anchored at `position`
    pub fn adjust(&self, position: Point, size: Point) -> Point {
        self.placement.adjust(position, size)
    }

    /// Set the pixel position and size used by the next draw
    pub fn place(&mut self, position: Point, size: Point) {
        self.position = position;
        self.size = size;
    }

    /// Write the overlay's placement into the element's style
    pub fn draw_html(&mut self, container: &E::Container) -> Result<(), OverlayError> {
        if !self.element.is_child_of(container) {
            self.element.attach_to(container)?;
        }

        if !self.scales {
            self.size = self.element.measure();
        }

        let position = self.adjust(self.position, self.size).apply(f64::floor);
        let size = self.size.apply(f64::ceil);

        self.element.set_style(StyleProperty::Left, &px(position.x))?;
        self.element.set_style(StyleProperty::Top, &px(position.y))?;
        self.element.set_style(StyleProperty::Position, "absolute")?;

        if self.scales {
            self.element.set_style(StyleProperty::Width, &px(size.x))?;
            self.element.set_style(StyleProperty::Height, &px(size.y))?;
        }

        Ok(())
    }

    /// Map the logical bounds through `viewport`, then draw
    pub fn draw_in_viewport(
        &mut self,
        viewport: &Viewport,
        container: &E::Container,
    ) -> Result<(), OverlayError> {
        let position = viewport.pixel_from_point(self.bounds.top_left());
        let size = viewport.delta_pixels_from_points(self.bounds.size());
        self.place(position, size);
        self.draw_html(container)
    }

    /// Detach the element and clear the style this overlay wrote
    ///
    /// The element itself stays alive; get it back with `into_element`.
    pub fn destroy(&self) -> Result<(), OverlayError> {
        self.element.detach()?;

        self.element.clear_style(StyleProperty::Top)?;
        self.element.clear_style(StyleProperty::Left)?;
        self.element.clear_style(StyleProperty::Position)?;

        // Natural-size overlays never wrote width/height
        if self.scales {
            self.element.clear_style(StyleProperty::Width)?;
            self.element.clear_style(StyleProperty::Height)?;
        }

        Ok(())
    }
}

impl<E> Overlay<E> {
    pub fn state(&self) -> OverlayState {
        OverlayState {
            scales_to_region: self.scales,
            bounds: self.bounds,
            placement: self.placement,
            position: self.position,
            size: self.size,
        }
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    pub fn into_element(self) -> E {
        self.element
    }

    pub fn scales_to_region(&self) -> bool {
        self.scales
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn placement(&self) -> OverlayPlacement {
        self.placement
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> Point {
        self.size
    }
}
