//! DOM binding for overlays
//!
//! Overlays draw `HtmlElement`s into any DOM `Element` container. Inline
//! styles go through `CssStyleDeclaration`, and the natural size is the
//! element's client box.

use web_sys::{Element, HtmlElement, Node};

use super::{OverlayElement, StyleProperty};
use crate::errors::{js_message, OverlayError};
use crate::geometry::Point;

impl OverlayElement for HtmlElement {
    type Container = Element;

    fn is_child_of(&self, container: &Element) -> bool {
        let container: &Node = container;
        match self.parent_node() {
            Some(parent) => parent.is_same_node(Some(container)),
            None => false,
        }
    }

    fn attach_to(&self, container: &Element) -> Result<(), OverlayError> {
        container
            .append_child(self)
            .map(|_| ())
            .map_err(|e| OverlayError::Attach(js_message(&e)))
    }

    fn detach(&self) -> Result<(), OverlayError> {
        if let Some(parent) = self.parent_node() {
            parent
                .remove_child(self)
                .map_err(|e| OverlayError::Detach(js_message(&e)))?;
        }
        Ok(())
    }

    fn measure(&self) -> Point {
        Point::new(self.client_width() as f64, self.client_height() as f64)
    }

    fn set_style(&self, property: StyleProperty, value: &str) -> Result<(), OverlayError> {
        self.style()
            .set_property(property.css_name(), value)
            .map_err(|e| OverlayError::Style {
                property: property.css_name(),
                message: js_message(&e),
            })
    }

    fn clear_style(&self, property: StyleProperty) -> Result<(), OverlayError> {
        self.style()
            .remove_property(property.css_name())
            .map(|_| ())
            .map_err(|e| OverlayError::Style {
                property: property.css_name(),
                message: js_message(&e),
            })
    }
}
