//! In-memory overlay surface
//!
//! Mirrors the parts of the DOM an overlay touches: parentage, inline style
//! and a natural size. Useful outside the browser (server-side layout,
//! snapshot tests) where there is no document to draw into.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use super::{OverlayElement, StyleProperty};
use crate::errors::OverlayError;
use crate::geometry::Point;

#[derive(Debug, Default)]
struct ContainerState {
    children: Vec<Weak<RefCell<ElementState>>>,
}

#[derive(Debug, Default)]
struct ElementState {
    style: BTreeMap<StyleProperty, String>,
    natural_size: Point,
    parent: Option<Weak<RefCell<ContainerState>>>,
    attach_count: usize,
}

/// Container that headless elements are appended to
#[derive(Clone, Debug, Default)]
pub struct HeadlessContainer {
    state: Rc<RefCell<ContainerState>>,
}

impl HeadlessContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live children
    pub fn child_count(&self) -> usize {
        self.state
            .borrow()
            .children
            .iter()
            .filter(|child| child.upgrade().is_some())
            .count()
    }

    pub fn contains(&self, element: &HeadlessElement) -> bool {
        self.state
            .borrow()
            .children
            .iter()
            .any(|child| child.as_ptr() == Rc::as_ptr(&element.state))
    }

    fn remove(&self, element: &Rc<RefCell<ElementState>>) {
        self.state
            .borrow_mut()
            .children
            .retain(|child| child.as_ptr() != Rc::as_ptr(element));
    }
}

/// Element with an inline style map and a fixed natural size
#[derive(Clone, Debug, Default)]
pub struct HeadlessElement {
    state: Rc<RefCell<ElementState>>,
}

impl HeadlessElement {
    /// Create a detached element whose rendered size is `natural_size`
    pub fn new(natural_size: Point) -> Self {
        let element = Self::default();
        element.state.borrow_mut().natural_size = natural_size;
        element
    }

    /// Change the rendered size (as if content or CSS changed)
    pub fn set_natural_size(&self, size: Point) {
        self.state.borrow_mut().natural_size = size;
    }

    /// Inline style value, empty when unset (like `element.style.top`)
    pub fn style(&self, property: StyleProperty) -> String {
        self.state
            .borrow()
            .style
            .get(&property)
            .cloned()
            .unwrap_or_default()
    }

    pub fn is_attached(&self) -> bool {
        self.parent().is_some()
    }

    /// How many times the element has been appended to a container
    pub fn attach_count(&self) -> usize {
        self.state.borrow().attach_count
    }

    fn parent(&self) -> Option<HeadlessContainer> {
        self.state
            .borrow()
            .parent
            .as_ref()
            .and_then(Weak::upgrade)
            .map(|state| HeadlessContainer { state })
    }
}

impl OverlayElement for HeadlessElement {
    type Container = HeadlessContainer;

    fn is_child_of(&self, container: &HeadlessContainer) -> bool {
        match self.parent() {
            Some(parent) => Rc::ptr_eq(&parent.state, &container.state),
            None => false,
        }
    }

    fn attach_to(&self, container: &HeadlessContainer) -> Result<(), OverlayError> {
        // Appending moves the node, like the DOM does
        if let Some(parent) = self.parent() {
            parent.remove(&self.state);
        }

        container
            .state
            .borrow_mut()
            .children
            .push(Rc::downgrade(&self.state));

        let mut state = self.state.borrow_mut();
        state.parent = Some(Rc::downgrade(&container.state));
        state.attach_count += 1;
        Ok(())
    }

    fn detach(&self) -> Result<(), OverlayError> {
        if let Some(parent) = self.parent() {
            parent.remove(&self.state);
        }
        self.state.borrow_mut().parent = None;
        Ok(())
    }

    fn measure(&self) -> Point {
        self.state.borrow().natural_size
    }

    fn set_style(&self, property: StyleProperty, value: &str) -> Result<(), OverlayError> {
        self.state
            .borrow_mut()
            .style
            .insert(property, value.to_string());
        Ok(())
    }

    fn clear_style(&self, property: StyleProperty) -> Result<(), OverlayError> {
        self.state.borrow_mut().style.remove(&property);
        Ok(())
    }
}
