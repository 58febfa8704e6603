//! JavaScript-facing overlay class
//!
//! Wraps `Overlay<HtmlElement>` so the viewer's JS renderer can create,
//! move, draw and tear down overlays:
//!
//! ```text
//! const overlay = new Overlay(marker, {type: "point", x: 120, y: 80}, "BOTTOM");
//! overlay.drawHTML(canvasContainer);
//! overlay.update({type: "rect", x: 0, y: 0, width: 64, height: 32});
//! overlay.destroy();
//! ```

use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement};

use crate::api::helpers::{deserialize, location_from_js, overlay_error, placement_from_js, serialize};
use crate::geometry::Point;
use crate::overlay::Overlay;
use crate::viewport::Viewport;

/// Overlay bound to a DOM element
#[wasm_bindgen(js_name = Overlay)]
pub struct WasmOverlay {
    inner: Overlay<HtmlElement>,
}

#[wasm_bindgen(js_class = Overlay)]
impl WasmOverlay {
    /// Create an overlay for `element` at `location`
    ///
    /// `placement` may be a numeric code (0-8), a name such as `"TOP_RIGHT"`,
    /// or omitted. It is ignored for rect locations.
    #[wasm_bindgen(constructor)]
    pub fn new(element: HtmlElement, location: JsValue, placement: JsValue) -> Result<WasmOverlay, JsValue> {
        let location = location_from_js(location)?;
        let placement = placement_from_js(&placement);

        wasm_log!("Overlay created: {:?}, placement={}", location, placement.name());

        Ok(WasmOverlay {
            inner: Overlay::new(element, location, placement),
        })
    }

    /// Move the overlay to a new logical location
    pub fn update(&mut self, location: JsValue, placement: JsValue) -> Result<(), JsValue> {
        let location = location_from_js(location)?;
        self.inner.update(location, placement_from_js(&placement));
        Ok(())
    }

    /// Set the pixel position and size used by the next `drawHTML`
    pub fn place(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.inner.place(Point::new(x, y), Point::new(width, height));
    }

    /// Attach to `container` if needed and write position/size styles
    #[wasm_bindgen(js_name = drawHTML)]
    pub fn draw_html(&mut self, container: &Element) -> Result<(), JsValue> {
        self.inner.draw_html(container).map_err(overlay_error)
    }

    /// Map logical bounds through `{origin: {x, y}, pixelsPerUnit}` and draw
    #[wasm_bindgen(js_name = drawInViewport)]
    pub fn draw_in_viewport(&mut self, viewport: JsValue, container: &Element) -> Result<(), JsValue> {
        let viewport: Viewport = deserialize(viewport, "Failed to deserialize viewport")?;
        self.inner
            .draw_in_viewport(&viewport, container)
            .map_err(overlay_error)
    }

    /// Detach the element and clear overlay styles
    pub fn destroy(&self) -> Result<(), JsValue> {
        self.inner.destroy().map_err(overlay_error)
    }

    /// The overlay's element
    #[wasm_bindgen(getter)]
    pub fn element(&self) -> HtmlElement {
        self.inner.element().clone()
    }

    /// Snapshot of scales/bounds/placement/position/size
    #[wasm_bindgen(js_name = getState)]
    pub fn state(&self) -> Result<JsValue, JsValue> {
        serialize(&self.inner.state(), "Failed to serialize overlay state")
    }
}
