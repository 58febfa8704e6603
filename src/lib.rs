//! Viewer Overlay WASM Module
//!
//! Positions overlay elements (annotation markers, highlighted regions) over a
//! viewer surface. Overlays are either anchored at a point or scaled to a
//! rectangular region, and are written into the element's inline style on
//! every redraw.

pub mod errors;
pub mod geometry;
pub mod overlay;
pub mod surface;
pub mod viewport;
pub mod api;

// Re-export commonly used types
pub use errors::OverlayError;
pub use geometry::{Point, Rect};
pub use overlay::{Location, Overlay, OverlayPlacement, OverlayState};
pub use surface::{OverlayElement, StyleProperty};
pub use viewport::Viewport;

use wasm_bindgen::prelude::*;

#[cfg(feature = "console_log")]
const LOG_LEVEL: log::Level = log::Level::Debug;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // A logger already installed by the host page wins
    #[cfg(feature = "console_log")]
    {
        let _ = console_log::init_with_level(LOG_LEVEL);
    }

    log::info!("Viewer overlay WASM module initialized");
}
