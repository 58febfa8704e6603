//! Viewer Overlay WASM API
//!
//! JavaScript-facing API for overlays, plus shared utilities for
//! serialization, argument decoding, error handling, and logging.
//!
//! # Module Structure
//!
//! - `helpers`: Logging macros, serde helpers, location/placement decoding
//! - `overlay`: The `Overlay` class exported to JavaScript

#[macro_use]
pub mod helpers;
pub mod overlay;

pub use overlay::WasmOverlay;
