//! Error types for overlay operations
//!
//! The overlay math itself cannot fail. Errors come from the host surface
//! (a DOM call that throws) or from malformed values handed in across the
//! WASM boundary.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Top-level overlay error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OverlayError {
    /// Appending the element to its container failed
    #[error("Failed to attach overlay element: {0}")]
    Attach(String),

    /// Removing the element from its parent failed
    #[error("Failed to detach overlay element: {0}")]
    Detach(String),

    /// Writing or clearing an inline style property failed
    #[error("Failed to update style property '{property}': {message}")]
    Style {
        property: &'static str,
        message: String,
    },

    /// Location value could not be decoded
    #[error("Invalid overlay location: {0}")]
    InvalidLocation(String),
}

/// Render a thrown JavaScript value as a readable message
pub fn js_message(value: &JsValue) -> String {
    // DOMException and friends are Error instances
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

impl From<OverlayError> for JsValue {
    fn from(err: OverlayError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
