//! Shared helpers for WASM API operations
//!
//! Common patterns for serialization, deserialization, error reporting and
//! logging across the JavaScript-facing API.

use wasm_bindgen::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::OverlayError;
use crate::overlay::{Location, OverlayPlacement};

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        log::debug!("[WASM] {}", format!($($arg)*))
    };
}

/// Log a warning message with [WASM] ⚠️ prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        log::warn!("[WASM] ⚠️ {}", format!($($arg)*))
    };
}

/// Log an error message with [WASM] ❌ prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        log::error!("[WASM] ❌ {}", format!($($arg)*))
    };
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        wasm_error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        wasm_error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

// ============================================================================
// Overlay Argument Decoding
// ============================================================================

/// Decode `{type: "point" | "rect", ...}` into a `Location`
pub fn location_from_js(value: JsValue) -> Result<Location, JsValue> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| overlay_error(OverlayError::InvalidLocation(e.to_string())))
}

/// Decode a placement given as a numeric code or a name
///
/// `undefined`/`null` mean `CENTER`. Anything else that does not name an
/// anchor is logged and also falls back to `CENTER`.
pub fn placement_from_js(value: &JsValue) -> OverlayPlacement {
    if value.is_undefined() || value.is_null() {
        return OverlayPlacement::Center;
    }

    let decoded = if let Some(code) = value.as_f64() {
        placement_from_code(code)
    } else if let Some(name) = value.as_string() {
        OverlayPlacement::try_from_name(&name)
    } else {
        None
    };

    decoded.unwrap_or_else(|| {
        wasm_warn!("Unrecognized overlay placement {:?}, using CENTER", value);
        OverlayPlacement::Center
    })
}

/// Decode a JS number as an anchor code; only whole numbers 0-8 qualify
pub fn placement_from_code(code: f64) -> Option<OverlayPlacement> {
    if code.fract() == 0.0 && (0.0..=255.0).contains(&code) {
        OverlayPlacement::try_from_u8(code as u8)
    } else {
        None
    }
}

// ============================================================================
// Result Conversion Helpers
// ============================================================================

/// Log an overlay error and convert it to a JsValue
pub fn overlay_error(err: OverlayError) -> JsValue {
    wasm_error!("{}", err);
    err.into()
}
