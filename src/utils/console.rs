//! Developer console logging.
//!
//! Thin wrappers over `web_sys::console`. Off `wasm32` (native unit tests)
//! they do nothing, so model code can log freely.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

/// Log a debug trace.
pub fn debug(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::debug_1(&JsValue::from_str(message));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

/// Log a warning.
pub fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&JsValue::from_str(message));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

/// Log an error.
pub fn error(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&JsValue::from_str(message));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}
