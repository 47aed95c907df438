//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::Window;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Current `(pathname, search)` of the page URL.
///
/// Both parts are empty when no window is available.
pub fn location_parts() -> (String, String) {
    let Some(location) = window().map(|w| w.location()) else {
        return (String::new(), String::new());
    };
    (
        location.pathname().unwrap_or_default(),
        location.search().unwrap_or_default(),
    )
}

/// Push a root-relative URL onto the session history.
///
/// Does not fire `popstate`; callers update their route state themselves.
pub fn push_url(url: &str) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(url));
    }
}
