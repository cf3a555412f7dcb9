//! Platform glue. Everything here is a no-op off wasm so the core types
//! stay testable on the host.

/// Reset the window scroll position to the top. Called on every navigation
/// so each page starts at its header, like a fresh page load would.
#[cfg(target_arch = "wasm32")]
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_to_top() {}
