//! Browser helpers: alerts and keyboard.

use wasm_bindgen::JsCast;

/// Blocking alert dialog
pub fn show_alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Dismiss the on-screen keyboard by blurring the focused element
pub fn dismiss_keyboard() {
    let focused = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.active_element())
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
    if let Some(el) = focused {
        let _ = el.blur();
    }
}
