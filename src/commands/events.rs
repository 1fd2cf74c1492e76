//! Backend Event Subscriptions

use leptos::task::spawn_local;
use serde::Deserialize;
use wasm_bindgen::prelude::*;

use crate::models::ScreenSnapshot;

const SCREEN_CHANGED_EVENT: &str = "screen-changed";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "event"])]
    async fn listen(event: &str, handler: &Closure<dyn FnMut(JsValue)>) -> JsValue;
}

#[derive(Deserialize)]
struct EventEnvelope<T> {
    payload: T,
}

/// Call `handler` whenever the backend pushes a new snapshot
/// (busy released by its timer)
pub fn on_screen_changed(mut handler: impl FnMut(ScreenSnapshot) + 'static) {
    let closure = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
        match serde_wasm_bindgen::from_value::<EventEnvelope<ScreenSnapshot>>(event) {
            Ok(envelope) => handler(envelope.payload),
            Err(e) => web_sys::console::warn_1(&format!("[EVENT] Bad {} payload: {}", SCREEN_CHANGED_EVENT, e).into()),
        }
    });
    spawn_local(async move {
        let _unlisten = listen(SCREEN_CHANGED_EVENT, &closure).await;
        // Subscription lives as long as the page
        closure.forget();
    });
}
