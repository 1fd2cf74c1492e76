//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain.

mod task;
mod config;
mod diagnostics;
mod events;

use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

// Re-export all public items
pub use task::*;
pub use config::*;
pub use diagnostics::*;
pub use events::*;

/// Invoke a command and decode its result; a rejected command yields its error string
async fn call<T: DeserializeOwned>(cmd: &str, args: JsValue) -> Result<T, String> {
    let result = invoke(cmd, args).await.map_err(|e| {
        e.as_string().unwrap_or_else(|| format!("{} failed: {:?}", cmd, e))
    })?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
