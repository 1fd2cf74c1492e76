//! Store Connection Commands

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::call;
use crate::models::{ScreenSnapshot, StoreConfig};

#[derive(Serialize)]
struct ConfigArgs<'a> {
    config: &'a StoreConfig,
}

/// Get the saved connection, `None` before first setup
pub async fn get_store_config() -> Result<Option<StoreConfig>, String> {
    call("get_store_config", JsValue::NULL).await
}

/// Save the connection; the backend reloads the list with it
pub async fn save_store_config(config: &StoreConfig) -> Result<ScreenSnapshot, String> {
    let js_args = serde_wasm_bindgen::to_value(&ConfigArgs { config })
        .map_err(|e| format!("Serialization error: {}", e))?;
    call("save_store_config", js_args).await
}
