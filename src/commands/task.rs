//! Task Screen Commands
//!
//! Frontend bindings for the task screen. Every call returns the backend's
//! snapshot after the operation.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::call;
use crate::models::ScreenSnapshot;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct TextArgs<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct IndexArgs {
    index: usize,
}

// ========================
// Commands
// ========================

pub async fn load_tasks() -> Result<ScreenSnapshot, String> {
    call("load_tasks", JsValue::NULL).await
}

pub async fn get_screen() -> Result<ScreenSnapshot, String> {
    call("get_screen", JsValue::NULL).await
}

pub async fn set_input_text(text: &str) -> Result<ScreenSnapshot, String> {
    let js_args = serde_wasm_bindgen::to_value(&TextArgs { text }).map_err(|e| e.to_string())?;
    call("set_input_text", js_args).await
}

pub async fn add_task() -> Result<ScreenSnapshot, String> {
    call("add_task", JsValue::NULL).await
}

pub async fn complete_task(index: usize) -> Result<ScreenSnapshot, String> {
    let js_args = serde_wasm_bindgen::to_value(&IndexArgs { index }).map_err(|e| e.to_string())?;
    call("complete_task", js_args).await
}

pub async fn refresh_tasks() -> Result<ScreenSnapshot, String> {
    call("refresh_tasks", JsValue::NULL).await
}
