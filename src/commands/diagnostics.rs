use serde::Serialize;

use super::call;

#[derive(Serialize)]
struct LimitArgs {
    limit: Option<usize>,
}

pub async fn get_recent_logs(limit: Option<usize>) -> Result<Vec<String>, String> {
    let js_args = serde_wasm_bindgen::to_value(&LimitArgs { limit }).map_err(|e| e.to_string())?;
    call("get_recent_logs", js_args).await
}
