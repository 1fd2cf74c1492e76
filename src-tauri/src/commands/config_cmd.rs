//! Store Connection Commands
//!
//! Read and replace the Parse connection settings.

use tauri::{AppHandle, State};
use task_board_core::config::{load_config, save_config};
use task_board_core::{ScreenSnapshot, StoreConfig};

use crate::{build_screen, AppState};

/// Get the saved store configuration, if any
#[tauri::command]
pub fn get_store_config(state: State<'_, AppState>) -> Result<Option<StoreConfig>, String> {
    load_config(&state.config_path).map_err(|e| e.to_string())
}

/// Save store configuration, rebuild the screen and load the list
#[tauri::command]
pub async fn save_store_config(
    app_handle: AppHandle,
    state: State<'_, AppState>,
    config: StoreConfig,
) -> Result<ScreenSnapshot, String> {
    config.validate().map_err(|e| e.to_string())?;
    let screen = build_screen(&app_handle, &config)?;
    save_config(&state.config_path, &config).map_err(|e| e.to_string())?;
    log::info!("Store config saved: {}", config.server_url);

    state.replace_screen(screen.clone()).await;
    Ok(screen.initialize().await)
}
